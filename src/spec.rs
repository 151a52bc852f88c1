//! Generation directives: the declarative side of the engine
//!
//! `DtoDirectives` is the raw directive payload attached to a model type:
//! which fields to keep, which relations to flatten to an identifier, and
//! which fields map to an explicitly named companion type. `GenerationSpec`
//! is its normalized form, built once per generation pass.
//!
//! ## Example directives
//!
//! ```yaml
//! fields: []
//! flatten_relations: [owner]
//! nested:
//!   - field: address
//!     dto: AddressDTO
//! ```

use crate::descriptor::ClassDescriptor;
use crate::error::{Error, Result};
use crate::resolve::DTO_SUFFIX;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// An explicit field-to-companion mapping directive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct NestedMapping {
    /// Field name on the model
    pub field: String,

    /// Companion type simple name, e.g. `AddressDTO`
    pub dto: String,
}

/// Raw directive payload for one annotated type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DtoDirectives {
    /// Selected field names; empty means all fields
    #[serde(default)]
    pub fields: Vec<String>,

    /// Relation fields represented only by their identifier
    #[serde(default)]
    pub flatten_relations: Vec<String>,

    /// Explicit nested companion mappings
    #[serde(default)]
    pub nested: Vec<NestedMapping>,
}

/// Normalized generation specification for one annotated type
///
/// Unknown field names are tolerated silently: a directive naming a field the
/// model does not have simply never matches during field iteration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationSpec {
    /// Retained field names; empty means "all fields"
    pub selected_fields: BTreeSet<String>,

    /// Fields represented by their identifier only
    pub flatten_relations: BTreeSet<String>,

    /// Field name to companion type name
    pub explicit_nested: BTreeMap<String, String>,
}

impl GenerationSpec {
    /// Normalize a raw directive payload. No validation beyond building the
    /// lookup structures.
    pub fn resolve(directives: &DtoDirectives) -> Self {
        Self {
            selected_fields: directives.fields.iter().cloned().collect(),
            flatten_relations: directives.flatten_relations.iter().cloned().collect(),
            explicit_nested: directives
                .nested
                .iter()
                .map(|m| (m.field.clone(), m.dto.clone()))
                .collect(),
        }
    }

    /// Field retention rule: retained iff the selection is empty or names it
    pub fn retains(&self, field: &str) -> bool {
        self.selected_fields.is_empty() || self.selected_fields.contains(field)
    }

    /// Whether the field is represented by its identifier only
    pub fn is_flattened(&self, field: &str) -> bool {
        self.flatten_relations.contains(field)
    }
}

/// One annotated type paired with its directives, the unit of generation
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct AnnotatedClass {
    /// The model descriptor
    pub class: ClassDescriptor,

    /// The directive payload attached to it
    #[serde(default)]
    pub directives: DtoDirectives,
}

impl AnnotatedClass {
    pub fn new(class: ClassDescriptor, directives: DtoDirectives) -> Self {
        Self { class, directives }
    }

    /// Companion type name under the fixed naming convention
    pub fn dto_name(&self) -> String {
        format!("{}{}", self.class.simple_name(), DTO_SUFFIX)
    }

    /// Qualified name of the companion unit (same package as the model)
    pub fn qualified_dto_name(&self) -> String {
        format!("{}.{}", self.class.package, self.dto_name())
    }

    /// Parse a unit from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_norway::from_str(yaml).map_err(|e| Error::DescriptorParse(e.to_string()))
    }

    /// Parse a unit from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::DescriptorParse(e.to_string()))
    }

    /// Content hash of descriptor plus directives, for the provenance header.
    /// Deterministic: no timestamps, no environment input.
    pub fn hash(&self) -> String {
        use sha2::{Digest, Sha256};
        let content = serde_json::to_string(self).unwrap_or_default();
        let mut hasher = Sha256::new();
        hasher.update(content.as_bytes());
        format!("sha256:{}", hex::encode(&hasher.finalize()[..8]))
    }
}
