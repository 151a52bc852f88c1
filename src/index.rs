//! Type lookup capability
//!
//! The engine never owns a global table of annotated types. Eligibility and
//! directive lookups go through the `TypeIndex` trait so the host environment
//! (or a test) supplies the type database as an injected capability.

use crate::spec::DtoDirectives;
use crate::util::package_name;
use std::collections::HashMap;

/// Read-only view of the host environment's type database.
///
/// Expected to be stable for the duration of one generation pass; all types
/// are known upfront to the host in a single compilation-like unit.
pub trait TypeIndex {
    /// Does the qualified type carry the generation marker?
    fn is_eligible(&self, qualified: &str) -> bool;

    /// The directive payload of an eligible type, if any
    fn directives_of(&self, qualified: &str) -> Option<&DtoDirectives>;

    /// Package a qualified type lives in. The default derives it from the
    /// qualified name itself.
    fn package_of(&self, qualified: &str) -> Option<String> {
        package_name(qualified).map(str::to_string)
    }
}

/// In-memory type database, for drivers and deterministic test doubles
#[derive(Debug, Clone, Default)]
pub struct InMemoryTypeIndex {
    annotated: HashMap<String, DtoDirectives>,
}

impl InMemoryTypeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type as carrying the generation marker
    pub fn register(
        &mut self,
        qualified: impl Into<String>,
        directives: DtoDirectives,
    ) -> &mut Self {
        self.annotated.insert(qualified.into(), directives);
        self
    }
}

impl TypeIndex for InMemoryTypeIndex {
    fn is_eligible(&self, qualified: &str) -> bool {
        self.annotated.contains_key(qualified)
    }

    fn directives_of(&self, qualified: &str) -> Option<&DtoDirectives> {
        self.annotated.get(qualified)
    }
}
