//! Model descriptors: the input side of the engine
//!
//! A `ClassDescriptor` is the read-only view of one annotated model type as
//! supplied by the host reflection facility: qualified name, package, and the
//! ordered list of fields. Descriptors are values built fresh for one
//! generation pass; the engine never mutates them.
//!
//! ## Example descriptor
//!
//! ```yaml
//! name: org.example.Person
//! package: org.example
//! fields:
//!   - name: name
//!     type: { name: java.lang.String }
//!   - name: friends
//!     type:
//!       name: java.util.List
//!       args:
//!         - { name: org.example.Person }
//! ```

use crate::error::{Error, Result};
use crate::util::simple_name;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A declared type reference: qualified base name plus ordered type arguments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TypeRef {
    /// Qualified base name (`java.util.List`, `org.example.Address`, `long`)
    pub name: String,

    /// Type arguments, in declaration order; empty when unparametrized
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<TypeRef>,
}

impl TypeRef {
    /// Unparametrized type reference
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Parametrized type reference
    pub fn parametrized(name: impl Into<String>, args: Vec<TypeRef>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    /// Simple name of the base type (`org.example.Address` -> `Address`)
    pub fn simple_name(&self) -> &str {
        simple_name(&self.name)
    }
}

impl std::fmt::Display for TypeRef {
    /// Renders the Java source form, `java.util.List<org.example.Person>`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.args.is_empty() {
            let args: Vec<_> = self.args.iter().map(|a| a.to_string()).collect();
            write!(f, "<{}>", args.join(", "))?;
        }
        Ok(())
    }
}

impl From<&str> for TypeRef {
    fn from(name: &str) -> Self {
        TypeRef::new(name)
    }
}

/// One field of a model type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FieldDescriptor {
    /// Field name as declared in the model
    pub name: String,

    /// Declared type
    #[serde(rename = "type")]
    pub typ: TypeRef,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, typ: impl Into<TypeRef>) -> Self {
        Self {
            name: name.into(),
            typ: typ.into(),
        }
    }
}

/// One annotated model type, as supplied by the host environment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ClassDescriptor {
    /// Qualified name of the model type
    pub name: String,

    /// Package the model (and its companion) live in
    pub package: String,

    /// Fields in declaration order; emission order follows this exactly
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
}

impl ClassDescriptor {
    /// Simple name of the model type
    pub fn simple_name(&self) -> &str {
        simple_name(&self.name)
    }

    /// Parse a descriptor from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_norway::from_str(yaml).map_err(|e| Error::DescriptorParse(e.to_string()))
    }

    /// Parse a descriptor from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::DescriptorParse(e.to_string()))
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String> {
        serde_norway::to_string(self).map_err(|e| Error::DescriptorParse(e.to_string()))
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::DescriptorParse(e.to_string()))
    }
}
