//! Field planning: retention, precedence, and emitted name/type
//!
//! All six section emitters consume the same ordered list of `FieldPlan`s,
//! so flatten-vs-nested precedence and the emitted name/type pair are
//! computed exactly once, here, never re-derived inline by an emitter.

use crate::classify::{classify, TypeShape};
use crate::descriptor::{ClassDescriptor, TypeRef};
use crate::index::TypeIndex;
use crate::resolve::resolve_companion;
use crate::spec::GenerationSpec;
use crate::util::simple_name;

/// Fixed numeric identifier type used for flattened relations
pub const ID_TYPE: &str = "Long";

/// How a retained field is represented in the companion type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldBinding {
    /// Relation represented only by its identifier; flatten strictly wins
    /// over any nested mapping on the same field
    Flatten,
    /// Value(s) represented by the named companion type
    Nested(String),
    /// Direct value copy, type unchanged
    Copy,
}

/// One retained field with everything the emitters need
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPlan {
    /// Original field name on the model
    pub name: String,

    /// Original declared type
    pub typ: TypeRef,

    /// Classified shape of the declared type
    pub shape: TypeShape,

    /// Representation in the companion type
    pub binding: FieldBinding,

    /// Field name in the companion declaration (`name` or `nameId`)
    pub emitted_name: String,

    /// Field type in the companion declaration, Java source form
    pub emitted_type: String,
}

impl FieldPlan {
    /// Companion type name, when the binding is nested
    pub fn companion(&self) -> Option<&str> {
        match &self.binding {
            FieldBinding::Nested(dto) => Some(dto),
            _ => None,
        }
    }

    /// String-valued fields get quoted in the string representation
    pub fn is_string(&self) -> bool {
        self.binding != FieldBinding::Flatten && self.typ.name == "java.lang.String"
    }
}

/// Compute the plans for every retained field, in declaration order.
///
/// Precedence per field: flatten first, then nested (explicit before auto),
/// then verbatim copy.
pub fn plan_fields(
    class: &ClassDescriptor,
    spec: &GenerationSpec,
    index: &dyn TypeIndex,
) -> Vec<FieldPlan> {
    class
        .fields
        .iter()
        .filter(|field| spec.retains(&field.name))
        .map(|field| {
            let shape = classify(&field.typ);

            if spec.is_flattened(&field.name) {
                return FieldPlan {
                    name: field.name.clone(),
                    typ: field.typ.clone(),
                    shape,
                    binding: FieldBinding::Flatten,
                    emitted_name: format!("{}Id", field.name),
                    emitted_type: ID_TYPE.to_string(),
                };
            }

            match resolve_companion(&field.name, &field.typ, &shape, spec, index) {
                Some(dto) => {
                    let emitted_type = emitted_nested_type(&shape, &dto, &field.typ);
                    FieldPlan {
                        name: field.name.clone(),
                        typ: field.typ.clone(),
                        shape,
                        binding: FieldBinding::Nested(dto),
                        emitted_name: field.name.clone(),
                        emitted_type,
                    }
                }
                None => FieldPlan {
                    name: field.name.clone(),
                    emitted_name: field.name.clone(),
                    emitted_type: field.typ.to_string(),
                    typ: field.typ.clone(),
                    shape,
                    binding: FieldBinding::Copy,
                },
            }
        })
        .collect()
}

/// Companion type wrapped in the original container shape: element position
/// for collections, value position for maps with the key kept verbatim.
fn emitted_nested_type(shape: &TypeShape, dto: &str, typ: &TypeRef) -> String {
    match shape {
        TypeShape::Collection(kind, _) => format!("{}<{}>", kind.simple(), dto),
        TypeShape::Map(key, _) => {
            format!("java.util.Map<{}, {}>", simple_name(&key.name), dto)
        }
        TypeShape::Scalar | TypeShape::Plain => dto.to_string(),
    }
}
