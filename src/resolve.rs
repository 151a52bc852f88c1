//! Nested companion resolution
//!
//! Decides whether a field's values should be represented by a companion
//! type. Manual mapping always wins; otherwise the field's base type is
//! auto-detected against the type database. Resolution is a pure function of
//! (field, spec, type database); it never mutates the spec.

use crate::classify::{is_reserved, TypeShape};
use crate::descriptor::TypeRef;
use crate::index::TypeIndex;
use crate::spec::GenerationSpec;

/// Fixed naming convention suffix for companion types
pub const DTO_SUFFIX: &str = "DTO";

/// Base type of a field: the element type for collections, the value type
/// for maps, the type itself otherwise.
pub fn base_type<'a>(typ: &'a TypeRef, shape: &'a TypeShape) -> &'a TypeRef {
    match shape {
        TypeShape::Collection(_, elem) => elem,
        TypeShape::Map(_, value) => value,
        TypeShape::Scalar | TypeShape::Plain => typ,
    }
}

/// Resolve the companion type name for one field, if any.
///
/// 1. An explicit mapping for the field name wins outright.
/// 2. Base types in the reserved namespace never get a companion.
/// 3. Otherwise the base type is auto-detected: if it carries the generation
///    marker, the companion is its simple name plus the `DTO` suffix.
pub fn resolve_companion(
    field_name: &str,
    typ: &TypeRef,
    shape: &TypeShape,
    spec: &GenerationSpec,
    index: &dyn TypeIndex,
) -> Option<String> {
    if let Some(dto) = spec.explicit_nested.get(field_name) {
        return Some(dto.clone());
    }

    let base = base_type(typ, shape);
    if is_reserved(&base.name) {
        return None;
    }

    if index.is_eligible(&base.name) {
        return Some(format!("{}{}", base.simple_name(), DTO_SUFFIX));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use crate::index::InMemoryTypeIndex;
    use crate::spec::{DtoDirectives, NestedMapping};

    fn spec_with_nested(field: &str, dto: &str) -> GenerationSpec {
        GenerationSpec::resolve(&DtoDirectives {
            nested: vec![NestedMapping {
                field: field.into(),
                dto: dto.into(),
            }],
            ..Default::default()
        })
    }

    #[test]
    fn test_manual_mapping_wins() {
        // Explicit mapping applies even when the type is not in the index.
        let spec = spec_with_nested("address", "AddressDTO");
        let index = InMemoryTypeIndex::new();
        let typ = TypeRef::new("org.example.Address");
        let shape = classify(&typ);

        assert_eq!(
            resolve_companion("address", &typ, &shape, &spec, &index).as_deref(),
            Some("AddressDTO")
        );
    }

    #[test]
    fn test_auto_detection_through_collection() {
        let mut index = InMemoryTypeIndex::new();
        index.register("org.example.Person", DtoDirectives::default());

        let typ = TypeRef::parametrized("java.util.List", vec!["org.example.Person".into()]);
        let shape = classify(&typ);

        assert_eq!(
            resolve_companion("friends", &typ, &shape, &GenerationSpec::default(), &index)
                .as_deref(),
            Some("PersonDTO")
        );
    }

    #[test]
    fn test_auto_detection_uses_map_value_type() {
        let mut index = InMemoryTypeIndex::new();
        index.register("org.example.Address", DtoDirectives::default());

        let typ = TypeRef::parametrized(
            "java.util.Map",
            vec!["java.lang.String".into(), "org.example.Address".into()],
        );
        let shape = classify(&typ);

        assert_eq!(
            resolve_companion("places", &typ, &shape, &GenerationSpec::default(), &index)
                .as_deref(),
            Some("AddressDTO")
        );
    }

    #[test]
    fn test_reserved_namespace_never_resolves() {
        let mut index = InMemoryTypeIndex::new();
        // Even a (nonsense) eligible java.lang entry must not resolve.
        index.register("java.lang.String", DtoDirectives::default());

        let typ = TypeRef::new("java.lang.String");
        let shape = classify(&typ);

        assert_eq!(
            resolve_companion("name", &typ, &shape, &GenerationSpec::default(), &index),
            None
        );
    }

    #[test]
    fn test_lookup_miss_is_silent() {
        let index = InMemoryTypeIndex::new();
        let typ = TypeRef::new("org.example.Unknown");
        let shape = classify(&typ);

        assert_eq!(
            resolve_companion("other", &typ, &shape, &GenerationSpec::default(), &index),
            None
        );
    }
}
