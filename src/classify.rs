//! Type classification: declared types to tagged shapes
//!
//! Classification happens once per field and the resulting `TypeShape` is
//! threaded through every downstream component, so the container-shape
//! policy lives in exactly one place. Classification is pure: the same type
//! reference always yields the same shape.

use crate::descriptor::TypeRef;

/// Java primitive type names
const PRIMITIVES: &[&str] = &[
    "boolean", "byte", "short", "int", "long", "float", "double", "char", "void",
];

/// Is the qualified name in the reserved primitive/standard namespace?
/// Reserved types never resolve to a companion.
pub fn is_reserved(name: &str) -> bool {
    name.starts_with("java.lang.") || PRIMITIVES.contains(&name)
}

/// The three ordered-container shapes the engine understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    List,
    Set,
    Collection,
}

impl CollectionKind {
    /// Match a qualified base name against the known container shapes
    pub fn from_qualified(name: &str) -> Option<Self> {
        match name {
            "java.util.List" => Some(CollectionKind::List),
            "java.util.Set" => Some(CollectionKind::Set),
            "java.util.Collection" => Some(CollectionKind::Collection),
            _ => None,
        }
    }

    /// Qualified name of the container abstraction, for the import set
    pub fn qualified(&self) -> &'static str {
        match self {
            CollectionKind::List => "java.util.List",
            CollectionKind::Set => "java.util.Set",
            CollectionKind::Collection => "java.util.Collection",
        }
    }

    /// Simple name used in emitted declarations
    pub fn simple(&self) -> &'static str {
        match self {
            CollectionKind::List => "List",
            CollectionKind::Set => "Set",
            CollectionKind::Collection => "Collection",
        }
    }

    /// Stream collector rebuilding the same container kind
    pub fn collector(&self) -> &'static str {
        match self {
            CollectionKind::Set => "java.util.stream.Collectors.toSet()",
            // Collection has no dedicated collector; a List satisfies it
            CollectionKind::List | CollectionKind::Collection => {
                "java.util.stream.Collectors.toList()"
            }
        }
    }
}

/// Shape of a field's declared type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeShape {
    /// Reserved primitive/standard type, copied verbatim
    Scalar,
    /// One of the known ordered-container shapes, with its element type
    Collection(CollectionKind, TypeRef),
    /// Key-value container, with key and value types
    Map(TypeRef, TypeRef),
    /// Anything else, carried unchanged
    Plain,
}

/// Classify a declared type. Pure, no side effects.
///
/// An unparametrized container falls back to `Plain` (degenerate case: no
/// element type to project through a companion).
pub fn classify(typ: &TypeRef) -> TypeShape {
    if is_reserved(&typ.name) {
        return TypeShape::Scalar;
    }

    if let Some(kind) = CollectionKind::from_qualified(&typ.name) {
        if typ.args.len() == 1 {
            return TypeShape::Collection(kind, typ.args[0].clone());
        }
        return TypeShape::Plain;
    }

    if typ.name == "java.util.Map" {
        if typ.args.len() == 2 {
            return TypeShape::Map(typ.args[0].clone(), typ.args[1].clone());
        }
        return TypeShape::Plain;
    }

    TypeShape::Plain
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_types() {
        assert_eq!(classify(&TypeRef::new("java.lang.String")), TypeShape::Scalar);
        assert_eq!(classify(&TypeRef::new("java.lang.Long")), TypeShape::Scalar);
        assert_eq!(classify(&TypeRef::new("long")), TypeShape::Scalar);
        assert_eq!(classify(&TypeRef::new("boolean")), TypeShape::Scalar);
    }

    #[test]
    fn test_collection_shapes() {
        for (name, kind) in [
            ("java.util.List", CollectionKind::List),
            ("java.util.Set", CollectionKind::Set),
            ("java.util.Collection", CollectionKind::Collection),
        ] {
            let typ = TypeRef::parametrized(name, vec!["org.example.Person".into()]);
            assert_eq!(
                classify(&typ),
                TypeShape::Collection(kind, "org.example.Person".into())
            );
        }
    }

    #[test]
    fn test_map_shape() {
        let typ = TypeRef::parametrized(
            "java.util.Map",
            vec!["java.lang.String".into(), "org.example.Address".into()],
        );
        assert_eq!(
            classify(&typ),
            TypeShape::Map("java.lang.String".into(), "org.example.Address".into())
        );
    }

    #[test]
    fn test_unparametrized_container_falls_back_to_plain() {
        assert_eq!(classify(&TypeRef::new("java.util.List")), TypeShape::Plain);
        assert_eq!(classify(&TypeRef::new("java.util.Map")), TypeShape::Plain);
    }

    #[test]
    fn test_map_with_wrong_arity_is_plain() {
        let typ = TypeRef::parametrized("java.util.Map", vec!["java.lang.String".into()]);
        assert_eq!(classify(&typ), TypeShape::Plain);
    }

    #[test]
    fn test_entity_type_is_plain() {
        assert_eq!(classify(&TypeRef::new("org.example.Address")), TypeShape::Plain);
    }

    #[test]
    fn test_classification_is_idempotent() {
        let typ = TypeRef::parametrized("java.util.Set", vec!["org.example.Tag".into()]);
        assert_eq!(classify(&typ), classify(&typ));
    }

    #[test]
    fn test_set_collector_preserves_kind() {
        assert_eq!(
            CollectionKind::Set.collector(),
            "java.util.stream.Collectors.toSet()"
        );
        assert_eq!(
            CollectionKind::List.collector(),
            "java.util.stream.Collectors.toList()"
        );
    }
}
