//! Import collection for the emitted unit
//!
//! Walks the retained field plans and unions the minimal qualified-name set
//! the emitted text references. The result is a `BTreeSet`, so the emitted
//! import list is deduplicated and lexicographically ordered.

use crate::classify::TypeShape;
use crate::descriptor::ClassDescriptor;
use crate::plan::FieldPlan;
use std::collections::BTreeSet;

/// Mapping/collecting utility required by container conversions
pub const COLLECTORS: &str = "java.util.stream.Collectors";

/// Equality/hash utility, always required by the emitted equals/hashCode
pub const OBJECTS: &str = "java.util.Objects";

/// Collect the sorted import set for one unit
pub fn collect_imports(class: &ClassDescriptor, plans: &[FieldPlan]) -> BTreeSet<String> {
    let mut imports = BTreeSet::new();

    for plan in plans {
        match &plan.shape {
            TypeShape::Collection(kind, _) => {
                imports.insert(kind.qualified().to_string());
                imports.insert(COLLECTORS.to_string());
            }
            TypeShape::Map(_, _) => {
                imports.insert("java.util.Map".to_string());
                imports.insert(COLLECTORS.to_string());
            }
            TypeShape::Scalar | TypeShape::Plain => {}
        }

        // Companions live in the source type's own package.
        if let Some(dto) = plan.companion() {
            imports.insert(format!("{}.{}", class.package, dto));
        }
    }

    imports.insert(OBJECTS.to_string());
    imports
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{FieldDescriptor, TypeRef};
    use crate::index::InMemoryTypeIndex;
    use crate::plan::plan_fields;
    use crate::spec::{DtoDirectives, GenerationSpec};

    #[test]
    fn test_minimal_unit_still_imports_objects() {
        let class = ClassDescriptor {
            name: "org.example.Tag".into(),
            package: "org.example".into(),
            fields: vec![FieldDescriptor::new("label", "java.lang.String")],
        };
        let index = InMemoryTypeIndex::new();
        let plans = plan_fields(&class, &GenerationSpec::default(), &index);

        let imports = collect_imports(&class, &plans);
        assert_eq!(
            imports.into_iter().collect::<Vec<_>>(),
            vec!["java.util.Objects".to_string()]
        );
    }

    #[test]
    fn test_collection_map_and_companion_imports_sorted() {
        let class = ClassDescriptor {
            name: "org.example.Person".into(),
            package: "org.example".into(),
            fields: vec![
                FieldDescriptor::new(
                    "friends",
                    TypeRef::parametrized("java.util.List", vec!["org.example.Person".into()]),
                ),
                FieldDescriptor::new(
                    "places",
                    TypeRef::parametrized(
                        "java.util.Map",
                        vec!["java.lang.String".into(), "org.example.Address".into()],
                    ),
                ),
            ],
        };
        let mut index = InMemoryTypeIndex::new();
        index.register("org.example.Person", DtoDirectives::default());
        index.register("org.example.Address", DtoDirectives::default());
        let plans = plan_fields(&class, &GenerationSpec::default(), &index);

        let imports: Vec<_> = collect_imports(&class, &plans).into_iter().collect();
        assert_eq!(
            imports,
            vec![
                "java.util.List".to_string(),
                "java.util.Map".to_string(),
                "java.util.Objects".to_string(),
                "java.util.stream.Collectors".to_string(),
                "org.example.AddressDTO".to_string(),
                "org.example.PersonDTO".to_string(),
            ]
        );
    }

    #[test]
    fn test_plain_collection_still_pulls_container_imports() {
        // A copied List<String> keeps its container abstraction import.
        let class = ClassDescriptor {
            name: "org.example.Tag".into(),
            package: "org.example".into(),
            fields: vec![FieldDescriptor::new(
                "aliases",
                TypeRef::parametrized("java.util.List", vec!["java.lang.String".into()]),
            )],
        };
        let index = InMemoryTypeIndex::new();
        let plans = plan_fields(&class, &GenerationSpec::default(), &index);

        let imports = collect_imports(&class, &plans);
        assert!(imports.contains("java.util.List"));
        assert!(imports.contains("java.util.stream.Collectors"));
    }
}
