//! Direct cycle detection over explicit nested mappings
//!
//! Two companion types must not nest each other directly: the generated
//! `from` conversions would recurse without end. The check runs before any
//! emission for the type, so no partial unit is ever produced for an
//! offending type. Only the direct two-party case is checked; transitive
//! chains of length three or more are out of scope.

use crate::descriptor::ClassDescriptor;
use crate::error::{Error, Result};
use crate::index::TypeIndex;
use crate::resolve::DTO_SUFFIX;
use crate::spec::GenerationSpec;

/// Fail if any explicitly nested type of `class` explicitly nests `class`
/// back. A self-reference through a collection is not a cycle.
pub fn check(class: &ClassDescriptor, spec: &GenerationSpec, index: &dyn TypeIndex) -> Result<()> {
    let own_dto = format!("{}{}", class.simple_name(), DTO_SUFFIX);

    for companion in spec.explicit_nested.values() {
        let nested_simple = companion.strip_suffix(DTO_SUFFIX).unwrap_or(companion);
        let nested_qualified = format!("{}.{}", class.package, nested_simple);

        // Only generation-eligible nested types have mappings to inspect.
        let Some(directives) = index.directives_of(&nested_qualified) else {
            continue;
        };

        for back in &directives.nested {
            if back.dto == own_dto {
                return Err(Error::DirectCycle {
                    type_name: class.simple_name().to_string(),
                    nested: nested_simple.to_string(),
                });
            }
        }
    }

    Ok(())
}
