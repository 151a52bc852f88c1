//! Source emission: assemble the companion unit's text
//!
//! The emitters all consume the same ordered `FieldPlan` list; none of them
//! re-derives retention or precedence. Output is deterministic for a given
//! descriptor, directives, and type database: imports arrive pre-sorted and
//! field sections follow declaration order.

mod java;

use crate::error::Result;
use crate::plan::FieldPlan;
use crate::spec::AnnotatedClass;
use std::collections::BTreeSet;

/// Render configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Include the provenance header (source name and content hash; no
    /// timestamps, output stays reproducible)
    pub provenance: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { provenance: true }
    }
}

/// Render one complete companion unit to Java source text.
///
/// Section order is fixed: header, package, imports, fields, accessors,
/// forward conversion, reverse conversion, string representation, equality,
/// hash.
pub fn render_unit(
    unit: &AnnotatedClass,
    plans: &[FieldPlan],
    imports: &BTreeSet<String>,
    config: &RenderConfig,
) -> Result<String> {
    java::render(unit, plans, imports, config)
}
