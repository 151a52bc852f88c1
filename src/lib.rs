// Production-quality lints
#![warn(
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
// Deny truly dangerous patterns
#![deny(clippy::mem_forget)]
// Allow common patterns in library code
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! # dtoforge: companion DTO source generation
//!
//! Given a descriptor of an annotated model type (fields, declared types)
//! and its generation directives, dtoforge emits the complete source text of
//! a companion transfer-object type: a flattened, serialization-friendly
//! projection suitable for crossing an API boundary without exposing
//! internal relationships directly.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dtoforge::{AnnotatedClass, Engine, InMemoryTypeIndex, MemorySink};
//!
//! let unit = AnnotatedClass::from_yaml(r#"
//! class:
//!   name: org.example.Person
//!   package: org.example
//!   fields:
//!     - name: name
//!       type: { name: java.lang.String }
//!     - name: address
//!       type: { name: org.example.Address }
//!     - name: friends
//!       type:
//!         name: java.util.List
//!         args:
//!           - { name: org.example.Person }
//! directives:
//!   nested:
//!     - field: address
//!       dto: AddressDTO
//! "#)?;
//!
//! let mut index = InMemoryTypeIndex::new();
//! index.register(unit.class.name.clone(), unit.directives.clone());
//!
//! let engine = Engine::new(&index);
//! let mut sink = MemorySink::new();
//! let report = engine.generate_all(&[unit], &mut sink);
//! assert!(report.is_clean());
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! ClassDescriptor + DtoDirectives
//!        │
//!        ├──► GenerationSpec::resolve ──► normalized spec
//!        │
//!        ├──► cycle::check ─────────────► gate (aborts this type only)
//!        │
//!        ├──► classify + resolve_companion per field ──► FieldPlan list
//!        │
//!        └──► collect_imports + render_unit ──► companion source text
//! ```
//!
//! The engine holds no global state: eligibility and directive lookups go
//! through the injected [`TypeIndex`] capability, and every structure is
//! rebuilt fresh per pass, so output is deterministic and repeatable.

// Core data model
pub mod descriptor;
pub mod error;
pub mod index;
pub mod spec;

// Generation pipeline
pub mod classify;
pub mod cycle;
pub mod engine;
pub mod imports;
pub mod plan;
pub mod render;
pub mod resolve;
pub mod util;

// Re-exports
pub use classify::{classify, is_reserved, CollectionKind, TypeShape};
pub use descriptor::{ClassDescriptor, FieldDescriptor, TypeRef};
pub use engine::{BatchReport, Engine, FsSink, MemorySink, Outcome, SourceSink};
pub use error::{Error, Result};
pub use imports::collect_imports;
pub use index::{InMemoryTypeIndex, TypeIndex};
pub use plan::{plan_fields, FieldBinding, FieldPlan, ID_TYPE};
pub use render::{render_unit, RenderConfig};
pub use resolve::{base_type, resolve_companion, DTO_SUFFIX};
pub use spec::{AnnotatedClass, DtoDirectives, GenerationSpec, NestedMapping};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
