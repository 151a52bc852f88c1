//! Generation engine: per-type orchestration
//!
//! Processes each annotated type to completion before the next begins:
//! resolve directives, gate on the cycle check, plan fields, collect
//! imports, emit, write. An error in one type aborts that type only; the
//! batch always runs to the end and reports per-type outcomes.

use crate::cycle;
use crate::error::{Error, Result};
use crate::imports::collect_imports;
use crate::index::TypeIndex;
use crate::plan::plan_fields;
use crate::render::{render_unit, RenderConfig};
use crate::spec::{AnnotatedClass, GenerationSpec};
use crate::util::simple_name;
use std::collections::BTreeMap;
use std::io;
use std::path::PathBuf;

/// Output boundary: receives one complete source unit per processed type
pub trait SourceSink {
    /// Write the unit named by its qualified companion name
    fn write_unit(&mut self, qualified_name: &str, contents: &str) -> io::Result<()>;
}

/// Sink writing `<SimpleName>.java` files under a root directory
#[derive(Debug, Clone)]
pub struct FsSink {
    root: PathBuf,
}

impl FsSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl SourceSink for FsSink {
    fn write_unit(&mut self, qualified_name: &str, contents: &str) -> io::Result<()> {
        std::fs::create_dir_all(&self.root)?;
        let file = self.root.join(format!("{}.java", simple_name(qualified_name)));
        std::fs::write(file, contents)
    }
}

/// In-memory sink for tests and dry runs
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub units: BTreeMap<String, String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SourceSink for MemorySink {
    fn write_unit(&mut self, qualified_name: &str, contents: &str) -> io::Result<()> {
        self.units.insert(qualified_name.to_string(), contents.to_string());
        Ok(())
    }
}

/// Per-type result of one batch
#[derive(Debug)]
pub enum Outcome {
    /// Unit emitted and written
    Generated { qualified: String },
    /// Type skipped; the error says why
    Aborted { qualified: String, error: Error },
}

/// Result of one generation pass
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<Outcome>,
}

impl BatchReport {
    /// Qualified names of successfully generated units, in pass order
    pub fn generated(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                Outcome::Generated { qualified } => Some(qualified.as_str()),
                Outcome::Aborted { .. } => None,
            })
            .collect()
    }

    /// Aborted types with their errors, in pass order
    pub fn aborted(&self) -> Vec<(&str, &Error)> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                Outcome::Aborted { qualified, error } => Some((qualified.as_str(), error)),
                Outcome::Generated { .. } => None,
            })
            .collect()
    }

    pub fn is_clean(&self) -> bool {
        self.aborted().is_empty()
    }
}

/// The generation engine
pub struct Engine<'a> {
    index: &'a dyn TypeIndex,
    config: RenderConfig,
}

impl<'a> Engine<'a> {
    pub fn new(index: &'a dyn TypeIndex) -> Self {
        Self {
            index,
            config: RenderConfig::default(),
        }
    }

    pub fn with_config(index: &'a dyn TypeIndex, config: RenderConfig) -> Self {
        Self { index, config }
    }

    /// Generate the companion source text for one annotated type.
    ///
    /// The cycle gate runs before any emission, so a failing type produces
    /// no text at all.
    pub fn generate_unit(&self, unit: &AnnotatedClass) -> Result<String> {
        let spec = GenerationSpec::resolve(&unit.directives);
        cycle::check(&unit.class, &spec, self.index)?;

        let plans = plan_fields(&unit.class, &spec, self.index);
        let imports = collect_imports(&unit.class, &plans);
        render_unit(unit, &plans, &imports, &self.config)
    }

    /// Process a whole pass. Failures are isolated per type: a cycle or a
    /// write failure aborts that type and the pass continues.
    pub fn generate_all(&self, units: &[AnnotatedClass], sink: &mut dyn SourceSink) -> BatchReport {
        let mut report = BatchReport::default();

        for unit in units {
            let qualified = unit.qualified_dto_name();
            let outcome = match self.generate_unit(unit) {
                Ok(text) => match sink.write_unit(&qualified, &text) {
                    Ok(()) => {
                        log::info!("generated {qualified}");
                        Outcome::Generated { qualified }
                    }
                    Err(e) => {
                        log::error!("failed to write {qualified}: {e}");
                        Outcome::Aborted {
                            qualified,
                            error: Error::Io(e),
                        }
                    }
                },
                Err(e) => {
                    log::error!("skipping {qualified}: {e}");
                    Outcome::Aborted {
                        qualified,
                        error: e,
                    }
                }
            };
            report.outcomes.push(outcome);
        }

        report
    }
}
