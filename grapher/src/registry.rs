use std::collections::HashMap;
use std::path::Path;

use graph::{Output, TranslateConfig};
use tracing::debug;

use crate::error::{GraphError, GrapherError};
use crate::unit::{RepoConfig, SourceUnit};

/// Analyzes one source unit and reports its defs, refs and docs.
pub trait Grapher: Send + Sync {
    /// `dir` is the root of the repository checkout; spans in the output are relative to it.
    fn graph(
        &self,
        dir: &Path,
        unit: &SourceUnit,
        config: &RepoConfig,
    ) -> Result<Output, GrapherError>;
}

impl<F> Grapher for F
where
    F: Fn(&Path, &SourceUnit, &RepoConfig) -> Result<Output, GrapherError> + Send + Sync,
{
    fn graph(
        &self,
        dir: &Path,
        unit: &SourceUnit,
        config: &RepoConfig,
    ) -> Result<Output, GrapherError> {
        self(dir, unit, config)
    }
}

/// The unit a grapher counts span offsets in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OffsetUnits {
    /// UTF-8 byte offsets, used as-is.
    #[default]
    Bytes,
    /// Unicode codepoint ordinals, translated to byte offsets after graphing.
    Codepoints,
}

struct Registration {
    grapher: Box<dyn Grapher>,
    offsets: OffsetUnits,
}

/// Graphers keyed by source-unit type.
#[derive(Default)]
pub struct Registry {
    graphers: HashMap<String, Registration>,
    translate_config: TranslateConfig,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_translate_config(translate_config: TranslateConfig) -> Self {
        Self {
            graphers: HashMap::new(),
            translate_config,
        }
    }

    /// Registers `grapher` for units of `unit_type`, replacing any previous registration.
    pub fn register(
        &mut self,
        unit_type: impl Into<String>,
        offsets: OffsetUnits,
        grapher: impl Grapher + 'static,
    ) -> &mut Self {
        let unit_type = unit_type.into();
        let registration = Registration {
            grapher: Box::new(grapher),
            offsets,
        };
        if self
            .graphers
            .insert(unit_type.clone(), registration)
            .is_some()
        {
            debug!(%unit_type, "replaced registered grapher");
        }
        self
    }

    pub fn is_registered(&self, unit_type: &str) -> bool {
        self.graphers.contains_key(unit_type)
    }

    /// Offset units of the grapher registered for `unit_type`, if any.
    pub fn offset_units(&self, unit_type: &str) -> Option<OffsetUnits> {
        self.graphers.get(unit_type).map(|r| r.offsets)
    }

    /// Registered unit types, sorted.
    pub fn unit_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self.graphers.keys().map(String::as_str).collect();
        types.sort_unstable();
        types
    }

    /// Graphs `unit` (whose repository is checked out at `dir`) with its registered grapher.
    ///
    /// The returned output has byte offsets and is in canonical order.
    pub fn graph(
        &self,
        dir: &Path,
        unit: &SourceUnit,
        config: &RepoConfig,
    ) -> Result<Output, GraphError> {
        let Some(registration) = self.graphers.get(&unit.unit_type) else {
            return Err(GraphError::NoGrapher {
                unit_type: unit.unit_type.clone(),
            });
        };

        let mut output = registration
            .grapher
            .graph(dir, unit, config)
            .map_err(|source| GraphError::Grapher {
                unit: unit.id(),
                source,
            })?;

        if registration.offsets == OffsetUnits::Codepoints {
            let report = graph::translate_with_report(dir, &mut output, &self.translate_config);
            debug!(
                unit = %unit.id(),
                translated = report.translated,
                skipped = report.skipped,
                failures = report.failures.len(),
                "converted codepoint offsets to byte offsets"
            );
        }

        graph::sort(&mut output);
        Ok(output)
    }
}
