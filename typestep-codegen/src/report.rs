//! Per-entity generation results.

use crate::error::CodegenError;
use crate::output::{OutputConfig, output_path};
use std::fmt;
use std::path::{Path, PathBuf};

/// Generated builder source for one entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedBuilder {
    /// Entity name.
    pub entity: String,
    /// Generated Rust source.
    pub source: String,
}

/// A failure that concerns one entity (or an unnamed item).
#[derive(Debug)]
pub struct EntityFailure {
    /// Entity name, when known.
    pub entity: Option<String>,
    /// What went wrong.
    pub error: CodegenError,
}

impl EntityFailure {
    /// Creates a failure record.
    #[must_use]
    pub fn new(entity: Option<String>, error: CodegenError) -> Self {
        Self { entity, error }
    }
}

impl fmt::Display for EntityFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.entity {
            Some(entity) => write!(f, "{}: {}", entity, self.error),
            None => write!(f, "{}", self.error),
        }
    }
}

/// Outcome of generating builders for every entity of one source.
///
/// Failures never stop sibling entities, so a report can hold both
/// successes and failures.
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Successfully generated builders, in declaration order.
    pub builders: Vec<GeneratedBuilder>,
    /// Entities that could not be described, rendered or written.
    pub failures: Vec<EntityFailure>,
}

impl GenerationReport {
    /// Returns true if no entity failed.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }

    /// Records a failure.
    pub fn fail(&mut self, entity: Option<&str>, error: impl Into<CodegenError>) {
        let error = error.into();
        match entity {
            Some(name) => tracing::error!("failed to generate builder for {}: {}", name, error),
            None => tracing::error!("failed to generate builder: {}", error),
        }
        self.failures
            .push(EntityFailure::new(entity.map(str::to_string), error));
    }

    /// Writes every generated builder next to `source` (or into the
    /// configured output directory).
    ///
    /// Write failures are moved into [`GenerationReport::failures`]; the
    /// paths of the files that were written are returned.
    pub fn write_all(&mut self, source: &Path, config: &OutputConfig) -> Vec<PathBuf> {
        let mut written = Vec::with_capacity(self.builders.len());
        let mut errors = Vec::new();

        for builder in &self.builders {
            let path = output_path(source, &builder.entity, config.out_dir.as_deref());
            match std::fs::write(&path, &builder.source) {
                Ok(()) => {
                    tracing::info!("wrote builder for {} to {}", builder.entity, path.display());
                    written.push(path);
                }
                Err(source) => errors.push((
                    builder.entity.clone(),
                    CodegenError::WriteFile { path, source },
                )),
            }
        }

        for (entity, error) in errors {
            self.fail(Some(&entity), error);
        }

        written
    }

    /// Converts the report into the successful builders, or an aggregated
    /// error listing every failure.
    ///
    /// # Errors
    /// Returns `CodegenError::Entities` if any entity failed.
    pub fn into_result(self) -> Result<Vec<GeneratedBuilder>, CodegenError> {
        if self.failures.is_empty() {
            Ok(self.builders)
        } else {
            Err(CodegenError::Entities(self.failures))
        }
    }
}
