//! Error types for code generation.

use crate::report::EntityFailure;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Entity extraction error.
    #[error("extraction error: {0}")]
    Extract(#[from] typestep_schema::ExtractError),

    /// Entity validation error.
    #[error("schema error: {0}")]
    Schema(#[from] typestep_schema::SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generated source could not be written.
    #[error("failed to write '{}': {source}", path.display())]
    WriteFile {
        /// Output path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// A field's type text is not a Rust type.
    #[error("invalid type for field '{field}' of '{entity}': {source}")]
    InvalidType {
        /// Entity name.
        entity: String,
        /// Field name.
        field: String,
        /// Parse error.
        source: syn::Error,
    },

    /// A name cannot be used as a Rust identifier.
    #[error("'{name}' is not a valid Rust identifier")]
    InvalidIdent {
        /// Offending name.
        name: String,
    },

    /// The visibility text is not a Rust visibility.
    #[error("invalid visibility '{visibility}' on '{entity}'")]
    InvalidVisibility {
        /// Entity name.
        entity: String,
        /// Offending visibility text.
        visibility: String,
    },

    /// rustfmt rejected the generated source.
    #[error("rustfmt failed: {message}")]
    Format {
        /// rustfmt diagnostics.
        message: String,
    },

    /// Code generation error.
    #[error("generation error: {message}")]
    Generation {
        /// Error message.
        message: String,
    },

    /// One or more entities failed.
    #[error("failed to generate builders: {}", join_failures(.0))]
    Entities(Vec<EntityFailure>),
}

impl CodegenError {
    /// Creates a generation error with the given message.
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }
}

fn join_failures(failures: &[EntityFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entities_error_lists_every_failure() {
        let err = CodegenError::Entities(vec![
            EntityFailure::new(Some("X".to_string()), CodegenError::generation("boom")),
            EntityFailure::new(None, CodegenError::InvalidIdent {
                name: "1x".to_string(),
            }),
        ]);
        assert_eq!(
            err.to_string(),
            "failed to generate builders: X: generation error: boom; \
             '1x' is not a valid Rust identifier"
        );
    }
}
