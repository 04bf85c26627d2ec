//! Error types for entity extraction and validation.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for entity extraction operations.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Rust source parsing error.
    #[error("Rust parse error: {0}")]
    Parse(#[from] syn::Error),

    /// Source file could not be read.
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        /// Path of the source file.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Configuration file could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// The item cannot be turned into a builder.
    #[error("unsupported entity '{entity}': {reason}")]
    UnsupportedShape {
        /// Entity name.
        entity: String,
        /// Why the item is unsupported.
        reason: String,
    },

    /// A marker attribute of the entity is malformed.
    #[error("invalid marker on '{entity}': {source}")]
    InvalidMarker {
        /// Entity name.
        entity: String,
        /// Attribute parse error, spanned at the marker.
        source: syn::Error,
    },

    /// A field carries markers that contradict each other.
    #[error("field '{field}' of '{entity}' is marked both optional and ignored")]
    ConflictingMarkers {
        /// Entity name.
        entity: String,
        /// Field name.
        field: String,
    },

    /// The entity has more fields than the configured cap allows.
    #[error(
        "entity '{entity}' has {count} builder fields, more than the configured limit of {limit}"
    )]
    FieldCapExceeded {
        /// Entity name.
        entity: String,
        /// Number of non-excluded fields.
        count: usize,
        /// Configured cap.
        limit: usize,
    },

    /// The described entity is invalid.
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),
}

/// Error type for entity validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Entity name is empty.
    #[error("entity name must not be empty")]
    EmptyEntityName,

    /// A field name is empty.
    #[error("entity '{entity}' has a field with an empty name")]
    EmptyFieldName {
        /// Entity name.
        entity: String,
    },

    /// Two fields share a name.
    #[error("duplicate field '{field}' in entity '{entity}'")]
    DuplicateField {
        /// Entity name.
        entity: String,
        /// Duplicated field name.
        field: String,
    },

    /// The entity exceeds the hard field limit.
    #[error("entity '{entity}' has {count} fields, the hard limit is {limit}")]
    TooManyFields {
        /// Entity name.
        entity: String,
        /// Number of fields.
        count: usize,
        /// Hard limit.
        limit: usize,
    },

    /// Two different field subsets would receive the same canonical name.
    #[error(
        "entity '{entity}': field names '{first}' and '{second}' produce colliding builder state names"
    )]
    AmbiguousStateName {
        /// Entity name.
        entity: String,
        /// First field of one colliding subset.
        first: String,
        /// First field of the other colliding subset.
        second: String,
    },
}

impl ExtractError {
    /// Creates an unsupported shape error.
    pub fn unsupported(entity: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::UnsupportedShape {
            entity: entity.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid marker error.
    pub fn invalid_marker(entity: impl Into<String>, source: syn::Error) -> Self {
        Self::InvalidMarker {
            entity: entity.into(),
            source,
        }
    }

    /// Returns the entity this error is about, if it concerns a single entity.
    #[must_use]
    pub fn entity(&self) -> Option<&str> {
        match self {
            Self::UnsupportedShape { entity, .. }
            | Self::InvalidMarker { entity, .. }
            | Self::ConflictingMarkers { entity, .. }
            | Self::FieldCapExceeded { entity, .. } => Some(entity),
            Self::Schema(err) => err.entity(),
            _ => None,
        }
    }
}

impl SchemaError {
    /// Returns the entity this error is about, if it has a name.
    #[must_use]
    pub fn entity(&self) -> Option<&str> {
        match self {
            Self::EmptyEntityName => None,
            Self::EmptyFieldName { entity }
            | Self::DuplicateField { entity, .. }
            | Self::TooManyFields { entity, .. }
            | Self::AmbiguousStateName { entity, .. } => Some(entity),
        }
    }
}
