//! Extractor configuration.

use crate::error::ExtractError;
use serde::{Deserialize, Serialize};

/// Default attribute name marking builder fields.
pub const DEFAULT_TAG: &str = "builder";

/// Default cap on builder fields per entity.
pub const DEFAULT_MAX_FIELDS: usize = 12;

/// Settings controlling how entities are extracted from Rust source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractConfig {
    /// Attribute name that marks builder fields, e.g. `builder` for `#[builder(opt)]`.
    pub tag: String,
    /// Maximum number of non-excluded fields an entity may have.
    pub max_fields: usize,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            tag: DEFAULT_TAG.to_string(),
            max_fields: DEFAULT_MAX_FIELDS,
        }
    }
}

impl ExtractConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the marker tag. An empty tag selects [`DEFAULT_TAG`].
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        self.tag = if tag.is_empty() {
            DEFAULT_TAG.to_string()
        } else {
            tag
        };
        self
    }

    /// Sets the per-entity field cap.
    #[must_use]
    pub fn with_max_fields(mut self, max_fields: usize) -> Self {
        self.max_fields = max_fields;
        self
    }

    /// Returns the marker tag, falling back to [`DEFAULT_TAG`] when unset.
    #[must_use]
    pub fn tag(&self) -> &str {
        if self.tag.is_empty() {
            DEFAULT_TAG
        } else {
            &self.tag
        }
    }

    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    /// Returns `ExtractError::Config` if the text is not a valid configuration.
    pub fn from_toml_str(text: &str) -> Result<Self, ExtractError> {
        Ok(toml::from_str(text)?)
    }
}
