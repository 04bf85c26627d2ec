//! Entity and field definitions consumed by the lattice generator.

use crate::error::SchemaError;
use crate::names::first_to_upper;
use crate::validation::validate_entity;

/// Hard upper bound on the number of builder fields of one entity.
///
/// An entity with `n` fields produces `2^n` builder states and `n * 2^(n-1)`
/// transitions, all held in memory while generating. The configurable cap
/// in [`crate::ExtractConfig`] is usually much lower.
pub const MAX_FIELDS: usize = 16;

/// One field of an entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldSpec {
    /// Field name, unique within its entity.
    pub name: String,
    /// Type expression as source text. Never interpreted by the generator.
    pub ty: String,
    /// Whether the field must be supplied before the entity can be built.
    pub required: bool,
}

impl FieldSpec {
    /// Creates a required field.
    pub fn required(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            required: true,
        }
    }

    /// Creates an optional field.
    pub fn optional(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            required: false,
        }
    }

    /// Returns the field name with its first character uppercased.
    ///
    /// This is the fragment the field contributes to canonical state names.
    #[must_use]
    pub fn display_name(&self) -> String {
        first_to_upper(&self.name)
    }
}

/// A named, ordered list of builder fields.
///
/// Instances are validated on construction: names are non-empty and unique,
/// the field count is within [`MAX_FIELDS`], and no two field subsets map to
/// the same canonical state name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySpec {
    name: String,
    fields: Vec<FieldSpec>,
    visibility: String,
    excluded: Vec<String>,
}

impl EntitySpec {
    /// Creates a validated entity.
    ///
    /// # Errors
    /// Returns `SchemaError` if the entity violates one of its invariants.
    pub fn new(name: impl Into<String>, fields: Vec<FieldSpec>) -> Result<Self, SchemaError> {
        let entity = Self {
            name: name.into(),
            fields,
            visibility: String::new(),
            excluded: Vec::new(),
        };
        validate_entity(&entity)?;
        Ok(entity)
    }

    /// Sets the visibility text used for generated items (`pub`, `pub(crate)`, ...).
    #[must_use]
    pub fn with_visibility(mut self, visibility: impl Into<String>) -> Self {
        self.visibility = visibility.into();
        self
    }

    /// Records the names of fields excluded from the builder.
    #[must_use]
    pub fn with_excluded(mut self, excluded: Vec<String>) -> Self {
        self.excluded = excluded;
        self
    }

    /// Entity name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Builder fields in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Field at `index` in declaration order.
    #[must_use]
    pub fn field(&self, index: usize) -> Option<&FieldSpec> {
        self.fields.get(index)
    }

    /// Number of builder fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the entity has no builder fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Declared visibility as source text; empty for private items.
    #[must_use]
    pub fn visibility(&self) -> &str {
        &self.visibility
    }

    /// Names of excluded fields in declaration order.
    #[must_use]
    pub fn excluded(&self) -> &[String] {
        &self.excluded
    }

    /// Iterates over the indices of required fields.
    pub fn required_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.fields
            .iter()
            .enumerate()
            .filter(|(_, f)| f.required)
            .map(|(i, _)| i)
    }

    /// Iterates over the indices of optional fields.
    pub fn optional_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.fields
            .iter()
            .enumerate()
            .filter(|(_, f)| !f.required)
            .map(|(i, _)| i)
    }
}
