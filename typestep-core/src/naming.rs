//! Canonical state names.
//!
//! Downstream code joins states by name (a transition's target type must be
//! the type declared for that state), so every part of the lattice computes
//! names through [`canonical_name`].

use crate::state::ConstructionState;
use std::fmt;
use typestep_schema::{EntitySpec, FieldSpec};

/// Deterministic label of a construction state.
///
/// The concatenated display names of the state's fields in declaration order.
/// The empty state is named `""`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct CanonicalName(String);

impl CanonicalName {
    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true for the empty state's name.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for CanonicalName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for CanonicalName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CanonicalName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Display form of a field: its name with the first character uppercased.
#[must_use]
pub fn display_name(field: &FieldSpec) -> String {
    field.display_name()
}

/// Display names of a state's members, in declaration order.
#[must_use]
pub fn member_names(entity: &EntitySpec, state: ConstructionState) -> Vec<String> {
    state
        .indices()
        .filter_map(|i| entity.field(i))
        .map(display_name)
        .collect()
}

/// Canonical name of `state` within `entity`.
#[must_use]
pub fn canonical_name(entity: &EntitySpec, state: ConstructionState) -> CanonicalName {
    CanonicalName(member_names(entity, state).concat())
}
