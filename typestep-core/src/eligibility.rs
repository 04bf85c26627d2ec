//! States from which the entity may be built.

use crate::naming::{CanonicalName, canonical_name};
use crate::state::ConstructionState;
use crate::subsets::{SubsetMode, non_empty_subsets};
use typestep_schema::EntitySpec;

/// Every finalize-eligible state, in canonical order.
///
/// A state is eligible exactly when it contains every required field: the
/// required set alone, and the required set joined with each non-empty subset
/// of the optional fields. With no required fields the empty state is
/// eligible.
#[must_use]
pub fn finalize_eligible(entity: &EntitySpec) -> Vec<ConstructionState> {
    let required = ConstructionState::from_indices(entity.required_indices());
    let optional = non_empty_subsets(&SubsetMode::OptionalOnly.pool(entity));

    let mut eligible = Vec::with_capacity(optional.len() + 1);
    eligible.push(required);
    eligible.extend(optional.into_iter().map(|extra| required.union(extra)));
    eligible
}

/// Canonical names of the finalize-eligible states.
#[must_use]
pub fn finalize_eligible_names(entity: &EntitySpec) -> Vec<CanonicalName> {
    finalize_eligible(entity)
        .into_iter()
        .map(|state| canonical_name(entity, state))
        .collect()
}
