//! Subset enumeration over ordered field lists.
//!
//! Subsets are produced in canonical order: by size, then lexicographically by
//! declaration index. The pool passed in must be sorted ascending, which every
//! pool derived from an entity is.

use crate::naming::member_names;
use crate::state::ConstructionState;
use typestep_schema::EntitySpec;

/// Which fields of an entity take part in an enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubsetMode {
    /// Every builder field.
    AllFields,
    /// Only fields that are not required.
    OptionalOnly,
}

impl SubsetMode {
    /// Declaration indices of the fields selected by this mode.
    #[must_use]
    pub fn pool(self, entity: &EntitySpec) -> Vec<usize> {
        match self {
            Self::AllFields => (0..entity.len()).collect(),
            Self::OptionalOnly => entity.optional_indices().collect(),
        }
    }
}

/// Every non-empty subset of `pool`, in canonical order.
///
/// A pool of `m` indices yields `2^m - 1` subsets; an empty pool yields none.
#[must_use]
pub fn non_empty_subsets(pool: &[usize]) -> Vec<ConstructionState> {
    let mut subsets = Vec::with_capacity((1usize << pool.len()) - 1);
    for size in 1..=pool.len() {
        push_combinations(pool, size, &mut subsets);
    }
    subsets
}

/// Every subset of `pool` including the empty one, in canonical order.
#[must_use]
pub fn powerset(pool: &[usize]) -> Vec<ConstructionState> {
    let mut subsets = Vec::with_capacity(1usize << pool.len());
    subsets.push(ConstructionState::EMPTY);
    subsets.extend(non_empty_subsets(pool));
    subsets
}

/// Non-empty subsets of an entity's fields rendered as display names.
///
/// Each inner list keeps declaration order, e.g. `["A", "C"]`, never `["C", "A"]`.
#[must_use]
pub fn combinations(entity: &EntitySpec, mode: SubsetMode) -> Vec<Vec<String>> {
    non_empty_subsets(&mode.pool(entity))
        .into_iter()
        .map(|state| member_names(entity, state))
        .collect()
}

/// Appends every `size`-element subset of `pool` in lexicographic order.
fn push_combinations(pool: &[usize], size: usize, out: &mut Vec<ConstructionState>) {
    let n = pool.len();
    let mut positions: Vec<usize> = (0..size).collect();

    loop {
        out.push(ConstructionState::from_indices(
            positions.iter().map(|&p| pool[p]),
        ));

        // Rightmost position that can still move right.
        let Some(i) = (0..size).rev().find(|&i| positions[i] < n - size + i) else {
            break;
        };
        positions[i] += 1;
        for j in i + 1..size {
            positions[j] = positions[j - 1] + 1;
        }
    }
}
