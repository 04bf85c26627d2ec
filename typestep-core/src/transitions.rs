//! Transitions that supply one more field.

use crate::naming::{CanonicalName, canonical_name};
use crate::state::ConstructionState;
use crate::subsets::powerset;
use typestep_schema::{EntitySpec, FieldSpec};

/// Supplying `field` while in `from` yields `to`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Transition {
    /// State before the field is supplied.
    pub from: ConstructionState,
    /// Canonical name of `from`.
    pub from_name: CanonicalName,
    /// Declaration index of the supplied field.
    pub field: usize,
    /// State after the field is supplied; always `from` plus `field`.
    pub to: ConstructionState,
    /// Canonical name of `to`.
    pub to_name: CanonicalName,
}

impl Transition {
    /// The supplied field's definition.
    ///
    /// # Panics
    /// Panics if `entity` is not the entity this transition was generated for.
    #[must_use]
    pub fn field_spec<'a>(&self, entity: &'a EntitySpec) -> &'a FieldSpec {
        &entity.fields()[self.field]
    }
}

/// Every transition of an entity's lattice.
///
/// For each field in declaration order, every subset of the other fields
/// (the empty one included) is a from-state. Within one field the from-states
/// follow canonical order. An entity with `n` fields has `n * 2^(n-1)`
/// transitions.
#[must_use]
pub fn transitions(entity: &EntitySpec) -> Vec<Transition> {
    let n = entity.len();
    let mut out = Vec::with_capacity(if n == 0 { 0 } else { n << (n - 1) });

    for field in 0..n {
        let others: Vec<usize> = (0..n).filter(|&i| i != field).collect();

        for from in powerset(&others) {
            let to = from.with(field);
            out.push(Transition {
                from,
                from_name: canonical_name(entity, from),
                field,
                to,
                to_name: canonical_name(entity, to),
            });
        }
    }

    out
}
