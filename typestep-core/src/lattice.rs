//! The complete construction-state lattice of one entity.

use crate::eligibility::finalize_eligible;
use crate::naming::{CanonicalName, canonical_name};
use crate::state::ConstructionState;
use crate::subsets::{SubsetMode, powerset};
use crate::transitions::{Transition, transitions};
use std::collections::{HashMap, HashSet};
use typestep_schema::EntitySpec;

/// States, transitions and finalize-eligible states of one entity.
///
/// The lattice is the Boolean hypercube on the entity's fields, oriented from
/// the empty state toward the full state. It borrows the entity it was
/// generated from and owns everything derived from it.
#[derive(Debug, Clone)]
pub struct Lattice<'a> {
    entity: &'a EntitySpec,
    states: Vec<(ConstructionState, CanonicalName)>,
    transitions: Vec<Transition>,
    eligible: Vec<ConstructionState>,
    eligible_set: HashSet<ConstructionState>,
    by_name: HashMap<String, ConstructionState>,
    outgoing: HashMap<ConstructionState, Vec<usize>>,
    incoming: HashMap<ConstructionState, Vec<usize>>,
}

impl<'a> Lattice<'a> {
    /// Generates the lattice of `entity`.
    #[must_use]
    pub fn generate(entity: &'a EntitySpec) -> Self {
        let states: Vec<(ConstructionState, CanonicalName)> =
            powerset(&SubsetMode::AllFields.pool(entity))
                .into_iter()
                .map(|state| (state, canonical_name(entity, state)))
                .collect();

        let by_name = states
            .iter()
            .map(|(state, name)| (name.to_string(), *state))
            .collect();

        let transitions = transitions(entity);
        let mut outgoing: HashMap<ConstructionState, Vec<usize>> = HashMap::new();
        let mut incoming: HashMap<ConstructionState, Vec<usize>> = HashMap::new();
        for (index, t) in transitions.iter().enumerate() {
            outgoing.entry(t.from).or_default().push(index);
            incoming.entry(t.to).or_default().push(index);
        }

        let eligible = finalize_eligible(entity);
        let eligible_set = eligible.iter().copied().collect();

        tracing::trace!(
            entity = entity.name(),
            states = states.len(),
            transitions = transitions.len(),
            eligible = eligible.len(),
            "generated lattice"
        );

        Self {
            entity,
            states,
            transitions,
            eligible,
            eligible_set,
            by_name,
            outgoing,
            incoming,
        }
    }

    /// The entity this lattice was generated from.
    #[must_use]
    pub fn entity(&self) -> &'a EntitySpec {
        self.entity
    }

    /// All `2^n` states with their names, in canonical order.
    #[must_use]
    pub fn states(&self) -> &[(ConstructionState, CanonicalName)] {
        &self.states
    }

    /// Number of states.
    #[must_use]
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Names of all states, in canonical order.
    pub fn state_names(&self) -> impl Iterator<Item = &CanonicalName> {
        self.states.iter().map(|(_, name)| name)
    }

    /// Names of the `2^n - 1` non-empty states, in canonical order.
    pub fn partial_state_names(&self) -> impl Iterator<Item = &CanonicalName> {
        self.states
            .iter()
            .filter(|(state, _)| !state.is_empty())
            .map(|(_, name)| name)
    }

    /// The starting state: nothing supplied.
    #[must_use]
    pub fn initial(&self) -> ConstructionState {
        ConstructionState::EMPTY
    }

    /// The state with every field supplied.
    #[must_use]
    pub fn full(&self) -> ConstructionState {
        ConstructionState::full(self.entity.len())
    }

    /// Canonical name of `state`.
    #[must_use]
    pub fn name_of(&self, state: ConstructionState) -> CanonicalName {
        canonical_name(self.entity, state)
    }

    /// Looks up a state by its canonical name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<ConstructionState> {
        self.by_name.get(name).copied()
    }

    /// All transitions, grouped by field in declaration order.
    #[must_use]
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Transitions leaving `state`, in field declaration order.
    pub fn outgoing(&self, state: ConstructionState) -> impl Iterator<Item = &Transition> {
        self.edges(&self.outgoing, state)
    }

    /// Transitions entering `state`, in field declaration order.
    pub fn incoming(&self, state: ConstructionState) -> impl Iterator<Item = &Transition> {
        self.edges(&self.incoming, state)
    }

    fn edges<'s>(
        &'s self,
        index: &'s HashMap<ConstructionState, Vec<usize>>,
        state: ConstructionState,
    ) -> impl Iterator<Item = &'s Transition> {
        index
            .get(&state)
            .into_iter()
            .flatten()
            .map(|&i| &self.transitions[i])
    }

    /// Follows the transition supplying `field` from `state`, if there is one.
    #[must_use]
    pub fn step(&self, state: ConstructionState, field: usize) -> Option<ConstructionState> {
        self.outgoing(state)
            .find(|t| t.field == field)
            .map(|t| t.to)
    }

    /// Finalize-eligible states, in canonical order.
    #[must_use]
    pub fn finalize_eligible(&self) -> &[ConstructionState] {
        &self.eligible
    }

    /// Names of the finalize-eligible states, in canonical order.
    pub fn finalize_eligible_names(&self) -> impl Iterator<Item = CanonicalName> + '_ {
        self.eligible.iter().map(|state| self.name_of(*state))
    }

    /// Returns true if the entity may be built from `state`.
    #[must_use]
    pub fn is_finalize_eligible(&self, state: ConstructionState) -> bool {
        self.eligible_set.contains(&state)
    }
}
