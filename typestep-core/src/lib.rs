//! # typestep Core
//!
//! Construction-state lattice for typestate builders.
//!
//! Given an entity's ordered field list, this crate computes:
//! - Every construction state (every subset of supplied fields)
//! - The transitions that supply one more field
//! - The states from which the entity may be built
//! - Deterministic canonical names joining the three together
//!
//! Everything here is a pure function of a validated
//! [`EntitySpec`](typestep_schema::EntitySpec): there is no I/O and no error
//! path.

pub mod eligibility;
pub mod lattice;
pub mod naming;
pub mod state;
pub mod subsets;
pub mod transitions;

pub use eligibility::{finalize_eligible, finalize_eligible_names};
pub use lattice::Lattice;
pub use naming::{CanonicalName, canonical_name, display_name, member_names};
pub use state::ConstructionState;
pub use subsets::{SubsetMode, combinations, non_empty_subsets, powerset};
pub use transitions::{Transition, transitions};
