//! Rust code generation modules.

pub mod finalize;
pub mod idents;
pub mod states;
pub mod transitions;

pub use finalize::FinalizeGenerator;
pub use idents::EntityTokens;
pub use states::StateGenerator;
pub use transitions::TransitionGenerator;
