//! # typestep
//!
//! Typestate builders where every combination of supplied fields is its own
//! type.
//!
//! For a struct with `n` builder fields typestep generates `2^n` builder
//! states. Each `with_<field>` method moves to the state holding one more
//! field, and `build` exists only on states that hold every required field,
//! so forgetting a required field is a compile error rather than a runtime
//! one.
//!
//! ## Features
//!
//! - **Order independence** - fields can be supplied in any order
//! - **Optional and excluded fields** - `#[builder(opt)]` and
//!   `#[builder(ignore)]` fields take their `Default` value when not supplied
//! - **Derive or generate** - use `#[derive(Builder)]`, or the `typestep`
//!   command to write builder files for tagged structs
//!
//! ## Quick Start
//!
//! ```
//! use typestep::Builder;
//!
//! #[derive(Debug, Builder)]
//! pub struct Order {
//!     id: u64,
//!     symbol: String,
//!     #[builder(opt)]
//!     note: Option<String>,
//! }
//!
//! let order = Order::builder()
//!     .with_symbol("AAPL".to_string())
//!     .with_id(7)
//!     .build();
//! assert_eq!(order.id, 7);
//! assert_eq!(order.note, None);
//! ```
//!
//! Finalizing before every required field is supplied does not compile:
//!
//! ```compile_fail
//! use typestep::Builder;
//!
//! #[derive(Builder)]
//! pub struct Order {
//!     id: u64,
//!     symbol: String,
//! }
//!
//! let order = Order::builder().with_id(7).build();
//! ```
//!
//! Neither does supplying the same field twice:
//!
//! ```compile_fail
//! use typestep::Builder;
//!
//! #[derive(Builder)]
//! pub struct Order {
//!     id: u64,
//! }
//!
//! let order = Order::builder().with_id(7).with_id(8).build();
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`] - Construction states, canonical names and the state lattice
//! - [`schema`] - Entity model, extraction from Rust source and validation
//! - [`codegen`] - Rust code generation of builders

pub mod prelude;

pub use typestep_derive::Builder;

/// Construction states and the state lattice.
pub mod core {
    pub use typestep_core::*;
}

/// Entity model and extraction.
pub mod schema {
    pub use typestep_schema::*;
}

/// Builder code generation.
pub mod codegen {
    pub use typestep_codegen::*;
}
