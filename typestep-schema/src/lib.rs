//! # typestep Schema
//!
//! Entity model and Rust source extraction for typestep builders.
//!
//! This crate provides:
//! - The [`EntitySpec`] / [`FieldSpec`] data model consumed by the lattice generator
//! - Extraction of tagged structs from Rust source files and derive input
//! - Entity validation, including canonical state name injectivity
//! - Extractor configuration (marker tag, field cap)
//! - Identifier case helpers shared by the generator and emitter

pub mod config;
pub mod error;
pub mod extract;
pub mod markers;
pub mod names;
pub mod types;
pub mod validation;

pub use config::ExtractConfig;
pub use error::{ExtractError, SchemaError};
pub use extract::{Extraction, describe_derive_input, describe_file, describe_tagged_structs};
pub use markers::FieldMarker;
pub use types::{EntitySpec, FieldSpec, MAX_FIELDS};
pub use validation::validate_entity;
