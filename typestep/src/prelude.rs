//! Prelude module for convenient imports.
//!
//! ```
//! use typestep::prelude::*;
//! ```

pub use typestep_derive::Builder;

// Lattice types
pub use typestep_core::{CanonicalName, ConstructionState, Lattice, Transition};

// Entity types
pub use typestep_schema::{EntitySpec, ExtractConfig, FieldSpec};

// Generation
pub use typestep_codegen::{CodegenError, GenerationReport, Generator, OutputConfig};
