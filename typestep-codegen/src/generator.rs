//! Builder generation for one entity.

use crate::error::CodegenError;
use crate::rust::{EntityTokens, FinalizeGenerator, StateGenerator, TransitionGenerator};
use proc_macro2::TokenStream;
use quote::quote;
use typestep_core::Lattice;

/// First line of every generated file.
pub const HEADER: &str = "// Code generated by typestep. DO NOT EDIT.";

/// Main code generator.
pub struct Generator<'a> {
    lattice: &'a Lattice<'a>,
}

impl<'a> Generator<'a> {
    /// Creates a new generator for the given lattice.
    #[must_use]
    pub fn new(lattice: &'a Lattice<'a>) -> Self {
        Self { lattice }
    }

    /// Generates the builder items: state types, the `builder()` entry
    /// point, transition methods and `build` methods.
    ///
    /// # Errors
    /// Returns `CodegenError` if a name or type of the entity cannot be
    /// expressed as Rust syntax.
    pub fn tokens(&self) -> Result<TokenStream, CodegenError> {
        let tokens = EntityTokens::new(self.lattice)?;

        let states = StateGenerator::new(self.lattice, &tokens).generate();
        let transitions = TransitionGenerator::new(self.lattice, &tokens).generate();
        let finalize = FinalizeGenerator::new(self.lattice, &tokens).generate();

        tracing::debug!(
            entity = self.lattice.entity().name(),
            states = self.lattice.state_count(),
            transitions = self.lattice.transitions().len(),
            eligible = self.lattice.finalize_eligible().len(),
            "generated builder tokens"
        );

        Ok(quote! {
            #states
            #transitions
            #finalize
        })
    }

    /// Generates the builder as the text of a standalone source file.
    ///
    /// The text is not formatted; see [`crate::format::format_source`].
    ///
    /// # Errors
    /// Returns `CodegenError` if token generation fails.
    pub fn generate(&self) -> Result<String, CodegenError> {
        let tokens = self.tokens()?;

        let mut output = String::new();
        output.push_str(HEADER);
        output.push_str("\n\n");
        output.push_str(&tokens.to_string());
        output.push('\n');

        Ok(output)
    }
}
