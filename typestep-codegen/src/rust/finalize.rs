//! Finalize method generation.

use crate::rust::idents::EntityTokens;
use proc_macro2::TokenStream;
use quote::quote;
use typestep_core::{ConstructionState, Lattice};

/// Generator for the `build` methods of finalize-eligible states.
pub struct FinalizeGenerator<'a> {
    lattice: &'a Lattice<'a>,
    tokens: &'a EntityTokens,
}

impl<'a> FinalizeGenerator<'a> {
    /// Creates a new finalize generator.
    #[must_use]
    pub fn new(lattice: &'a Lattice<'a>, tokens: &'a EntityTokens) -> Self {
        Self { lattice, tokens }
    }

    /// Generates `build` for every eligible state, in eligibility order.
    ///
    /// Ineligible states get no `build`, so finalizing them does not compile.
    #[must_use]
    pub fn generate(&self) -> TokenStream {
        let blocks = self
            .lattice
            .finalize_eligible()
            .iter()
            .map(|state| self.generate_build(*state));

        quote! { #(#blocks)* }
    }

    /// Generates the method turning `state` into the entity.
    ///
    /// Optional fields missing from `state` and excluded fields take their
    /// `Default` value.
    fn generate_build(&self, state: ConstructionState) -> TokenStream {
        let EntityTokens { ident, vis, .. } = self.tokens;
        let name = self.tokens.state(state);

        let supplied = (0..self.tokens.fields.len()).map(|i| {
            let field = self.tokens.field_ident(i);
            if state.contains(i) {
                quote! { #field: self.#field }
            } else {
                quote! { #field: ::core::default::Default::default() }
            }
        });
        let excluded = self
            .tokens
            .excluded
            .iter()
            .map(|field| quote! { #field: ::core::default::Default::default() });
        let doc = format!(" Finishes building the [`{}`].", ident);

        quote! {
            #[allow(dead_code)]
            impl #name {
                #[doc = #doc]
                #[inline]
                #vis fn build(self) -> #ident {
                    #ident { #(#supplied,)* #(#excluded,)* }
                }
            }
        }
    }
}
