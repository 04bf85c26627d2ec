//! State type generation.

use crate::rust::idents::EntityTokens;
use proc_macro2::TokenStream;
use quote::quote;
use typestep_core::{ConstructionState, Lattice};

/// Generator for the per-state builder types and the entry point.
pub struct StateGenerator<'a> {
    lattice: &'a Lattice<'a>,
    tokens: &'a EntityTokens,
}

impl<'a> StateGenerator<'a> {
    /// Creates a new state generator.
    #[must_use]
    pub fn new(lattice: &'a Lattice<'a>, tokens: &'a EntityTokens) -> Self {
        Self { lattice, tokens }
    }

    /// Generates the `builder()` constructor and one struct per state, in
    /// canonical order.
    #[must_use]
    pub fn generate(&self) -> TokenStream {
        let entry = self.generate_entry();
        let states = self
            .lattice
            .states()
            .iter()
            .map(|(state, _)| self.generate_state(*state));

        quote! {
            #entry
            #(#states)*
        }
    }

    /// Generates `Entity::builder()`, which starts in the empty state.
    fn generate_entry(&self) -> TokenStream {
        let EntityTokens { ident, vis, .. } = self.tokens;
        let initial = self.tokens.state(self.lattice.initial());
        let doc = format!(" Starts building a [`{}`] with no fields supplied.", ident);

        quote! {
            #[allow(dead_code)]
            impl #ident {
                #[doc = #doc]
                #[inline]
                #vis fn builder() -> #initial {
                    #initial {}
                }
            }
        }
    }

    /// Generates the struct holding exactly the fields supplied in `state`.
    fn generate_state(&self, state: ConstructionState) -> TokenStream {
        let vis = &self.tokens.vis;
        let name = self.tokens.state(state);
        let members = self.tokens.members(state);
        let doc = self.state_doc(state);

        quote! {
            #[doc = #doc]
            #[allow(non_camel_case_types, non_snake_case, dead_code)]
            #[must_use]
            #vis struct #name {
                #(#members,)*
            }
        }
    }

    fn state_doc(&self, state: ConstructionState) -> String {
        let entity = &self.tokens.ident;
        if state.is_empty() {
            return format!(" Builder for [`{}`] with no fields supplied.", entity);
        }

        let supplied = state
            .indices()
            .map(|i| format!("`{}`", self.lattice.entity().fields()[i].name))
            .collect::<Vec<_>>()
            .join(", ");
        format!(" Builder for [`{}`] holding {}.", entity, supplied)
    }
}
