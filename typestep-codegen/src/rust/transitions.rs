//! Transition method generation.

use crate::rust::idents::EntityTokens;
use proc_macro2::TokenStream;
use quote::quote;
use typestep_core::{ConstructionState, Lattice, Transition};

/// Generator for the `with_<field>` methods connecting the states.
pub struct TransitionGenerator<'a> {
    lattice: &'a Lattice<'a>,
    tokens: &'a EntityTokens,
}

impl<'a> TransitionGenerator<'a> {
    /// Creates a new transition generator.
    #[must_use]
    pub fn new(lattice: &'a Lattice<'a>, tokens: &'a EntityTokens) -> Self {
        Self { lattice, tokens }
    }

    /// Generates one `impl` block per state holding its outgoing transitions.
    ///
    /// The full state has no outgoing transitions and gets no block.
    #[must_use]
    pub fn generate(&self) -> TokenStream {
        let blocks = self
            .lattice
            .states()
            .iter()
            .filter_map(|(state, _)| self.generate_impl(*state));

        quote! { #(#blocks)* }
    }

    fn generate_impl(&self, state: ConstructionState) -> Option<TokenStream> {
        let methods: Vec<TokenStream> = self
            .lattice
            .outgoing(state)
            .map(|t| self.generate_method(t))
            .collect();
        if methods.is_empty() {
            return None;
        }

        let name = self.tokens.state(state);
        Some(quote! {
            #[allow(non_snake_case, dead_code)]
            impl #name {
                #(#methods)*
            }
        })
    }

    /// Generates the method moving the held fields and `t.field` into `t.to`.
    fn generate_method(&self, t: &Transition) -> TokenStream {
        let vis = &self.tokens.vis;
        let field = &self.tokens.fields[t.field];
        let (setter, param, ty) = (&field.setter, &field.ident, &field.ty);
        let target = self.tokens.state(t.to);

        let inits = t.to.indices().map(|i| {
            let ident = self.tokens.field_ident(i);
            if i == t.field {
                quote! { #ident }
            } else {
                quote! { #ident: self.#ident }
            }
        });
        let doc = format!(" Supplies `{}`.", self.lattice.entity().fields()[t.field].name);

        quote! {
            #[doc = #doc]
            #[inline]
            #vis fn #setter(self, #param: #ty) -> #target {
                #target { #(#inits),* }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use typestep_schema::{EntitySpec, FieldSpec};

    fn render(entity: &EntitySpec) -> String {
        let lattice = Lattice::generate(entity);
        let tokens = EntityTokens::new(&lattice).expect("valid tokens");
        TransitionGenerator::new(&lattice, &tokens).generate().to_string()
    }

    #[test]
    fn test_generate_transitions() {
        let entity = EntitySpec::new(
            "Point",
            vec![FieldSpec::required("x", "i32"), FieldSpec::required("y", "i64")],
        )
        .expect("valid entity");
        let code = render(&entity);

        assert_eq!(code.matches("fn with_x").count(), 2);
        assert_eq!(code.matches("fn with_y").count(), 2);
        assert!(code.contains("impl PointBuilder {"));
        assert!(code.contains("fn with_x (self , x : i32) -> PointBuilderX { PointBuilderX { x } }"));
        assert!(code.contains(
            "fn with_x (self , x : i32) -> PointBuilderXY { PointBuilderXY { x , y : self . y } }"
        ));
        assert!(code.contains(
            "fn with_y (self , y : i64) -> PointBuilderXY { PointBuilderXY { x : self . x , y } }"
        ));
        assert!(!code.contains("impl PointBuilderXY"));
    }

    #[test]
    fn test_no_transitions_for_empty_entity() {
        let entity = EntitySpec::new("Unit", Vec::new()).expect("valid entity");
        assert!(render(&entity).is_empty());
    }

    #[test]
    fn test_raw_field_ident() {
        let entity = EntitySpec::new("Token", vec![FieldSpec::required("type", "u8")])
            .expect("valid entity");
        let code = render(&entity);
        assert!(code.contains("fn with_type (self , r#type : u8) -> TokenBuilderType"));
        assert!(code.contains("TokenBuilderType { r#type }"));
    }
}
