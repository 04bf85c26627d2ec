//! # typestep Derive
//!
//! Procedural macro generating typestate builders.
//!
//! `#[derive(Builder)]` emits one builder type per subset of the struct's
//! fields, `with_<field>` methods moving between them, and `build` on the
//! states that hold every required field.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};
use typestep_schema::{ExtractConfig, ExtractError};

/// Derives a typestate builder for a struct with named fields.
///
/// Every field takes part unless marked. `#[builder(opt)]` makes a field
/// optional and `#[builder(ignore)]` leaves it out; both default on `build`.
///
/// # Example
/// ```ignore
/// #[derive(Builder)]
/// pub struct Order {
///     id: u64,
///     symbol: String,
///     #[builder(opt)]
///     note: Option<String>,
/// }
///
/// let order = Order::builder().with_symbol("AAPL".into()).with_id(7).build();
/// ```
#[proc_macro_derive(Builder, attributes(builder))]
pub fn derive_builder(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let entity = typestep_schema::describe_derive_input(input, &ExtractConfig::default())
        .map_err(|e| match e {
            ExtractError::Parse(err) | ExtractError::InvalidMarker { source: err, .. } => err,
            other => syn::Error::new_spanned(&input.ident, other),
        })?;

    typestep_codegen::generate_tokens(&entity)
        .map_err(|e| syn::Error::new_spanned(&input.ident, e))
}
