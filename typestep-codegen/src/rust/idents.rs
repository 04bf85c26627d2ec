//! Rust syntax for entity, field, and state names.

use crate::error::CodegenError;
use proc_macro2::{Ident, TokenStream};
use quote::quote;
use syn::{Type, Visibility};
use typestep_core::{ConstructionState, Lattice};
use typestep_schema::EntitySpec;

/// Suffix between the entity name and a state's canonical name.
pub const BUILDER_INFIX: &str = "Builder";

/// Parses `name` as an identifier, falling back to a raw identifier for
/// keywords such as `type`.
///
/// # Errors
/// Returns `CodegenError::InvalidIdent` if `name` is not an identifier even
/// in raw form.
pub fn ident(name: &str) -> Result<Ident, CodegenError> {
    syn::parse_str::<Ident>(name)
        .or_else(|_| syn::parse_str::<Ident>(&format!("r#{}", name)))
        .map_err(|_| CodegenError::InvalidIdent {
            name: name.to_string(),
        })
}

/// Parsed syntax of one builder field.
#[derive(Debug, Clone)]
pub struct FieldTokens {
    /// Field identifier, raw when the name is a keyword.
    pub ident: Ident,
    /// Declared type.
    pub ty: Type,
    /// Name of the transition method supplying this field.
    pub setter: Ident,
}

/// Parsed syntax of an entity, shared by every generator.
#[derive(Debug, Clone)]
pub struct EntityTokens {
    /// Entity type identifier.
    pub ident: Ident,
    /// Visibility applied to the builder types and methods.
    pub vis: Visibility,
    /// Builder fields in declaration order.
    pub fields: Vec<FieldTokens>,
    /// Entity fields left out of the builder.
    pub excluded: Vec<Ident>,
    /// State type identifiers, indexed by state bits.
    states: Vec<Ident>,
}

impl EntityTokens {
    /// Parses every name and type of the lattice's entity.
    ///
    /// # Errors
    /// Returns `CodegenError` if a name, type, or visibility cannot be
    /// expressed as Rust syntax.
    pub fn new(lattice: &Lattice<'_>) -> Result<Self, CodegenError> {
        let entity = lattice.entity();
        let fields = entity
            .fields()
            .iter()
            .map(|field| {
                let ty = syn::parse_str::<Type>(&field.ty).map_err(|source| {
                    CodegenError::InvalidType {
                        entity: entity.name().to_string(),
                        field: field.name.clone(),
                        source,
                    }
                })?;
                Ok(FieldTokens {
                    ident: ident(&field.name)?,
                    ty,
                    setter: ident(&format!("with_{}", field.name))?,
                })
            })
            .collect::<Result<Vec<_>, CodegenError>>()?;

        let excluded = entity
            .excluded()
            .iter()
            .map(|name| ident(name))
            .collect::<Result<Vec<_>, _>>()?;

        let mut states = vec![None; lattice.state_count()];
        for (state, name) in lattice.states() {
            let type_name = format!("{}{}{}", entity.name(), BUILDER_INFIX, name);
            states[state.bits() as usize] = Some(ident(&type_name)?);
        }
        let states = states
            .into_iter()
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| CodegenError::generation("lattice does not cover every state"))?;

        Ok(Self {
            ident: ident(entity.name())?,
            vis: visibility(entity)?,
            fields,
            excluded,
            states,
        })
    }

    /// Type identifier of a state.
    #[must_use]
    pub fn state(&self, state: ConstructionState) -> &Ident {
        &self.states[state.bits() as usize]
    }

    /// Field declarations of a state's type.
    #[must_use]
    pub fn members(&self, state: ConstructionState) -> Vec<TokenStream> {
        state
            .indices()
            .map(|i| {
                let FieldTokens { ident, ty, .. } = &self.fields[i];
                quote! { #ident: #ty }
            })
            .collect()
    }

    /// Identifier of the `i`th builder field.
    #[must_use]
    pub fn field_ident(&self, index: usize) -> &Ident {
        &self.fields[index].ident
    }
}

fn visibility(entity: &EntitySpec) -> Result<Visibility, CodegenError> {
    if entity.visibility().is_empty() {
        return Ok(Visibility::Inherited);
    }
    syn::parse_str::<Visibility>(entity.visibility()).map_err(|_| {
        CodegenError::InvalidVisibility {
            entity: entity.name().to_string(),
            visibility: entity.visibility().to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use typestep_schema::FieldSpec;

    fn entity() -> EntitySpec {
        EntitySpec::new(
            "Request",
            vec![
                FieldSpec::required("type", "String"),
                FieldSpec::optional("retries", "Option < u8 >"),
            ],
        )
        .expect("valid entity")
        .with_visibility("pub (crate)")
        .with_excluded(vec!["cache".to_string()])
    }

    #[test]
    fn test_ident_plain_and_raw() {
        assert_eq!(ident("name").expect("plain").to_string(), "name");
        assert_eq!(ident("type").expect("raw").to_string(), "r#type");
        assert!(matches!(
            ident("1abc"),
            Err(CodegenError::InvalidIdent { ref name }) if name == "1abc"
        ));
        assert!(ident("self").is_err());
    }

    #[test]
    fn test_entity_tokens() {
        let entity = entity();
        let lattice = Lattice::generate(&entity);
        let tokens = EntityTokens::new(&lattice).expect("valid tokens");

        assert_eq!(tokens.ident.to_string(), "Request");
        assert!(matches!(tokens.vis, Visibility::Restricted(_)));
        assert_eq!(tokens.fields[0].ident.to_string(), "r#type");
        assert_eq!(tokens.fields[0].setter.to_string(), "with_type");
        assert_eq!(tokens.fields[1].setter.to_string(), "with_retries");
        assert_eq!(tokens.excluded[0].to_string(), "cache");

        assert_eq!(tokens.state(lattice.initial()).to_string(), "RequestBuilder");
        assert_eq!(
            tokens.state(lattice.full()).to_string(),
            "RequestBuilderTypeRetries"
        );
        assert_eq!(tokens.members(lattice.full()).len(), 2);
    }

    #[test]
    fn test_inherited_visibility() {
        let entity = EntitySpec::new("Point", vec![FieldSpec::required("x", "i32")])
            .expect("valid entity");
        let lattice = Lattice::generate(&entity);
        let tokens = EntityTokens::new(&lattice).expect("valid tokens");
        assert!(matches!(tokens.vis, Visibility::Inherited));
    }

    #[test]
    fn test_invalid_type() {
        let entity = EntitySpec::new("Point", vec![FieldSpec::required("x", "Vec<")])
            .expect("valid entity");
        let lattice = Lattice::generate(&entity);
        let err = EntityTokens::new(&lattice).expect_err("type does not parse");
        assert!(matches!(
            err,
            CodegenError::InvalidType { ref entity, ref field, .. }
                if entity == "Point" && field == "x"
        ));
    }
}
