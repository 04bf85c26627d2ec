//! Entity extraction from Rust source.
//!
//! This module turns `struct` items into [`EntitySpec`] values, either by
//! scanning a whole source file for tagged structs or by describing the input
//! of a derive macro.

use crate::config::ExtractConfig;
use crate::error::ExtractError;
use crate::markers::{FieldMarker, read_markers};
use crate::types::{EntitySpec, FieldSpec};
use quote::ToTokens;
use std::path::Path;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, FieldsNamed, Generics, Item, ItemStruct, Visibility};

/// Entities described from one source file.
#[derive(Debug, Default)]
pub struct Extraction {
    /// Successfully described entities, in declaration order.
    pub entities: Vec<EntitySpec>,
    /// Per-entity failures. They do not prevent other entities from being described.
    pub errors: Vec<ExtractError>,
}

impl Extraction {
    /// Returns true if no entity failed.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Looks up a described entity by name.
    #[must_use]
    pub fn entity(&self, name: &str) -> Option<&EntitySpec> {
        self.entities.iter().find(|e| e.name() == name)
    }
}

/// Describes every tagged struct of a Rust source file.
///
/// A top-level struct is tagged if at least one of its fields carries an
/// attribute named after [`ExtractConfig::tag`]. Untagged fields of a tagged
/// struct are required; structs without tagged fields are skipped.
///
/// # Arguments
/// * `source` - Rust source text
/// * `config` - Extractor configuration
///
/// # Errors
/// Returns `ExtractError::Parse` if the source is not valid Rust. Failures
/// that concern a single struct are collected in [`Extraction::errors`].
pub fn describe_tagged_structs(
    source: &str,
    config: &ExtractConfig,
) -> Result<Extraction, ExtractError> {
    let file = syn::parse_file(source)?;
    let mut extraction = Extraction::default();

    for item in &file.items {
        let Item::Struct(item) = item else {
            continue;
        };

        match describe_item_struct(item, config) {
            Ok(Some(entity)) => {
                tracing::debug!(
                    "described entity {} ({} fields)",
                    entity.name(),
                    entity.len()
                );
                extraction.entities.push(entity);
            }
            Ok(None) => {}
            Err(err) => extraction.errors.push(err),
        }
    }

    Ok(extraction)
}

/// Reads a Rust source file and describes its tagged structs.
///
/// # Errors
/// Returns `ExtractError::Io` if the file cannot be read, or any error of
/// [`describe_tagged_structs`].
pub fn describe_file(path: &Path, config: &ExtractConfig) -> Result<Extraction, ExtractError> {
    let source = std::fs::read_to_string(path).map_err(|source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    describe_tagged_structs(&source, config)
}

/// Describes the struct a derive macro is attached to.
///
/// Every named field takes part, tagged or not; markers still make fields
/// optional or excluded.
///
/// # Errors
/// Returns `ExtractError` if the input is not a non-generic struct with named
/// fields, or if the described entity is invalid.
pub fn describe_derive_input(
    input: &DeriveInput,
    config: &ExtractConfig,
) -> Result<EntitySpec, ExtractError> {
    let name = input.ident.unraw().to_string();
    check_generics(&name, &input.generics)?;

    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => describe_fields(&name, &input.vis, fields, config),
            Fields::Unnamed(_) => Err(ExtractError::unsupported(
                name,
                "tuple structs are not supported",
            )),
            Fields::Unit => describe_fields(&name, &input.vis, &empty_fields(), config),
        },
        Data::Enum(_) => Err(ExtractError::unsupported(name, "enums are not supported")),
        Data::Union(_) => Err(ExtractError::unsupported(name, "unions are not supported")),
    }
}

/// Describes one struct item, or returns `None` if none of its fields is tagged.
fn describe_item_struct(
    item: &ItemStruct,
    config: &ExtractConfig,
) -> Result<Option<EntitySpec>, ExtractError> {
    let name = item.ident.unraw().to_string();

    let mut tagged = false;
    for field in &item.fields {
        tagged |= read_markers(&field.attrs, config.tag())
            .map_err(|err| ExtractError::invalid_marker(&name, err))?
            .tagged;
    }
    if !tagged {
        return Ok(None);
    }

    check_generics(&name, &item.generics)?;

    match &item.fields {
        Fields::Named(fields) => describe_fields(&name, &item.vis, fields, config).map(Some),
        _ => Err(ExtractError::unsupported(
            name,
            "tuple structs are not supported",
        )),
    }
}

fn describe_fields(
    name: &str,
    vis: &Visibility,
    fields: &FieldsNamed,
    config: &ExtractConfig,
) -> Result<EntitySpec, ExtractError> {
    let mut specs = Vec::new();
    let mut excluded = Vec::new();

    for field in &fields.named {
        let Some(ident) = &field.ident else {
            continue;
        };
        let field_name = ident.unraw().to_string();
        let markers = read_markers(&field.attrs, config.tag())
            .map_err(|err| ExtractError::invalid_marker(name, err))?;

        match markers.classify() {
            None => {
                return Err(ExtractError::ConflictingMarkers {
                    entity: name.to_string(),
                    field: field_name,
                });
            }
            Some(FieldMarker::Ignore) => excluded.push(field_name),
            Some(FieldMarker::Optional) => {
                specs.push(FieldSpec::optional(field_name, type_text(&field.ty)));
            }
            Some(FieldMarker::Required) => {
                specs.push(FieldSpec::required(field_name, type_text(&field.ty)));
            }
        }
    }

    if specs.len() > config.max_fields {
        return Err(ExtractError::FieldCapExceeded {
            entity: name.to_string(),
            count: specs.len(),
            limit: config.max_fields,
        });
    }

    Ok(EntitySpec::new(name, specs)?
        .with_visibility(vis.to_token_stream().to_string())
        .with_excluded(excluded))
}

fn check_generics(name: &str, generics: &Generics) -> Result<(), ExtractError> {
    if generics.params.is_empty() && generics.where_clause.is_none() {
        Ok(())
    } else {
        Err(ExtractError::unsupported(
            name,
            "generic structs are not supported",
        ))
    }
}

fn type_text(ty: &syn::Type) -> String {
    ty.to_token_stream().to_string()
}

fn empty_fields() -> FieldsNamed {
    FieldsNamed {
        brace_token: Default::default(),
        named: Default::default(),
    }
}
