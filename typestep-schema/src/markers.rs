//! Field marker attributes.
//!
//! A field is marked by an attribute whose name is the configured tag:
//!
//! ```text
//! #[builder]            required
//! #[builder(opt)]       optional
//! #[builder(ignore)]    excluded from the builder
//! #[builder = "opt"]    same as #[builder(opt)]
//! ```
//!
//! Any other value still counts as a marker and leaves the field required.
//!
//! The compiler rejects attributes no derive has registered, so sources fed
//! to the `typestep` command usually wrap the marker in a `cfg_attr` that is
//! never enabled:
//!
//! ```text
//! #[cfg_attr(any(), builder(opt))]
//! ```

use syn::punctuated::Punctuated;
use syn::{Attribute, Expr, ExprLit, Lit, Meta, Token};

const CFG_ATTR: &str = "cfg_attr";

/// Marker value for optional fields.
pub const OPTIONAL_VALUE: &str = "opt";

/// Marker value for excluded fields.
pub const IGNORE_VALUE: &str = "ignore";

/// Classification of a field by its marker attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldMarker {
    /// Must be supplied before building.
    Required,
    /// May be left out; defaults on build.
    Optional,
    /// Not part of the builder; defaults on build.
    Ignore,
}

/// Marker values collected from every tag attribute of one field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Markers {
    /// At least one tag attribute is present.
    pub tagged: bool,
    /// An `opt` value was seen.
    pub optional: bool,
    /// An `ignore` value was seen.
    pub ignore: bool,
}

impl Markers {
    /// Resolves the collected values into a classification.
    ///
    /// Returns `None` when the field is both optional and ignored.
    #[must_use]
    pub fn classify(&self) -> Option<FieldMarker> {
        match (self.optional, self.ignore) {
            (true, true) => None,
            (true, false) => Some(FieldMarker::Optional),
            (false, true) => Some(FieldMarker::Ignore),
            (false, false) => Some(FieldMarker::Required),
        }
    }
}

/// Reads the marker attributes named `tag` from a field's attributes.
///
/// Markers nested in `cfg_attr` are read whatever the predicate, so
/// `#[cfg_attr(any(), builder(opt))]` marks a field in a file that still
/// compiles without any derive registering the tag.
///
/// # Errors
/// Returns `syn::Error` if a tag attribute is malformed.
pub fn read_markers(attrs: &[Attribute], tag: &str) -> syn::Result<Markers> {
    let mut markers = Markers::default();
    for attr in attrs {
        read_meta(&mut markers, &attr.meta, tag)?;
    }
    Ok(markers)
}

fn read_meta(markers: &mut Markers, meta: &Meta, tag: &str) -> syn::Result<()> {
    if meta.path().is_ident(CFG_ATTR) {
        return read_cfg_attr(markers, meta, tag);
    }
    if !meta.path().is_ident(tag) {
        return Ok(());
    }

    markers.tagged = true;
    match meta {
        Meta::Path(_) => {}
        Meta::List(list) => {
            let items = list.parse_args_with(Punctuated::<Meta, Token![,]>::parse_terminated)?;
            for item in &items {
                let value = item
                    .path()
                    .get_ident()
                    .map(ToString::to_string)
                    .unwrap_or_default();
                apply_value(markers, &value, tag);
            }
        }
        Meta::NameValue(nv) => match &nv.value {
            Expr::Lit(ExprLit {
                lit: Lit::Str(s), ..
            }) => apply_value(markers, &s.value(), tag),
            other => {
                return Err(syn::Error::new_spanned(
                    other,
                    format!("expected a string literal, e.g. #[{tag} = \"opt\"]"),
                ));
            }
        },
    }
    Ok(())
}

/// Reads the attributes of `cfg_attr(predicate, attr, ...)`.
fn read_cfg_attr(markers: &mut Markers, meta: &Meta, tag: &str) -> syn::Result<()> {
    let Meta::List(list) = meta else {
        return Ok(());
    };
    // Arguments of unrelated cfg_attr uses need not be plain metas.
    let Ok(args) = list.parse_args_with(Punctuated::<Meta, Token![,]>::parse_terminated) else {
        tracing::debug!("skipping cfg_attr that is not a list of attributes");
        return Ok(());
    };
    for attr in args.iter().skip(1) {
        read_meta(markers, attr, tag)?;
    }
    Ok(())
}

fn apply_value(markers: &mut Markers, value: &str, tag: &str) {
    match value {
        OPTIONAL_VALUE => markers.optional = true,
        IGNORE_VALUE => markers.ignore = true,
        "" => {}
        other => tracing::debug!("ignoring unrecognised #[{}] value '{}'", tag, other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn markers_of(field: syn::Field, tag: &str) -> Markers {
        read_markers(&field.attrs, tag).expect("well-formed markers")
    }

    #[test]
    fn test_untagged_field() {
        let field: syn::Field = parse_quote! { #[serde(rename = "x")] pub a: i32 };
        let markers = markers_of(field, "builder");
        assert!(!markers.tagged);
        assert_eq!(markers.classify(), Some(FieldMarker::Required));
    }

    #[test]
    fn test_path_marker() {
        let field: syn::Field = parse_quote! { #[builder] a: i32 };
        let markers = markers_of(field, "builder");
        assert!(markers.tagged);
        assert_eq!(markers.classify(), Some(FieldMarker::Required));
    }

    #[test]
    fn test_list_markers() {
        let field: syn::Field = parse_quote! { #[builder(opt)] a: i32 };
        assert_eq!(
            markers_of(field, "builder").classify(),
            Some(FieldMarker::Optional)
        );

        let field: syn::Field = parse_quote! { #[builder(ignore)] a: i32 };
        assert_eq!(
            markers_of(field, "builder").classify(),
            Some(FieldMarker::Ignore)
        );

        let field: syn::Field = parse_quote! { #[builder(doc = "x", other)] a: i32 };
        assert_eq!(
            markers_of(field, "builder").classify(),
            Some(FieldMarker::Required)
        );
    }

    #[test]
    fn test_name_value_marker() {
        let field: syn::Field = parse_quote! { #[btest = "opt"] a: i32 };
        let markers = markers_of(field, "btest");
        assert!(markers.tagged);
        assert_eq!(markers.classify(), Some(FieldMarker::Optional));
    }

    #[test]
    fn test_other_tag_is_ignored() {
        let field: syn::Field = parse_quote! { #[builder(opt)] a: i32 };
        assert!(!markers_of(field, "btest").tagged);
    }

    #[test]
    fn test_conflicting_markers() {
        let field: syn::Field = parse_quote! { #[builder(opt)] #[builder(ignore)] a: i32 };
        assert_eq!(markers_of(field, "builder").classify(), None);
    }

    #[test]
    fn test_cfg_attr_markers() {
        let field: syn::Field = parse_quote! { #[cfg_attr(any(), builder)] a: i32 };
        let markers = markers_of(field, "builder");
        assert!(markers.tagged);
        assert_eq!(markers.classify(), Some(FieldMarker::Required));

        let field: syn::Field = parse_quote! { #[cfg_attr(any(), btest(opt))] a: i32 };
        assert_eq!(
            markers_of(field, "btest").classify(),
            Some(FieldMarker::Optional)
        );

        let field: syn::Field = parse_quote! {
            #[cfg_attr(feature = "x", serde(skip), builder = "ignore")]
            a: i32
        };
        assert_eq!(
            markers_of(field, "builder").classify(),
            Some(FieldMarker::Ignore)
        );

        let field: syn::Field = parse_quote! {
            #[cfg_attr(unix, cfg_attr(any(), builder(opt)))]
            a: i32
        };
        assert_eq!(
            markers_of(field, "builder").classify(),
            Some(FieldMarker::Optional)
        );
    }

    #[test]
    fn test_cfg_attr_without_tag() {
        let field: syn::Field = parse_quote! { #[cfg_attr(test, derive(Debug))] a: i32 };
        assert!(!markers_of(field, "builder").tagged);

        // The predicate alone is never a marker.
        let field: syn::Field = parse_quote! { #[cfg_attr(builder, serde(skip))] a: i32 };
        assert!(!markers_of(field, "builder").tagged);

        let field: syn::Field = parse_quote! { #[cfg_attr(any(), doc = 1 +)] a: i32 };
        assert!(!markers_of(field, "builder").tagged);
    }

    #[test]
    fn test_malformed_cfg_attr_marker() {
        let field: syn::Field = parse_quote! { #[cfg_attr(any(), builder = 3)] a: i32 };
        assert!(read_markers(&field.attrs, "builder").is_err());
    }

    #[test]
    fn test_malformed_name_value() {
        let field: syn::Field = parse_quote! { #[builder = 3] a: i32 };
        assert!(read_markers(&field.attrs, "builder").is_err());
    }
}
