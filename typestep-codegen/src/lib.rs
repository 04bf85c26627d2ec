//! # typestep Codegen
//!
//! Rust code generation of typestate builders.
//!
//! This crate provides:
//! - Per-state builder types, `with_` transitions and `build` methods
//! - Whole-file generation for every tagged struct of a source file
//! - Per-entity error reporting that never stops sibling entities
//! - Output placement and optional rustfmt post-processing

pub mod error;
pub mod format;
pub mod generator;
pub mod output;
pub mod report;
pub mod rust;

pub use error::CodegenError;
pub use format::format_source;
pub use generator::{Generator, HEADER};
pub use output::{OutputConfig, output_path};
pub use report::{EntityFailure, GeneratedBuilder, GenerationReport};

use proc_macro2::TokenStream;
use std::path::{Path, PathBuf};
use typestep_core::Lattice;
use typestep_schema::{EntitySpec, ExtractConfig, Extraction};

/// Generates the builder items for one entity.
///
/// # Arguments
/// * `entity` - Validated entity description
///
/// # Errors
/// Returns `CodegenError` if a name or type cannot be expressed as Rust syntax.
pub fn generate_tokens(entity: &EntitySpec) -> Result<TokenStream, CodegenError> {
    let lattice = Lattice::generate(entity);
    Generator::new(&lattice).tokens()
}

/// Generates builders for every tagged struct of a Rust source string.
///
/// # Arguments
/// * `source` - Rust source text
/// * `extract` - Marker tag and field cap
/// * `output` - Whether to format the generated code
///
/// # Returns
/// A report holding every generated builder and every per-entity failure.
///
/// # Errors
/// Returns `CodegenError` only if the source does not parse at all.
pub fn generate_from_source(
    source: &str,
    extract: &ExtractConfig,
    output: &OutputConfig,
) -> Result<GenerationReport, CodegenError> {
    let extraction = typestep_schema::describe_tagged_structs(source, extract)?;
    Ok(generate_extraction(extraction, output))
}

/// Generates builders for every tagged struct of a Rust source file.
///
/// # Arguments
/// * `path` - Path to the Rust source file
/// * `extract` - Marker tag and field cap
/// * `output` - Whether to format the generated code
///
/// # Errors
/// Returns `CodegenError` if the file cannot be read or parsed.
pub fn generate_from_file(
    path: &Path,
    extract: &ExtractConfig,
    output: &OutputConfig,
) -> Result<GenerationReport, CodegenError> {
    let extraction = typestep_schema::describe_file(path, extract)?;
    Ok(generate_extraction(extraction, output))
}

/// Writes every builder of `report` for the given source file.
///
/// Returns the written paths; write failures are added to the report.
pub fn write_builders(
    report: &mut GenerationReport,
    source: &Path,
    output: &OutputConfig,
) -> Vec<PathBuf> {
    report.write_all(source, output)
}

fn generate_extraction(extraction: Extraction, output: &OutputConfig) -> GenerationReport {
    let mut report = GenerationReport::default();

    for error in extraction.errors {
        let entity = error.entity().map(str::to_string);
        report.fail(entity.as_deref(), error);
    }

    for entity in &extraction.entities {
        match render(entity, output) {
            Ok(source) => {
                tracing::debug!("generated builder for {}", entity.name());
                report.builders.push(GeneratedBuilder {
                    entity: entity.name().to_string(),
                    source,
                });
            }
            Err(e) => report.fail(Some(entity.name()), e),
        }
    }

    report
}

fn render(entity: &EntitySpec, output: &OutputConfig) -> Result<String, CodegenError> {
    let lattice = Lattice::generate(entity);
    let source = Generator::new(&lattice).generate()?;

    if output.format {
        format_source(&source)
    } else {
        Ok(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = r#"
        pub struct Order {
            #[builder]
            id: u64,
            #[builder(opt)]
            note: Option<String>,
            #[builder(ignore)]
            cache: Vec<u8>,
        }

        struct Pair<T> {
            #[builder]
            left: T,
        }

        struct Plain {
            value: i32,
        }
    "#;

    fn unformatted() -> OutputConfig {
        OutputConfig {
            format: false,
            ..OutputConfig::default()
        }
    }

    #[test]
    fn test_generate_from_source_collects_failures() {
        let report =
            generate_from_source(SOURCE, &ExtractConfig::default(), &unformatted()).expect("parses");

        assert_eq!(report.builders.len(), 1);
        assert_eq!(report.builders[0].entity, "Order");
        assert!(report.builders[0].source.starts_with(HEADER));
        assert!(report.builders[0].source.contains("pub struct OrderBuilderId"));

        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].entity.as_deref(), Some("Pair"));
        assert!(report.into_result().is_err());
    }

    #[test]
    fn test_malformed_marker_failure_names_entity() {
        let source = r#"
            pub struct Bad {
                #[builder = 3]
                id: u64,
            }

            pub struct Good {
                #[cfg_attr(any(), builder)]
                id: u64,
            }
        "#;
        let report = generate_from_source(source, &ExtractConfig::default(), &unformatted())
            .expect("parses");

        assert_eq!(report.builders.len(), 1);
        assert_eq!(report.builders[0].entity, "Good");
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].entity.as_deref(), Some("Bad"));
        assert!(report.failures[0].to_string().starts_with("Bad: "));
    }

    #[test]
    fn test_generate_from_invalid_source() {
        let err = generate_from_source("struct {", &ExtractConfig::default(), &unformatted())
            .expect_err("invalid source");
        assert!(matches!(err, CodegenError::Extract(_)));
    }

    #[test]
    fn test_generate_tokens_for_unit_entity() {
        let entity = EntitySpec::new("Marker", Vec::new()).expect("valid entity");
        let code = generate_tokens(&entity).expect("generates").to_string();
        assert!(code.contains("struct MarkerBuilder { }"));
        assert!(code.contains("fn build (self) -> Marker"));
    }

    #[test]
    fn test_write_builders_from_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("orders.rs");
        std::fs::write(&path, SOURCE).expect("write source");

        let mut report =
            generate_from_file(&path, &ExtractConfig::default(), &unformatted()).expect("parses");
        let written = write_builders(&mut report, &path, &unformatted());

        assert_eq!(written, vec![dir.path().join("orders_order_builder.rs")]);
        let text = std::fs::read_to_string(&written[0]).expect("read builder");
        assert!(text.contains("fn with_note"));
        assert!(!text.contains("with_cache"));
        assert_eq!(report.failures.len(), 1);
    }
}
