//! Command-line argument definitions using clap derive.

use clap::Parser;
use std::path::PathBuf;
use typestep_schema::MAX_FIELDS;

/// typestep - generate typestate builders for tagged structs
#[derive(Parser, Debug)]
#[command(name = "typestep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Rust source file containing tagged structs
    #[arg(env = "TYPESTEP_FILE")]
    pub file: PathBuf,

    /// Attribute name marking builder fields [default: builder]
    #[arg(long, env = "TYPESTEP_TAG")]
    pub tag: Option<String>,

    /// Configuration file [default: ./typestep.toml when present]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory for generated files [default: next to FILE]
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Maximum number of builder fields per struct
    #[arg(long, value_parser = parse_max_fields)]
    pub max_fields: Option<usize>,

    /// Skip running rustfmt on generated code
    #[arg(long)]
    pub no_format: bool,

    /// Print generated code instead of writing files
    #[arg(long)]
    pub stdout: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

fn parse_max_fields(value: &str) -> Result<usize, String> {
    let n: usize = value.parse().map_err(|e| format!("{}", e))?;
    if n == 0 || n > MAX_FIELDS {
        return Err(format!("must be between 1 and {}", MAX_FIELDS));
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let cli = Cli::try_parse_from(["typestep", "model.rs"]).expect("parses");
        assert_eq!(cli.file, PathBuf::from("model.rs"));
        assert!(cli.out_dir.is_none());
        assert!(!cli.stdout);
        assert!(!cli.no_format);
    }

    #[test]
    fn test_parse_all_flags() {
        let cli = Cli::try_parse_from([
            "typestep",
            "model.rs",
            "--tag",
            "btest",
            "--config",
            "cfg.toml",
            "--out-dir",
            "gen",
            "--max-fields",
            "8",
            "--no-format",
            "--stdout",
            "--debug",
        ])
        .expect("parses");
        assert_eq!(cli.tag.as_deref(), Some("btest"));
        assert_eq!(cli.config, Some(PathBuf::from("cfg.toml")));
        assert_eq!(cli.out_dir, Some(PathBuf::from("gen")));
        assert_eq!(cli.max_fields, Some(8));
        assert!(cli.no_format && cli.stdout && cli.debug);
    }

    #[test]
    fn test_max_fields_range() {
        assert!(parse_max_fields("16").is_ok());
        assert!(parse_max_fields("0").is_err());
        assert!(parse_max_fields("17").is_err());
        assert!(parse_max_fields("many").is_err());
    }
}
