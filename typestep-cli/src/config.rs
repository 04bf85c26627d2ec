//! Configuration file loading and flag overrides.

use crate::args::Cli;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use typestep_codegen::OutputConfig;
use typestep_schema::ExtractConfig;

/// Configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "typestep.toml";

/// Contents of a `typestep.toml` file.
///
/// ```toml
/// [extract]
/// tag = "builder"
/// max_fields = 12
///
/// [output]
/// out_dir = "src/generated"
/// format = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Extraction settings.
    pub extract: ExtractConfig,
    /// Output settings.
    pub output: OutputConfig,
}

impl Config {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid configuration")
    }

    /// Loads the configuration for a run.
    ///
    /// An explicit `--config` file must exist; otherwise `typestep.toml` in
    /// the working directory is used when present, and defaults when not.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !default.is_file() {
                    tracing::debug!("no {} found, using defaults", DEFAULT_CONFIG_FILE);
                    return Ok(Self::default());
                }
                default
            }
        };

        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config '{}'", path.display()))?;
        let config = Self::from_toml_str(&text)
            .with_context(|| format!("failed to load config '{}'", path.display()))?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Applies command-line flags and environment variables; they win over
    /// the file.
    #[must_use]
    pub fn apply(mut self, cli: &Cli) -> Self {
        if let Some(tag) = &cli.tag {
            self.extract = self.extract.with_tag(tag.clone());
        }
        if let Some(max_fields) = cli.max_fields {
            self.extract = self.extract.with_max_fields(max_fields);
        }
        if let Some(out_dir) = &cli.out_dir {
            self.output.out_dir = Some(out_dir.clone());
        }
        if cli.no_format {
            self.output.format = false;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_full_config() {
        let config = Config::from_toml_str(
            r#"
            [extract]
            tag = "btest"
            max_fields = 6

            [output]
            out_dir = "gen"
            format = false
            "#,
        )
        .expect("valid config");

        assert_eq!(config.extract.tag(), "btest");
        assert_eq!(config.extract.max_fields, 6);
        assert_eq!(config.output.out_dir, Some(PathBuf::from("gen")));
        assert!(!config.output.format);
    }

    #[test]
    fn test_empty_config_is_default() {
        let config = Config::from_toml_str("").expect("valid config");
        assert_eq!(config, Config::default());
        assert!(config.output.format);
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(Config::from_toml_str("[extract]\ntags = \"x\"\n").is_err());
        assert!(Config::from_toml_str("[render]\n").is_err());
    }

    #[test]
    fn test_flags_override_file() {
        let config = Config::from_toml_str("[extract]\ntag = \"file\"\nmax_fields = 4\n")
            .expect("valid config");
        let cli = Cli::try_parse_from([
            "typestep",
            "model.rs",
            "--tag",
            "flag",
            "--max-fields",
            "9",
            "--out-dir",
            "out",
            "--no-format",
        ])
        .expect("parses");

        let config = config.apply(&cli);
        assert_eq!(config.extract.tag(), "flag");
        assert_eq!(config.extract.max_fields, 9);
        assert_eq!(config.output.out_dir, Some(PathBuf::from("out")));
        assert!(!config.output.format);
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = Config::load(Some(&dir.path().join("absent.toml"))).expect_err("missing");
        assert!(err.to_string().contains("failed to read config"));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("typestep.toml");
        std::fs::write(&path, "[output]\nformat = false\n").expect("write config");

        let config = Config::load(Some(&path)).expect("loads");
        assert!(!config.output.format);
    }
}
