//! Output placement and configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use typestep_schema::names::to_snake_case;

/// Settings controlling where and how generated builders are written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Directory for generated files. Defaults to the source file's directory.
    pub out_dir: Option<PathBuf>,
    /// Whether to run generated source through rustfmt.
    pub format: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            out_dir: None,
            format: true,
        }
    }
}

/// Path of the file holding the builder for `entity` generated from `source`.
///
/// The file is named `<source stem>_<entity in snake_case>_builder.rs` and
/// placed in `out_dir`, or next to `source` when no directory is given.
#[must_use]
pub fn output_path(source: &Path, entity: &str, out_dir: Option<&Path>) -> PathBuf {
    let dir = out_dir
        .map(Path::to_path_buf)
        .or_else(|| source.parent().map(Path::to_path_buf))
        .unwrap_or_default();
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    dir.join(format!("{}_{}_builder.rs", stem, to_snake_case(entity)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_next_to_source() {
        let path = output_path(Path::new("src/model/threestructs.rs"), "X", None);
        assert_eq!(path, PathBuf::from("src/model/threestructs_x_builder.rs"));
    }

    #[test]
    fn test_output_path_snake_cases_entity() {
        let path = output_path(Path::new("orders.rs"), "NewOrderSingle", None);
        assert_eq!(path, PathBuf::from("orders_new_order_single_builder.rs"));
    }

    #[test]
    fn test_output_path_in_out_dir() {
        let path = output_path(
            Path::new("src/threestructs.rs"),
            "y",
            Some(Path::new("target/generated")),
        );
        assert_eq!(path, PathBuf::from("target/generated/threestructs_y_builder.rs"));
    }

    #[test]
    fn test_output_config_defaults() {
        let config = OutputConfig::default();
        assert!(config.format);
        assert!(config.out_dir.is_none());
    }
}
