//! rustfmt post-processing of generated source.

use crate::error::CodegenError;
use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

/// Edition passed to rustfmt.
pub const RUSTFMT_EDITION: &str = "2024";

/// Formats generated source with `rustfmt`.
///
/// If no `rustfmt` binary can be found the source is returned unchanged and a
/// warning is logged.
///
/// # Errors
/// Returns `CodegenError::Format` if rustfmt rejects the source, or
/// `CodegenError::Io` if it cannot be driven.
pub fn format_source(source: &str) -> Result<String, CodegenError> {
    run_formatter("rustfmt", source)
}

fn run_formatter(program: &str, source: &str) -> Result<String, CodegenError> {
    let spawned = Command::new(program)
        .args(["--edition", RUSTFMT_EDITION])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn();

    let mut child = match spawned {
        Ok(child) => child,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!("{} not found, leaving generated code unformatted", program);
            return Ok(source.to_string());
        }
        Err(e) => return Err(e.into()),
    };

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(source.as_bytes())?;
    }
    let output = child.wait_with_output()?;

    if !output.status.success() {
        return Err(CodegenError::Format {
            message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    String::from_utf8(output.stdout).map_err(|e| CodegenError::Format {
        message: e.to_string(),
    })
}
