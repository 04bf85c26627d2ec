//! Generation run driven by the parsed command line.

use crate::args::Cli;
use crate::config::Config;
use anyhow::{Context, Result};
use std::io::Write;

/// Generates builders for every tagged struct of `cli.file`.
///
/// Every entity is attempted; failures are reported together at the end.
pub fn run(cli: &Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?.apply(cli);
    tracing::debug!(?config, "resolved configuration");

    let mut report =
        typestep_codegen::generate_from_file(&cli.file, &config.extract, &config.output)
            .with_context(|| format!("failed to process '{}'", cli.file.display()))?;

    if report.builders.is_empty() && report.is_ok() {
        tracing::info!(
            "no structs tagged with #[{}] in {}",
            config.extract.tag(),
            cli.file.display()
        );
    }

    if cli.stdout {
        let mut out = std::io::stdout().lock();
        for builder in &report.builders {
            out.write_all(builder.source.as_bytes())
                .context("failed to write to stdout")?;
        }
    } else {
        for path in typestep_codegen::write_builders(&mut report, &cli.file, &config.output) {
            tracing::info!("generated {}", path.display());
        }
    }

    let builders = report.into_result()?;
    tracing::debug!("generated {} builder(s)", builders.len());
    Ok(())
}
