//! Convert command implementation
//!
//! Translates parsed arguments into exactly one converter call.

use crate::cli::args::{Cli, OutputFormat};
use crate::cli::output::{write_output, ConversionReport};
use crate::converter::{ConversionSummary, Converter};
use crate::error::Result;

use std::io::Write;
use std::path::PathBuf;

/// The three values handed to the converter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertRequest {
    pub pos_path: PathBuf,
    pub hpts_path: PathBuf,
    pub overwrite: bool,
}

impl ConvertRequest {
    /// Extract the request from parsed arguments
    ///
    /// Returns `None` when the paths are absent, which clap only allows
    /// together with `--completions`.
    pub fn from_cli(cli: &Cli) -> Option<Self> {
        Some(Self {
            pos_path: cli.pos_path.clone()?,
            hpts_path: cli.hpts_path.clone()?,
            overwrite: cli.overwrite,
        })
    }
}

/// Execute the conversion and report the summary to `out`
///
/// Paths are passed through untouched; any failure comes from the converter.
pub fn run_convert<C: Converter, W: Write>(
    converter: &C,
    request: &ConvertRequest,
    format: OutputFormat,
    quiet: bool,
    out: &mut W,
) -> Result<ConversionSummary> {
    log::debug!(
        "Converting {} -> {} (overwrite: {})",
        request.pos_path.display(),
        request.hpts_path.display(),
        request.overwrite
    );

    let summary = converter.convert(&request.pos_path, &request.hpts_path, request.overwrite)?;

    if !quiet {
        write_output(out, &ConversionReport::from(&summary), format)?;
    }

    Ok(summary)
}
