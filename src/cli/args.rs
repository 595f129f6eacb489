//! CLI argument definitions using clap derive
//!
//! Defines the positional paths, the overwrite switch and ambient options.

use clap::{ArgAction, CommandFactory, Parser, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

/// Convert a Polhemus FASTRAK position file to an MNE head-points file
///
/// Reads a `.pos` file written by Brainstorm and writes the `.hpts` file
/// with positions converted from centimetres to millimetres.
#[derive(Parser, Debug)]
#[command(name = "convert_fastrak_to_hpts")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the source `.pos` file
    #[arg(required_unless_present = "completions")]
    pub pos_path: Option<PathBuf>,

    /// Destination path for the `.hpts` file
    #[arg(required_unless_present = "completions")]
    pub hpts_path: Option<PathBuf>,

    /// Permit overwriting HPTS_PATH if it already exists
    ///
    /// The switch stores `false` and its default is `false`, so the value
    /// passed to the converter is always `false`.
    #[arg(long, action = ArgAction::SetFalse, default_value_t = false)]
    pub overwrite: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress the conversion summary
    #[arg(short, long)]
    pub quiet: bool,

    /// Summary output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Path to configuration file
    #[arg(short, long, env = "FASTRAK_HPTS_CONFIG")]
    pub config: Option<String>,

    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

/// Output format
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format for machine parsing
    Json,
    /// Compact single-line format
    Compact,
}

/// Generate shell completions and print to stdout
pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}
