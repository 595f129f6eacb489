//! Output formatting utilities
//!
//! Provides table and JSON output formatting for the conversion summary.

use crate::cli::args::OutputFormat;
use crate::converter::ConversionSummary;
use serde::Serialize;
use std::io::{self, Write};

/// Format and write output based on the selected format
pub fn write_output<W: Write, T: Serialize + TableDisplay>(
    out: &mut W,
    data: &T,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Table => writeln!(out, "{}", data.to_table()),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string());
            writeln!(out, "{}", json)
        }
        OutputFormat::Compact => writeln!(out, "{}", data.to_compact()),
    }
}

/// Trait for types that can be displayed as a table
pub trait TableDisplay {
    /// Format as a table string
    fn to_table(&self) -> String;

    /// Format as a compact single line
    fn to_compact(&self) -> String {
        self.to_table().replace('\n', " | ")
    }
}

/// Conversion result for display
#[derive(Debug, Clone, Serialize)]
pub struct ConversionReport {
    pub source: String,
    pub destination: String,
    pub cardinal: usize,
    pub eeg: usize,
    pub extra: usize,
    pub total: usize,
}

impl From<&ConversionSummary> for ConversionReport {
    fn from(summary: &ConversionSummary) -> Self {
        Self {
            source: summary.pos_path.display().to_string(),
            destination: summary.hpts_path.display().to_string(),
            cardinal: summary.counts.cardinal,
            eeg: summary.counts.eeg,
            extra: summary.counts.extra,
            total: summary.point_count(),
        }
    }
}

impl TableDisplay for ConversionReport {
    fn to_table(&self) -> String {
        let mut output = format!("✓ Converted {} -> {}\n", self.source, self.destination);
        output.push_str(&format!("  Cardinal: {:>5}\n", self.cardinal));
        output.push_str(&format!("  EEG:      {:>5}\n", self.eeg));
        output.push_str(&format!("  Extra:    {:>5}\n", self.extra));
        output.push_str(&format!("  Total:    {:>5}", self.total));
        output
    }

    fn to_compact(&self) -> String {
        format!(
            "{} -> {}: {} points ({} cardinal, {} eeg, {} extra)",
            self.source, self.destination, self.total, self.cardinal, self.eeg, self.extra
        )
    }
}
