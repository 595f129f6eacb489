//! MNE `.hpts` head-points writer
//!
//! Output layout:
//!
//! ```text
//! # Converted from <pos> to <hpts>
//! # <timestamp>
//! <category> <identifier> <x> <y> <z>
//! ```

use crate::domain::HeadPoint;

use chrono::{DateTime, Local};
use std::fmt::Write;
use std::path::Path;

/// Timestamp layout of the second comment line
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Comment block written at the top of a `.hpts` file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HptsHeader {
    source: String,
    destination: String,
    timestamp: Option<String>,
}

impl HptsHeader {
    /// Create a header naming both files, without a timestamp line
    pub fn new(source: &Path, destination: &Path) -> Self {
        Self {
            source: source.display().to_string(),
            destination: destination.display().to_string(),
            timestamp: None,
        }
    }

    /// Builder: add a timestamp line
    pub fn with_timestamp(mut self, at: DateTime<Local>) -> Self {
        self.timestamp = Some(at.format(TIMESTAMP_FORMAT).to_string());
        self
    }

    fn write_to(&self, out: &mut String) {
        let _ = writeln!(
            out,
            "# Converted from {} to {}",
            self.source, self.destination
        );
        if let Some(ts) = &self.timestamp {
            let _ = writeln!(out, "# {}", ts);
        }
    }
}

/// Decimal exponents outside `[-4, 16)` are written in scientific notation
const POSITIONAL_EXPONENTS: std::ops::Range<i32> = -4..16;

/// Format a coordinate as the shortest round-trip decimal
///
/// Positional values always carry a fractional part (`15.0`,
/// `11.000000000000002`). Very small or large values use a signed exponent
/// of at least two digits (`1e+16`, `9.999999999999999e-06`).
pub fn format_coordinate(value: f64) -> String {
    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if POSITIONAL_EXPONENTS.contains(&exponent) {
        let positional = value.to_string();
        if positional.contains('.') {
            positional
        } else {
            format!("{}.0", positional)
        }
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    }
}

/// Format one head point as a `.hpts` line, without the newline
pub fn format_point(point: &HeadPoint) -> String {
    let [x, y, z] = point.position.as_array();
    format!(
        "{} {} {} {} {}",
        point.category,
        point.identifier,
        format_coordinate(x),
        format_coordinate(y),
        format_coordinate(z)
    )
}

/// Render a complete `.hpts` document
pub fn render(header: &HptsHeader, points: &[HeadPoint]) -> String {
    let mut out = String::new();
    header.write_to(&mut out);

    for point in points {
        out.push_str(&format_point(point));
        out.push('\n');
    }

    out
}
