//! FASTRAK `.pos` to `.hpts` converter
//!
//! Production implementation of [`Converter`] backed by the filesystem.

use crate::converter::traits::{ConversionSummary, Converter};
use crate::domain::{label_points, CategoryCounts, UnitScale};
use crate::error::ConvertError;
use crate::format::hpts::{render, HptsHeader};
use crate::format::pos::parse_pos;

use std::fs::{File, OpenOptions};
use std::io::{BufReader, ErrorKind, Write};
use std::path::Path;

/// Tunables for a conversion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionOptions {
    /// Multiplier from source units to output units
    pub scale: UnitScale,
    /// Write the timestamp comment line
    pub timestamp: bool,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            scale: UnitScale::CM_TO_MM,
            timestamp: true,
        }
    }
}

/// Converter for Brainstorm-written Polhemus FASTRAK files
#[derive(Debug, Clone, Default)]
pub struct FastrakConverter {
    options: ConversionOptions,
}

impl FastrakConverter {
    /// Create a converter with default options (cm to mm, timestamped)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter with explicit options
    pub fn with_options(options: ConversionOptions) -> Self {
        Self { options }
    }

    fn header(&self, pos_path: &Path, hpts_path: &Path) -> HptsHeader {
        let header = HptsHeader::new(pos_path, hpts_path);
        if self.options.timestamp {
            header.with_timestamp(chrono::Local::now())
        } else {
            header
        }
    }
}

impl Converter for FastrakConverter {
    fn convert(
        &self,
        pos_path: &Path,
        hpts_path: &Path,
        overwrite: bool,
    ) -> Result<ConversionSummary, ConvertError> {
        if !overwrite && hpts_path.exists() {
            return Err(ConvertError::OutputExists(hpts_path.to_path_buf()));
        }

        let file = File::open(pos_path).map_err(|source| ConvertError::ReadInput {
            path: pos_path.to_path_buf(),
            source,
        })?;

        let records = parse_pos(BufReader::new(file)).map_err(|source| ConvertError::Parse {
            path: pos_path.to_path_buf(),
            source,
        })?;
        log::debug!(
            "Parsed {} records from {}",
            records.len(),
            pos_path.display()
        );

        let points = label_points(&records, self.options.scale);
        let text = render(&self.header(pos_path, hpts_path), &points);

        write_output(hpts_path, text.as_bytes(), overwrite)?;

        let counts = CategoryCounts::from_points(&points);
        log::info!(
            "Wrote {} points ({} cardinal, {} eeg, {} extra) to {}",
            counts.total(),
            counts.cardinal,
            counts.eeg,
            counts.extra,
            hpts_path.display()
        );

        Ok(ConversionSummary::new(pos_path, hpts_path, counts))
    }
}

/// Write the document; without `overwrite` the file must not already exist
fn write_output(path: &Path, contents: &[u8], overwrite: bool) -> Result<(), ConvertError> {
    let mut options = OpenOptions::new();
    options.write(true);
    if overwrite {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }

    let mut file = options.open(path).map_err(|source| {
        if source.kind() == ErrorKind::AlreadyExists {
            ConvertError::OutputExists(path.to_path_buf())
        } else {
            ConvertError::WriteOutput {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    file.write_all(contents)
        .and_then(|()| file.flush())
        .map_err(|source| ConvertError::WriteOutput {
            path: path.to_path_buf(),
            source,
        })
}
