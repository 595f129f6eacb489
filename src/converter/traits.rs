//! Trait definitions for position-file conversion
//!
//! The CLI shell only talks to [`Converter`], so it can be exercised with a
//! fake in tests while the real FASTRAK converter does file I/O in production.

use crate::domain::CategoryCounts;
use crate::error::ConvertError;

use serde::Serialize;
use std::path::{Path, PathBuf};

/// Converts a digitizer position file into a head-points file
///
/// Contract:
/// - reads and parses `pos_path`, writes the converted points to `hpts_path`
/// - if `hpts_path` exists and `overwrite` is false, returns
///   [`ConvertError::OutputExists`] and leaves the file untouched
pub trait Converter {
    /// Run one conversion
    fn convert(
        &self,
        pos_path: &Path,
        hpts_path: &Path,
        overwrite: bool,
    ) -> Result<ConversionSummary, ConvertError>;
}

/// Outcome of a successful conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionSummary {
    pub pos_path: PathBuf,
    pub hpts_path: PathBuf,
    pub counts: CategoryCounts,
}

impl ConversionSummary {
    /// Create a new summary
    pub fn new(pos_path: &Path, hpts_path: &Path, counts: CategoryCounts) -> Self {
        Self {
            pos_path: pos_path.to_path_buf(),
            hpts_path: hpts_path.to_path_buf(),
            counts,
        }
    }

    /// Total number of points written
    pub fn point_count(&self) -> usize {
        self.counts.total()
    }
}
