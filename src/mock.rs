//! Mock implementations for testing
//!
//! Provides a recording converter so the CLI shell can be tested without
//! touching the filesystem.

use crate::converter::{ConversionSummary, Converter};
use crate::domain::CategoryCounts;
use crate::error::ConvertError;

use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Arguments of a single recorded `convert` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertCall {
    pub pos_path: PathBuf,
    pub hpts_path: PathBuf,
    pub overwrite: bool,
}

impl ConvertCall {
    /// Create a call record from plain strings
    pub fn new(pos_path: &str, hpts_path: &str, overwrite: bool) -> Self {
        Self {
            pos_path: PathBuf::from(pos_path),
            hpts_path: PathBuf::from(hpts_path),
            overwrite,
        }
    }
}

/// Mock converter that records calls and returns a canned outcome
#[derive(Debug, Default)]
pub struct MockConverter {
    calls: Mutex<Vec<ConvertCall>>,
    counts: CategoryCounts,
    fail_with_existing_output: bool,
}

impl MockConverter {
    /// Create a mock that succeeds with zero points
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: report these category counts on success
    pub fn with_counts(mut self, counts: CategoryCounts) -> Self {
        self.counts = counts;
        self
    }

    /// Builder: fail every call with `OutputExists`
    pub fn failing(mut self) -> Self {
        self.fail_with_existing_output = true;
        self
    }

    /// All calls received so far, in order
    pub fn calls(&self) -> Vec<ConvertCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl Converter for MockConverter {
    fn convert(
        &self,
        pos_path: &Path,
        hpts_path: &Path,
        overwrite: bool,
    ) -> Result<ConversionSummary, ConvertError> {
        self.calls.lock().unwrap().push(ConvertCall {
            pos_path: pos_path.to_path_buf(),
            hpts_path: hpts_path.to_path_buf(),
            overwrite,
        });

        if self.fail_with_existing_output {
            return Err(ConvertError::OutputExists(hpts_path.to_path_buf()));
        }

        Ok(ConversionSummary::new(pos_path, hpts_path, self.counts))
    }
}
