//! Unified error types for fastrak-hpts
//!
//! This module defines all error types used throughout the application.
//! Uses thiserror for ergonomic error definitions.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Error raised by the converter
    #[error("Conversion error: {0}")]
    Convert(#[from] ConvertError),

    /// Error from configuration parsing/validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO error (stdout, completions)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from a single `.pos` to `.hpts` conversion
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Destination exists and overwriting was not permitted
    #[error("Output path {} already exists", .0.display())]
    OutputExists(PathBuf),

    /// Failed to read the source `.pos` file
    #[error("Failed to read {}: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source `.pos` file is malformed
    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    /// Failed to write the destination `.hpts` file
    #[error("Failed to write {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from `.pos` record parsing
///
/// Line numbers are 1-based and count the ignored header line.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Line has neither 4 (fiducial) nor 5 (electrode/shape) fields
    #[error("line {line}: expected 4 or 5 tab-separated fields, found {count}")]
    UnexpectedFieldCount { line: usize, count: usize },

    /// 4-field line with a label other than NA, LPA or RPA
    #[error("line {line}: unknown fiducial label '{label}' (expected NA, LPA or RPA)")]
    UnknownFiducial { line: usize, label: String },

    /// Coordinate that is not a finite decimal number
    #[error("line {line}, column {column}: invalid coordinate '{value}'")]
    InvalidCoordinate {
        line: usize,
        column: usize,
        value: String,
    },

    /// Underlying reader failure
    #[error("read error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from domain type validation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Unit scale must be finite and strictly positive
    #[error("Invalid unit scale: {0} (must be a finite value > 0)")]
    InvalidScale(f64),
}

/// Errors from configuration parsing and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Config file exists but could not be read
    #[error("Failed to read configuration file {path}: {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid config value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl From<DomainError> for ConfigError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidScale(_) => ConfigError::InvalidValue {
                key: "conversion.scale".to_string(),
                message: err.to_string(),
            },
        }
    }
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
