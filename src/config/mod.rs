//! Configuration system
//!
//! Handles TOML config file parsing and CLI argument merging.
//!
//! There is intentionally no `overwrite` key: the converter is always called
//! with the value the command line produces.

pub mod builder;
pub mod file;

pub use builder::ConfigBuilder;
pub use file::ConfigFile;

use crate::converter::ConversionOptions;
use crate::domain::UnitScale;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,
    /// Conversion settings
    pub conversion: ConversionConfig,
}

/// General configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GeneralConfig {
    /// Enable verbose logging
    pub verbose: bool,
    /// Suppress the conversion summary
    pub quiet: bool,
}

/// Conversion configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// Multiplier applied to source coordinates (cm to mm by default)
    pub scale: f64,
    /// Write the timestamp comment line
    pub timestamp: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            scale: UnitScale::CM_TO_MM.factor(),
            timestamp: true,
        }
    }
}

impl ConversionConfig {
    /// Convert to validated converter options
    pub fn to_options(&self) -> Result<ConversionOptions, ConfigError> {
        Ok(ConversionOptions {
            scale: UnitScale::new(self.scale)?,
            timestamp: self.timestamp,
        })
    }
}
