//! Conversion layer
//!
//! Provides the trait-based conversion interface and its FASTRAK
//! implementation.

pub mod fastrak;
pub mod traits;

pub use fastrak::{ConversionOptions, FastrakConverter};
pub use traits::{ConversionSummary, Converter};
