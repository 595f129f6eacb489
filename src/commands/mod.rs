//! Command handlers
//!
//! Each command handler orchestrates the execution of a CLI command.

pub mod convert;

pub use convert::{run_convert, ConvertRequest};
