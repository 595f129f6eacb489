//! fastrak-hpts - Polhemus FASTRAK to MNE head-points conversion
//!
//! This library reads `.pos` position files recorded with a Polhemus
//! FASTRAK digitizer (as saved by Brainstorm) and writes `.hpts` files that
//! the MNE suite can consume.
//!
//! # Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`commands`]: Command handlers
//! - [`config`]: Configuration system
//! - [`converter`]: Conversion interface and FASTRAK implementation
//! - [`domain`]: Domain models with validation
//! - [`error`]: Error types
//! - [`format`]: `.pos` reader and `.hpts` writer

pub mod cli;
pub mod commands;
pub mod config;
pub mod converter;
pub mod domain;
pub mod error;
pub mod format;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use converter::{Converter, FastrakConverter};
pub use error::{AppError, Result};
