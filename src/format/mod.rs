//! File formats
//!
//! Reader for digitizer `.pos` files and writer for `.hpts` head points.

pub mod hpts;
pub mod pos;

pub use hpts::{render, HptsHeader};
pub use pos::{parse_pos, read_pos_file};
