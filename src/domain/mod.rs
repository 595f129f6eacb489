//! Domain models for fastrak-hpts
//!
//! This module contains the digitised point types and unit handling.
//! Types are validated on construction (fail-fast pattern).

pub mod point;
pub mod units;

pub use point::{label_points, CategoryCounts, Fiducial, HeadPoint, PointCategory, PosRecord};
pub use units::{Position, UnitScale};
