//! Unit domain types
//!
//! Provides validated types for lengths and the unit scale applied to
//! digitizer coordinates.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Multiplier applied to source coordinates (centimetres by default)
///
/// Validated on construction: finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct UnitScale(f64);

impl UnitScale {
    /// Centimetres to millimetres
    pub const CM_TO_MM: UnitScale = UnitScale(10.0);

    /// Create a new UnitScale with validation
    ///
    /// # Errors
    /// Returns `DomainError::InvalidScale` if value is not finite or <= 0
    pub fn new(value: f64) -> Result<Self, DomainError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(DomainError::InvalidScale(value));
        }
        Ok(Self(value))
    }

    /// Get the raw multiplier
    #[inline]
    pub const fn factor(&self) -> f64 {
        self.0
    }

    /// Apply the scale to a single value
    #[inline]
    pub fn apply(&self, value: f64) -> f64 {
        value * self.0
    }
}

impl Default for UnitScale {
    fn default() -> Self {
        Self::CM_TO_MM
    }
}

impl fmt::Display for UnitScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.0)
    }
}

impl TryFrom<f64> for UnitScale {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UnitScale> for f64 {
    fn from(scale: UnitScale) -> Self {
        scale.0
    }
}

/// A 3D position in digitizer space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    /// Create a new position
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Multiply every axis by the given scale
    pub fn scaled(&self, scale: UnitScale) -> Self {
        Self {
            x: scale.apply(self.x),
            y: scale.apply(self.y),
            z: scale.apply(self.z),
        }
    }

    /// Axes in x, y, z order
    pub fn as_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_valid() {
        assert!(UnitScale::new(10.0).is_ok());
        assert!(UnitScale::new(0.001).is_ok());
    }

    #[test]
    fn test_scale_invalid() {
        assert!(UnitScale::new(0.0).is_err());
        assert!(UnitScale::new(-10.0).is_err());
        assert!(UnitScale::new(f64::NAN).is_err());
        assert!(UnitScale::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_default_scale_is_cm_to_mm() {
        assert_eq!(UnitScale::default().factor(), 10.0);
    }

    #[test]
    fn test_position_scaled() {
        let pos = Position::new(1.5, -2.0, 0.25).scaled(UnitScale::CM_TO_MM);
        assert_eq!(pos.as_array(), [15.0, -20.0, 2.5]);
    }

    #[test]
    fn test_scale_deserialize_rejects_negative() {
        let result: Result<UnitScale, _> = serde_json::from_str("-1.0");
        assert!(result.is_err());
    }
}
