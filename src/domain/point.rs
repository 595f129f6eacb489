//! Digitised point domain types
//!
//! Raw `.pos` records, their head-point categories, and the labelling step
//! that assigns MNE identifiers to each point.

use crate::domain::units::{Position, UnitScale};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Anatomical landmark recorded as a cardinal point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Fiducial {
    /// Left pre-auricular point
    Lpa,
    /// Nasion
    Nasion,
    /// Right pre-auricular point
    Rpa,
}

impl Fiducial {
    /// MNE cardinal identifier for this landmark
    pub const fn code(&self) -> u32 {
        match self {
            Fiducial::Lpa => 1,
            Fiducial::Nasion => 2,
            Fiducial::Rpa => 3,
        }
    }

    /// Label used by Brainstorm in `.pos` files
    pub const fn label(&self) -> &'static str {
        match self {
            Fiducial::Lpa => "LPA",
            Fiducial::Nasion => "NA",
            Fiducial::Rpa => "RPA",
        }
    }
}

impl FromStr for Fiducial {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NA" => Ok(Fiducial::Nasion),
            "LPA" => Ok(Fiducial::Lpa),
            "RPA" => Ok(Fiducial::Rpa),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for Fiducial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single record read from a `.pos` file, coordinates still in source units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PosRecord {
    /// 4-field line: `LABEL X Y Z`
    Fiducial {
        fiducial: Fiducial,
        position: Position,
    },
    /// 5-field line with a non-empty name
    Electrode {
        id: String,
        name: String,
        position: Position,
    },
    /// 5-field line with an empty name (head shape)
    Shape { id: String, position: Position },
}

impl PosRecord {
    /// Category this record maps to in the head-points file
    pub fn category(&self) -> PointCategory {
        match self {
            PosRecord::Fiducial { .. } => PointCategory::Cardinal,
            PosRecord::Electrode { .. } => PointCategory::Eeg,
            PosRecord::Shape { .. } => PointCategory::Extra,
        }
    }

    /// Position in source units
    pub fn position(&self) -> Position {
        match self {
            PosRecord::Fiducial { position, .. }
            | PosRecord::Electrode { position, .. }
            | PosRecord::Shape { position, .. } => *position,
        }
    }
}

/// Head-points category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointCategory {
    Cardinal,
    Eeg,
    Extra,
}

impl PointCategory {
    /// Keyword written in the `.hpts` file
    pub const fn as_str(&self) -> &'static str {
        match self {
            PointCategory::Cardinal => "cardinal",
            PointCategory::Eeg => "eeg",
            PointCategory::Extra => "extra",
        }
    }
}

impl fmt::Display for PointCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A labelled head point, position in output units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeadPoint {
    pub category: PointCategory,
    pub identifier: u32,
    pub position: Position,
}

impl HeadPoint {
    /// Create a new head point
    pub fn new(category: PointCategory, identifier: u32, position: Position) -> Self {
        Self {
            category,
            identifier,
            position,
        }
    }
}

/// Assign identifiers and scale positions, preserving file order
///
/// - cardinal points use their fiducial code (LPA 1, NA 2, RPA 3)
/// - EEG electrodes are numbered from 0; the first one is the reference
/// - extra (shape) points are numbered from 1
pub fn label_points(records: &[PosRecord], scale: UnitScale) -> Vec<HeadPoint> {
    let mut next_eeg = 0;
    let mut next_extra = 1;

    records
        .iter()
        .map(|record| {
            let identifier = match record {
                PosRecord::Fiducial { fiducial, .. } => fiducial.code(),
                PosRecord::Electrode { .. } => {
                    let id = next_eeg;
                    next_eeg += 1;
                    id
                }
                PosRecord::Shape { .. } => {
                    let id = next_extra;
                    next_extra += 1;
                    id
                }
            };

            HeadPoint::new(
                record.category(),
                identifier,
                record.position().scaled(scale),
            )
        })
        .collect()
}

/// Number of points per category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts {
    pub cardinal: usize,
    pub eeg: usize,
    pub extra: usize,
}

impl CategoryCounts {
    /// Tally categories over a set of head points
    pub fn from_points(points: &[HeadPoint]) -> Self {
        points.iter().fold(Self::default(), |mut counts, point| {
            match point.category {
                PointCategory::Cardinal => counts.cardinal += 1,
                PointCategory::Eeg => counts.eeg += 1,
                PointCategory::Extra => counts.extra += 1,
            }
            counts
        })
    }

    /// Total number of points
    pub fn total(&self) -> usize {
        self.cardinal + self.eeg + self.extra
    }
}
