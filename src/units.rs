use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{ChipgeomError, OperationError};

/// Declared working unit for channel dimensions.
///
/// Geometries are typically authored in millimeters; the export adapter
/// rescales everything to meters for the solver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Unit {
    #[default]
    #[serde(rename = "mm")]
    Millimeters,
    #[serde(rename = "m")]
    Meters,
}

impl Unit {
    /// Multiplicative factor converting this unit to meters.
    #[must_use]
    pub fn scale_to_meters(self) -> f64 {
        match self {
            Self::Millimeters => 0.001,
            Self::Meters => 1.0,
        }
    }

    /// Short unit symbol, as used in reports and export records.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Millimeters => "mm",
            Self::Meters => "m",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = ChipgeomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mm" => Ok(Self::Millimeters),
            "m" => Ok(Self::Meters),
            other => {
                Err(OperationError::InvalidInput(format!("unknown length unit '{other}'")).into())
            }
        }
    }
}
