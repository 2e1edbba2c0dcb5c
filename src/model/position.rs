use super::constraint::{check_range, ConstraintError};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Lower bound for either coordinate
pub const COORDINATE_MIN: f64 = 0.0;

/// Upper bound for either coordinate
pub const COORDINATE_MAX: f64 = 1000.0;

/// Measurement unit for a position
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Px,
    Pt,
    In,
    Cm,
}

impl Unit {
    pub fn as_str(self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Pt => "pt",
            Unit::In => "in",
            Unit::Cm => "cm",
        }
    }
}

impl FromStr for Unit {
    type Err = ConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "px" => Ok(Unit::Px),
            "pt" => Ok(Unit::Pt),
            "in" => Ok(Unit::In),
            "cm" => Ok(Unit::Cm),
            other => Err(ConstraintError::new(
                "unit",
                format!("must be one of px, pt, in, cm, got {other:?}"),
            )),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Location of an element on its slide. Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    x: f64,
    y: f64,
    unit: Unit,
}

impl Position {
    /// Both coordinates must lie in `[0, 1000]`
    pub fn new(x: f64, y: f64, unit: Unit) -> Result<Self, ConstraintError> {
        Ok(Self {
            x: check_range("x", x, COORDINATE_MIN, COORDINATE_MAX)?,
            y: check_range("y", y, COORDINATE_MIN, COORDINATE_MAX)?,
            unit,
        })
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }
}
