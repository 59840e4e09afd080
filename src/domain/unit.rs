//! The `Unit` value object.
//!
//! # Design
//!
//! A pure value type — `Copy`, equality-by-value, no identity. The set of
//! units is closed; dispatch and formatting elsewhere rely on exhaustive
//! matches over it. This file's only job is to define the type, its
//! conversion factors, and its string representations.
//!
//! The string tags (`"Mile"`, `"Yard"`, `"Foot"`) are a wire contract
//! with the front end and are matched *exactly* — no case folding, no
//! aliases. `"mile"` is an unsupported unit.

use crate::error::ConvertError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported target unit for a kilometre distance.
///
/// Serde uses the default variant names, which are exactly the wire tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    Mile,
    Yard,
    Foot,
}

const MILES_PER_KILOMETER: f64 = 0.621371;
const YARDS_PER_KILOMETER: f64 = 1093.6133;
const FEET_PER_KILOMETER: f64 = 3280.8399;

impl Unit {
    /// All units, in chain-dispatch order.
    pub const ALL: [Unit; 3] = [Unit::Mile, Unit::Yard, Unit::Foot];

    /// The wire tag for this unit.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mile => "Mile",
            Self::Yard => "Yard",
            Self::Foot => "Foot",
        }
    }

    /// Conversion factor: how many of this unit make up one kilometre.
    pub const fn factor(&self) -> f64 {
        match self {
            Self::Mile => MILES_PER_KILOMETER,
            Self::Yard => YARDS_PER_KILOMETER,
            Self::Foot => FEET_PER_KILOMETER,
        }
    }

    /// Human-readable plural suffix appended by the display pipeline.
    pub const fn suffix(&self) -> &'static str {
        match self {
            Self::Mile => "Miles",
            Self::Yard => "Yards",
            Self::Foot => "Feet",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Mile" => Ok(Self::Mile),
            "Yard" => Ok(Self::Yard),
            "Foot" => Ok(Self::Foot),
            other => Err(ConvertError::UnsupportedUnit {
                unit: other.to_string(),
            }),
        }
    }
}
