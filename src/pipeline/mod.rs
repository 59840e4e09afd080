//! Conversion pipeline: chain dispatch plus formatting stages.
//!
//! [`Converter`] is the single entry point a front end calls. It owns the
//! whole pipeline topology — the unit chain and the stage list — built
//! once at construction and immutable afterwards. Each call is a pure
//! function of its two string inputs.

mod chain;
mod stage;

pub use chain::ConverterChain;
pub use stage::{RoundTwoDecimals, ScientificNotation, Stage, UnitSuffix};

use tracing::{debug, instrument};

use crate::domain::{Unit, parse_km};
use crate::error::ConvertResult;

/// The conversion facade exposed to the embedding front end.
///
/// Two fixed variants exist, mirroring the two shipped configurations:
/// [`Converter::bare`] returns the raw numeric string, and
/// [`Converter::display`] runs the full formatting stack. The stage
/// order is not configurable from outside.
pub struct Converter {
    chain: ConverterChain,
    stages: Vec<Box<dyn Stage>>,
}

impl Converter {
    /// Chain only, no formatting stages.
    pub fn bare() -> Self {
        Self::with_stages(Vec::new())
    }

    /// The GUI-facing variant: round to two decimals, rewrite in
    /// scientific notation, append the unit name.
    pub fn display() -> Self {
        Self::with_stages(vec![
            Box::new(RoundTwoDecimals),
            Box::new(ScientificNotation),
            Box::new(UnitSuffix),
        ])
    }

    fn with_stages(stages: Vec<Box<dyn Stage>>) -> Self {
        Self {
            chain: ConverterChain::new(),
            stages,
        }
    }

    /// Convert a kilometre distance string to the requested unit.
    ///
    /// The distance is validated first ([`InvalidNumber`]), then the unit
    /// tag ([`UnsupportedUnit`]); the chain computes the value and each
    /// stage rewrites the text on the way out.
    ///
    /// [`InvalidNumber`]: crate::error::ConvertError::InvalidNumber
    /// [`UnsupportedUnit`]: crate::error::ConvertError::UnsupportedUnit
    #[instrument(skip(self))]
    pub fn convert(&self, distance_km: &str, unit: &str) -> ConvertResult<String> {
        let km = parse_km(distance_km)?;
        let unit: Unit = unit.parse()?;

        let mut text = self.chain.convert(km, unit)?;
        debug!(%unit, value = %text, "chain dispatched");

        for stage in &self.stages {
            text = stage.apply(text, unit);
        }
        debug!(result = %text, "conversion complete");
        Ok(text)
    }
}

impl Default for Converter {
    /// The GUI-facing [`display`](Converter::display) variant.
    fn default() -> Self {
        Self::display()
    }
}
