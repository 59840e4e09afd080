//! Chain-of-responsibility unit dispatch.
//!
//! The chain is a fixed ordered list of tagged handlers. Each handler
//! answers only for its own unit and passes on everything else; dispatch
//! is a linear walk, first match wins. The tags are mutually exclusive,
//! so the order affects traversal cost only, never the result.
//!
//! The canonical chain is built once by [`ConverterChain::new`] and holds
//! exactly one handler per supported unit.

use crate::domain::Unit;
use crate::error::{ConvertError, ConvertResult};

/// One link in the chain: a unit tag and its conversion factor.
#[derive(Debug, Clone, Copy)]
struct UnitHandler {
    unit: Unit,
    factor: f64,
}

impl UnitHandler {
    fn for_unit(unit: Unit) -> Self {
        Self {
            unit,
            factor: unit.factor(),
        }
    }

    /// Answer the request if the tag matches, otherwise defer.
    fn handle(&self, km: f64, requested: Unit) -> Option<f64> {
        (self.unit == requested).then_some(km * self.factor)
    }
}

/// Ordered list of unit handlers.
#[derive(Debug, Clone)]
pub struct ConverterChain {
    handlers: Vec<UnitHandler>,
}

impl ConverterChain {
    /// Build the canonical chain: Mile → Yard → Foot.
    pub fn new() -> Self {
        let chain = Self {
            handlers: Unit::ALL.iter().copied().map(UnitHandler::for_unit).collect(),
        };
        debug_assert!(chain.has_one_handler_per_unit());
        chain
    }

    /// Build a chain from an explicit handler order. Exists to exercise
    /// fallthrough and ordering in tests; the public constructor always
    /// covers every unit.
    #[cfg(test)]
    fn with_units(units: &[Unit]) -> Self {
        Self {
            handlers: units.iter().copied().map(UnitHandler::for_unit).collect(),
        }
    }

    /// Convert a kilometre distance to the requested unit.
    ///
    /// The result uses Rust's default `f64` formatting (shortest
    /// round-trip representation), not fixed precision.
    pub fn convert(&self, km: f64, unit: Unit) -> ConvertResult<String> {
        for handler in &self.handlers {
            if let Some(value) = handler.handle(km, unit) {
                return Ok(format!("{value}"));
            }
        }
        // End of chain, no handler claimed the tag.
        Err(ConvertError::UnsupportedUnit {
            unit: unit.to_string(),
        })
    }

    /// Invariant check: every supported unit has exactly one handler.
    fn has_one_handler_per_unit(&self) -> bool {
        Unit::ALL.iter().all(|unit| {
            self.handlers.iter().filter(|h| h.unit == *unit).count() == 1
        })
    }
}

impl Default for ConverterChain {
    fn default() -> Self {
        Self::new()
    }
}
