//! Pure domain layer: the unit vocabulary and distance parsing.
//!
//! # Domain purity
//!
//! This module must not import `tracing`. Observability is the
//! responsibility of the pipeline layer, not the domain.

mod distance;
mod unit;

pub use distance::parse_km;
pub use unit::Unit;
