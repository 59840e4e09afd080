//! Lengde — kilometre length conversion with a display-formatting pipeline.
//!
//! This crate is the conversion back end for a GUI front end. It turns a
//! kilometre distance (as entered in a text field) and a unit tag into a
//! display string, in two composed steps:
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            Converter (facade)           │
//! │   parse distance, parse unit, dispatch  │
//! └──────────────────┬──────────────────────┘
//!                    │ dispatches to
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          ConverterChain (chain)         │
//! │   Mile → Yard → Foot, first match wins  │
//! └──────────────────┬──────────────────────┘
//!                    │ numeric string
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Formatting stages (stack)        │
//! │  round 2dp → scientific → unit suffix   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! Two fixed pipeline variants exist: [`Converter::bare`] (chain only,
//! raw numeric string) and [`Converter::display`] (full formatting
//! stack). They are separate constructors, not a runtime switch.
//!
//! ## Usage
//!
//! ```rust
//! use lengde::prelude::*;
//!
//! let converter = Converter::display();
//! assert_eq!(converter.convert("1", "Mile").unwrap(), "0.62 Miles");
//!
//! let bare = Converter::bare();
//! assert_eq!(bare.convert("1", "Mile").unwrap(), "0.621371");
//! ```
//!
//! Conversion is a pure function of its two string inputs; the pipeline
//! topology is built once and immutable afterwards. The crate emits
//! `tracing` events but never installs a subscriber.

// Pure domain layer: units, factors, distance parsing.
pub mod domain;

// Orchestration layer: chain dispatch, formatting stages, facade.
pub mod pipeline;

// Error types.
pub mod error;

// Public API - what the embedding front end should use.
pub mod prelude {
    pub use crate::domain::Unit;
    pub use crate::error::{ConvertError, ConvertResult};
    pub use crate::pipeline::Converter;
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
