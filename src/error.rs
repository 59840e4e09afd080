//! Unified error handling.
//!
//! Both error kinds are deterministic input-validation failures: they
//! surface synchronously to the caller, there are no retries and no
//! partial results. A failed conversion returns no output.

use thiserror::Error;

/// Errors produced by a conversion call.
///
/// All errors are:
/// - Cloneable (callers may re-report them)
/// - Comparable (for test assertions)
/// - Self-describing (they carry the offending input)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The distance string is not parseable as a decimal number.
    #[error("invalid distance '{input}': not a decimal number")]
    InvalidNumber { input: String },

    /// The unit tag matches no handler in the chain.
    #[error("unsupported unit '{unit}'")]
    UnsupportedUnit { unit: String },
}

/// Convenient result type alias.
pub type ConvertResult<T> = Result<T, ConvertError>;
