//! Distance-string parsing.

use crate::error::{ConvertError, ConvertResult};

/// Parse a kilometre distance from front-end text input.
///
/// Surrounding whitespace is tolerated (text fields), anything else must
/// be a valid decimal number. Negative distances are accepted; validating
/// physical plausibility is the front end's concern.
pub fn parse_km(input: &str) -> ConvertResult<f64> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|_| ConvertError::InvalidNumber {
            input: input.to_string(),
        })
}
