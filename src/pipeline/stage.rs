//! Display-formatting stages.
//!
//! Each stage rewrites the numeric string produced by the stage beneath
//! it (ultimately the converter chain). The stack order is fixed —
//! round → scientific notation → unit suffix — and enforced by
//! [`super::Converter`]'s constructors; stages are never assembled by
//! callers.
//!
//! All three rewrites are *textual*. Rounding truncates rather than
//! rounding to nearest, and the scientific rewrite manipulates digits
//! directly instead of reformatting through a float.

use crate::domain::Unit;

/// A single formatting step applied to the conversion result.
///
/// Stages receive the requested unit so unit-dependent rewrites (the
/// suffix) can act on it; numeric stages ignore it.
#[cfg_attr(test, mockall::automock)]
pub trait Stage: Send + Sync {
    fn apply(&self, text: String, unit: Unit) -> String;
}

// ── Round to two decimals ─────────────────────────────────────────────────────

/// Pins the fractional part to exactly two digits.
pub struct RoundTwoDecimals;

impl Stage for RoundTwoDecimals {
    fn apply(&self, text: String, _unit: Unit) -> String {
        round_to_two_decimals(&text)
    }
}

/// Textually fix a decimal string to two fractional digits.
///
/// No decimal point → append `".00"`. Fewer than two fractional digits →
/// pad with zeros. More → truncate. `"5.129"` becomes `"5.12"`, not
/// `"5.13"`.
pub fn round_to_two_decimals(text: &str) -> String {
    match text.find('.') {
        None => format!("{text}.00"),
        Some(point) => {
            let fractional_digits = text.len() - point - 1;
            if fractional_digits < 2 {
                let mut out = text.to_string();
                for _ in 0..(2 - fractional_digits) {
                    out.push('0');
                }
                out
            } else {
                text[..point + 3].to_string()
            }
        }
    }
}

// ── Scientific notation ───────────────────────────────────────────────────────

/// Rewrites a two-decimal string into mantissa-exponent form.
pub struct ScientificNotation;

impl Stage for ScientificNotation {
    fn apply(&self, text: String, _unit: Unit) -> String {
        scientific_notation(&text)
    }
}

/// Rewrite `"123.45"` as `"1.2345e2"`.
///
/// The exponent is the length of the integer part minus one; the mantissa
/// keeps every digit. An exponent of zero is omitted, so `"5.00"` and
/// sub-one values like `"0.62"` pass through unchanged (the integer part
/// `"0"` yields no negative exponent — that matches the long-standing
/// behaviour of this pipeline, quirky as it reads).
///
/// Precondition: `text` contains a decimal point. The rounding stage
/// always produces one.
pub fn scientific_notation(text: &str) -> String {
    debug_assert!(text.contains('.'), "rounding stage guarantees a decimal point");
    let (integer, fraction) = text.split_once('.').unwrap_or((text, ""));
    let exponent = integer.len() - 1;

    let mut out = String::with_capacity(text.len() + 3);
    out.push_str(&integer[..1]);
    out.push('.');
    out.push_str(&integer[1..]);
    out.push_str(fraction);
    if exponent > 0 {
        out.push('e');
        out.push_str(&exponent.to_string());
    }
    out
}

// ── Unit suffix ───────────────────────────────────────────────────────────────

/// Appends the human-readable unit name (`" Miles"`, `" Yards"`,
/// `" Feet"`), independent of the numeric rewrites before it.
pub struct UnitSuffix;

impl Stage for UnitSuffix {
    fn apply(&self, text: String, unit: Unit) -> String {
        format!("{text} {}", unit.suffix())
    }
}
