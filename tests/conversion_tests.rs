//! End-to-end tests over the public API.

use lengde::prelude::*;
use proptest::prelude::*;

#[test]
fn bare_variant_converts_each_unit() {
    let converter = Converter::bare();
    assert_eq!(converter.convert("1", "Mile").unwrap(), "0.621371");
    assert_eq!(converter.convert("1", "Yard").unwrap(), "1093.6133");
    assert_eq!(converter.convert("1", "Foot").unwrap(), "3280.8399");
}

#[test]
fn bare_variant_accepts_padded_and_negative_input() {
    let converter = Converter::bare();
    assert_eq!(converter.convert(" 2 ", "Mile").unwrap(), "1.242742");
    assert_eq!(converter.convert("-1", "Mile").unwrap(), "-0.621371");
}

#[test]
fn display_variant_produces_formatted_strings() {
    let converter = Converter::display();
    assert_eq!(converter.convert("1", "Mile").unwrap(), "0.62 Miles");
    assert_eq!(converter.convert("1", "Yard").unwrap(), "1.09361e3 Yards");
    assert_eq!(converter.convert("1", "Foot").unwrap(), "3.28083e3 Feet");
}

#[test]
fn display_variant_keeps_sub_one_results_plain() {
    // 0.5 km = 0.3106855 miles; the scientific stage leaves magnitudes
    // below one untouched instead of emitting a negative exponent.
    let converter = Converter::display();
    assert_eq!(converter.convert("0.5", "Mile").unwrap(), "0.31 Miles");
}

#[test]
fn unsupported_unit_is_reported_with_its_tag() {
    let converter = Converter::display();
    for tag in ["Kilometer", "mile", ""] {
        assert_eq!(
            converter.convert("1", tag).unwrap_err(),
            ConvertError::UnsupportedUnit { unit: tag.into() }
        );
    }
}

#[test]
fn malformed_distance_is_reported_with_its_input() {
    let converter = Converter::bare();
    assert_eq!(
        converter.convert("abc", "Mile").unwrap_err(),
        ConvertError::InvalidNumber { input: "abc".into() }
    );
}

#[test]
fn failed_conversions_return_no_partial_output() {
    let converter = Converter::display();
    assert!(converter.convert("", "Mile").is_err());
    assert!(converter.convert("1.2.3", "Yard").is_err());
}

proptest! {
    /// The bare chain is exactly `distance * factor` under default
    /// `f64` formatting, for every unit.
    #[test]
    fn bare_chain_matches_factor_multiplication(
        km in 0.0f64..1_000_000.0,
        unit in prop::sample::select(Unit::ALL.to_vec()),
    ) {
        let converter = Converter::bare();
        let expected = format!("{}", km * unit.factor());
        prop_assert_eq!(converter.convert(&km.to_string(), unit.as_str()).unwrap(), expected);
    }

    /// The display variant always ends with the requested unit's name,
    /// whatever the numeric rewrites did before it.
    #[test]
    fn display_output_always_carries_the_unit_suffix(
        km in -1_000.0f64..1_000.0,
        unit in prop::sample::select(Unit::ALL.to_vec()),
    ) {
        let out = Converter::display().convert(&km.to_string(), unit.as_str()).unwrap();
        prop_assert!(out.ends_with(unit.suffix()));
    }
}
