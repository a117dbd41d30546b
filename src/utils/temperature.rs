//! Temperature conversion between Celsius, Fahrenheit and Kelvin.

use crate::error::{Error, Result};

const ACCEPTED_UNITS: &[&str] = &["C", "F", "K"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

fn parse_unit(field: &str, code: &str) -> Result<Unit> {
    match code {
        "C" => Ok(Unit::Celsius),
        "F" => Ok(Unit::Fahrenheit),
        "K" => Ok(Unit::Kelvin),
        other => Err(Error::validation_invalid_argument(
            field,
            format!("Unrecognized temperature unit '{}'", other),
            Some(other.to_string()),
            Some(ACCEPTED_UNITS.iter().map(|u| u.to_string()).collect()),
        )
        .with_hint("Valid units are C, F and K")),
    }
}

/// Convert a temperature between the unit codes `C`, `F` and `K`.
///
/// Conversion goes through Celsius using the standard affine relations.
/// Unit codes are case-sensitive single letters; anything else is outside
/// the domain.
pub fn convert_temperature(value: f64, from_unit: &str, to_unit: &str) -> Result<f64> {
    let from = parse_unit("from_unit", from_unit)?;
    let to = parse_unit("to_unit", to_unit)?;

    let celsius = match from {
        Unit::Celsius => value,
        Unit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
        Unit::Kelvin => value - 273.15,
    };

    Ok(match to {
        Unit::Celsius => celsius,
        Unit::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
        Unit::Kelvin => celsius + 273.15,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, "C", "F", 32.0)]
    #[case(100.0, "C", "F", 212.0)]
    #[case(-40.0, "C", "F", -40.0)]
    #[case(32.0, "F", "C", 0.0)]
    #[case(212.0, "F", "C", 100.0)]
    #[case(-40.0, "F", "C", -40.0)]
    #[case(0.0, "C", "K", 273.15)]
    #[case(100.0, "C", "K", 373.15)]
    #[case(273.15, "K", "C", 0.0)]
    #[case(0.0, "K", "C", -273.15)]
    #[case(32.0, "F", "K", 273.15)]
    #[case(373.15, "K", "F", 212.0)]
    fn converts_between_units(
        #[case] value: f64,
        #[case] from: &str,
        #[case] to: &str,
        #[case] expected: f64,
    ) {
        let converted = convert_temperature(value, from, to).unwrap();
        assert!(
            (converted - expected).abs() < 1e-9,
            "{} {} -> {} gave {}",
            value,
            from,
            to,
            converted
        );
    }

    #[test]
    fn same_unit_conversion_is_identity() {
        assert_eq!(convert_temperature(55.5, "C", "C").unwrap(), 55.5);
    }

    #[test]
    fn round_trip_recovers_original_within_tolerance() {
        let fahrenheit = convert_temperature(23.4, "C", "F").unwrap();
        let celsius = convert_temperature(fahrenheit, "F", "C").unwrap();
        assert!((celsius - 23.4).abs() < 1e-9);
    }

    #[test]
    fn rejects_unknown_unit_codes() {
        assert!(convert_temperature(100.0, "C", "X").is_err());
        assert!(convert_temperature(100.0, "X", "F").is_err());

        let err = convert_temperature(100.0, "X", "Y").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationInvalidArgument);
    }

    #[test]
    fn lowercase_unit_codes_are_rejected() {
        assert!(convert_temperature(100.0, "c", "f").is_err());
    }
}
