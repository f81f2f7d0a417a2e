//! Boundary adapter: raw-text parsing and display formatting.
//!
//! A form-based caller hands over the text fields exactly as typed, together
//! with the selected unit labels, and receives either a display-ready string
//! or a [`ConversionError`] whose message it can show instead. Numbers are
//! rendered in scientific notation with five digits after the decimal point
//! and a signed two-digit exponent (`1.23457e+03`).

use log::warn;

use crate::convert::{compute_speed, convert_distance};
use crate::error::{ConversionError, ConversionResult};

/// Parses a raw text field into a number.
///
/// Surrounding whitespace is tolerated. Anything `f64` cannot parse is
/// [`ConversionError::InvalidInput`]; parseable non-finite spellings such as
/// `"inf"` are passed through, since the arithmetic downstream follows
/// IEEE-754 anyway.
pub fn parse_value(raw: &str) -> ConversionResult<f64> {
    raw.trim().parse::<f64>().map_err(|_| {
        warn!("rejected non-numeric input {raw:?}");
        ConversionError::InvalidInput(raw.to_string())
    })
}

/// Formats a number in scientific notation: five digits after the decimal
/// point, explicit exponent sign, at least two exponent digits.
///
/// ```rust
/// use astrodist::format_scientific;
///
/// assert_eq!(format_scientific(1234.56789), "1.23457e+03");
/// assert_eq!(format_scientific(0.0), "0.00000e+00");
/// assert_eq!(format_scientific(-0.0421), "-4.21000e-02");
/// ```
pub fn format_scientific(value: f64) -> String {
    let formatted = format!("{value:.5e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            format!("{mantissa}e{exponent:+03}")
        }
        // NaN and infinities carry no exponent.
        None => formatted,
    }
}

/// Converts a raw distance value between two units and renders the result.
///
/// The returned string reads `"<value> <from> = <result> <to>"`, with the
/// result in scientific notation.
///
/// # Errors
///
/// [`ConversionError::InvalidInput`] if `raw` is not a number,
/// [`ConversionError::UnknownUnit`] if either label is outside the distance
/// table.
///
/// ```rust
/// use astrodist::convert_distance_text;
///
/// let line = convert_distance_text("1.5", "kilometer", "meter").unwrap();
/// assert_eq!(line, "1.5 kilometer = 1.50000e+03 meter");
/// ```
pub fn convert_distance_text(raw: &str, from: &str, to: &str) -> ConversionResult<String> {
    let value = parse_value(raw)?;
    let converted = convert_distance(value, from, to)?;
    Ok(format!(
        "{value} {from} = {} {to}",
        format_scientific(converted)
    ))
}

/// Computes a speed from raw distance and time values and renders both
/// output figures, one string per unit (`m/s` first, `km/h` second).
///
/// # Errors
///
/// [`ConversionError::InvalidInput`] if either raw value is not a number,
/// [`ConversionError::UnknownUnit`] for labels outside the respective
/// tables, [`ConversionError::DivisionByZero`] when the time is zero.
///
/// ```rust
/// use astrodist::compute_speed_text;
///
/// let (mps, kmh) = compute_speed_text("100", "kilometer", "1", "hour").unwrap();
/// assert_eq!(mps, "2.77778e+01 m/s");
/// assert_eq!(kmh, "1.00000e+02 km/h");
/// ```
pub fn compute_speed_text(
    raw_distance: &str,
    distance_unit: &str,
    raw_time: &str,
    time_unit: &str,
) -> ConversionResult<(String, String)> {
    let distance = parse_value(raw_distance)?;
    let time = parse_value(raw_time)?;
    let speed = compute_speed(distance, distance_unit, time, time_unit)?;
    Ok((
        format!(
            "{} m/s",
            format_scientific(speed.meters_per_second.value())
        ),
        format!(
            "{} km/h",
            format_scientific(speed.kilometers_per_hour.value())
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_and_padded_input() {
        assert_eq!(parse_value("42.5").unwrap(), 42.5);
        assert_eq!(parse_value("  -1e3 ").unwrap(), -1000.0);
        assert_eq!(parse_value("0").unwrap(), 0.0);
    }

    #[test]
    fn parse_rejects_non_numeric_input() {
        for raw in ["", "abc", "1,5", "12 34", "--3"] {
            assert_eq!(
                parse_value(raw),
                Err(ConversionError::InvalidInput(raw.to_string()))
            );
        }
    }

    #[test]
    fn parse_accepts_non_finite_spellings() {
        assert!(parse_value("inf").unwrap().is_infinite());
        assert!(parse_value("NaN").unwrap().is_nan());
    }

    #[test]
    fn scientific_formatting() {
        assert_eq!(format_scientific(1234.56789), "1.23457e+03");
        assert_eq!(format_scientific(1.0), "1.00000e+00");
        assert_eq!(format_scientific(0.0), "0.00000e+00");
        assert_eq!(format_scientific(-0.0421), "-4.21000e-02");
        assert_eq!(format_scientific(9.461e15), "9.46100e+15");
        assert_eq!(format_scientific(1e-123), "1.00000e-123");
    }

    #[test]
    fn scientific_formatting_rounds_the_mantissa() {
        assert_eq!(format_scientific(27.77777777), "2.77778e+01");
    }

    #[test]
    fn convert_text_happy_path() {
        let line = convert_distance_text("2", "kilometer", "meter").unwrap();
        assert_eq!(line, "2 kilometer = 2.00000e+03 meter");
    }

    #[test]
    fn convert_text_astronomical() {
        let line = convert_distance_text("1", "astronomical unit", "kilometer").unwrap();
        assert_eq!(line, "1 astronomical unit = 1.49600e+08 kilometer");
    }

    #[test]
    fn convert_text_invalid_value() {
        assert_eq!(
            convert_distance_text("abc", "meter", "meter"),
            Err(ConversionError::InvalidInput("abc".to_string()))
        );
    }

    #[test]
    fn convert_text_unknown_unit() {
        assert_eq!(
            convert_distance_text("1", "furlong", "meter"),
            Err(ConversionError::UnknownUnit("furlong".to_string()))
        );
    }

    #[test]
    fn speed_text_happy_path() {
        let (mps, kmh) = compute_speed_text("100", "kilometer", "1", "hour").unwrap();
        assert_eq!(mps, "2.77778e+01 m/s");
        assert_eq!(kmh, "1.00000e+02 km/h");
    }

    #[test]
    fn speed_text_zero_time() {
        assert_eq!(
            compute_speed_text("10", "meter", "0", "second"),
            Err(ConversionError::DivisionByZero)
        );
    }

    #[test]
    fn speed_text_invalid_values() {
        assert_eq!(
            compute_speed_text("ten", "meter", "1", "second"),
            Err(ConversionError::InvalidInput("ten".to_string()))
        );
        assert_eq!(
            compute_speed_text("10", "meter", "one", "second"),
            Err(ConversionError::InvalidInput("one".to_string()))
        );
    }
}
