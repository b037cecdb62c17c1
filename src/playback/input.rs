// Raw slider value parsing.
use crate::error::{PlayerError, Result};

/// Parse a range input's string value into `[min, max]`.
///
/// Unparseable and NaN input is rejected so it never reaches the host.
/// Finite values outside the range are clamped to the nearest bound.
pub fn parse_control_value(control: &'static str, raw: &str, min: f64, max: f64) -> Result<f64> {
    let value = raw
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| !v.is_nan())
        .ok_or_else(|| PlayerError::InvalidInput {
            control,
            raw: raw.to_string(),
        })?;
    Ok(value.clamp(min, max.max(min)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_values_in_range() {
        assert_eq!(parse_control_value("seek", "12.5", 0.0, 200.0).unwrap(), 12.5);
        assert_eq!(parse_control_value("volume", " 0.3 ", 0.0, 1.0).unwrap(), 0.3);
    }

    #[test]
    fn clamps_out_of_range_values() {
        assert_eq!(parse_control_value("volume", "1.7", 0.0, 1.0).unwrap(), 1.0);
        assert_eq!(parse_control_value("seek", "-4", 0.0, 10.0).unwrap(), 0.0);
        assert_eq!(parse_control_value("seek", "inf", 0.0, 10.0).unwrap(), 10.0);
    }

    #[test]
    fn degenerate_range_pins_to_min() {
        assert_eq!(parse_control_value("seek", "30", 0.0, 0.0).unwrap(), 0.0);
    }

    #[test]
    fn rejects_unparseable_and_nan() {
        for raw in ["", "abc", "NaN", "1.2.3"] {
            let err = parse_control_value("seek", raw, 0.0, 1.0).unwrap_err();
            assert!(matches!(err, PlayerError::InvalidInput { control: "seek", .. }));
        }
    }
}
