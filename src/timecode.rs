//! Elapsed-time string handling.
//!
//! Users give times as `HH:MM:SS` or `MM:SS`; backends want either plain
//! second counts or zero-padded clock strings. Both conversions live here.

use crate::error::TimecodeError;

/// Convert a `HH:MM:SS` or `MM:SS` string to a whole number of seconds.
///
/// Components may carry fractional seconds (`00:01:30.5`); the total is
/// truncated to whole seconds. Exactly two or three colon-separated numeric
/// components are accepted, nothing else.
pub fn parse_timecode(value: &str) -> Result<u64, TimecodeError> {
    let parts: Vec<&str> = value.split(':').collect();

    let components: Vec<f64> = parts
        .iter()
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .map_err(|_| TimecodeError::InvalidFormat {
            value: value.to_string(),
        })?;

    if components.iter().any(|c| !c.is_finite()) {
        return Err(TimecodeError::InvalidFormat {
            value: value.to_string(),
        });
    }
    if components.iter().any(|c| *c < 0.0) {
        return Err(TimecodeError::NegativeComponent {
            value: value.to_string(),
        });
    }

    let total = match components.as_slice() {
        [m, s] => m * 60.0 + s,
        [h, m, s] => h * 3600.0 + m * 60.0 + s,
        _ => {
            return Err(TimecodeError::InvalidFormat {
                value: value.to_string(),
            })
        }
    };

    Ok(total as u64)
}

/// Render a second count as a zero-padded `HH:MM:SS` clock string.
pub fn format_timecode(total_secs: u64) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        total_secs / 3600,
        (total_secs % 3600) / 60,
        total_secs % 60
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_three_component_timecodes() {
        assert_eq!(parse_timecode("01:02:03").unwrap(), 3723);
        assert_eq!(parse_timecode("00:00:00").unwrap(), 0);
        assert_eq!(parse_timecode("10:00:01").unwrap(), 36001);
    }

    #[test]
    fn parses_two_component_timecodes() {
        assert_eq!(parse_timecode("02:30").unwrap(), 150);
        assert_eq!(parse_timecode("00:45").unwrap(), 45);
    }

    #[test]
    fn truncates_fractional_seconds() {
        assert_eq!(parse_timecode("00:00:10.9").unwrap(), 10);
        assert_eq!(parse_timecode("01:30.5").unwrap(), 90);
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(matches!(
            parse_timecode("abc"),
            Err(TimecodeError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_timecode("1:2:3:4"),
            Err(TimecodeError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_timecode("90"),
            Err(TimecodeError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_timecode(""),
            Err(TimecodeError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_timecode("1::3"),
            Err(TimecodeError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn rejects_negative_components() {
        assert!(matches!(
            parse_timecode("-1:30"),
            Err(TimecodeError::NegativeComponent { .. })
        ));
        assert!(matches!(
            parse_timecode("00:-05:00"),
            Err(TimecodeError::NegativeComponent { .. })
        ));
    }

    #[test]
    fn formats_round_trip() {
        assert_eq!(format_timecode(3723), "01:02:03");
        assert_eq!(format_timecode(150), "00:02:30");
        assert_eq!(format_timecode(0), "00:00:00");
        assert_eq!(parse_timecode(&format_timecode(86399)).unwrap(), 86399);
    }
}
