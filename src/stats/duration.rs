//! Human-readable trip durations.
//!
//! `65.0` becomes `01 minutes 05 seconds`; units larger than the value are omitted.

use crate::{BikeshareError, Result};

/// Seconds per time unit.
const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 3600;
const SECONDS_PER_DAY: u64 = 86400;

/// Format a duration in seconds as days, hours, minutes and seconds.
///
/// Fractions of a second are truncated. Each component is zero-padded to two
/// digits; days are not capped.
///
/// # Errors
/// Returns `InvalidDuration` if `seconds` is negative or not a number.
///
/// # Examples
/// ```ignore
/// assert_eq!(format_duration(3661.0).unwrap(), "01 hours 01 minutes 01 seconds");
/// ```
pub fn format_duration(seconds: f64) -> Result<String> {
    if seconds.is_nan() || seconds < 0.0 {
        return Err(BikeshareError::InvalidDuration { seconds });
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total = seconds.floor() as u64;

    let days = total / SECONDS_PER_DAY;
    let rest = total % SECONDS_PER_DAY;
    let hours = rest / SECONDS_PER_HOUR;
    let rest = rest % SECONDS_PER_HOUR;
    let minutes = rest / SECONDS_PER_MINUTE;
    let secs = rest % SECONDS_PER_MINUTE;

    let formatted = if days > 0 {
        format!("{days:02} days {hours:02} hours {minutes:02} minutes {secs:02} seconds")
    } else if hours > 0 {
        format!("{hours:02} hours {minutes:02} minutes {secs:02} seconds")
    } else if minutes > 0 {
        format!("{minutes:02} minutes {secs:02} seconds")
    } else {
        format!("{secs:02} seconds")
    };
    Ok(formatted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(format_duration(0.0).unwrap(), "00 seconds");
    }

    #[test]
    fn test_seconds_only() {
        assert_eq!(format_duration(7.0).unwrap(), "07 seconds");
        assert_eq!(format_duration(59.0).unwrap(), "59 seconds");
    }

    #[test]
    fn test_minutes() {
        assert_eq!(format_duration(65.0).unwrap(), "01 minutes 05 seconds");
        assert_eq!(format_duration(3300.0).unwrap(), "55 minutes 00 seconds");
    }

    #[test]
    fn test_hours() {
        assert_eq!(
            format_duration(3661.0).unwrap(),
            "01 hours 01 minutes 01 seconds"
        );
        assert_eq!(
            format_duration(3600.0).unwrap(),
            "01 hours 00 minutes 00 seconds"
        );
    }

    #[test]
    fn test_days() {
        assert_eq!(
            format_duration(90061.0).unwrap(),
            "01 days 01 hours 01 minutes 01 seconds"
        );
        assert_eq!(
            format_duration(86400.0).unwrap(),
            "01 days 00 hours 00 minutes 00 seconds"
        );
    }

    #[test]
    fn test_days_are_not_capped() {
        assert_eq!(
            format_duration(150.0 * 86400.0 + 5.0).unwrap(),
            "150 days 00 hours 00 minutes 05 seconds"
        );
    }

    #[test]
    fn test_fraction_is_truncated() {
        assert_eq!(format_duration(330.9).unwrap(), "05 minutes 30 seconds");
        assert_eq!(format_duration(0.999).unwrap(), "00 seconds");
    }

    #[test]
    fn test_negative_is_rejected() {
        for value in [-1.0, -0.5, -86400.0, f64::NEG_INFINITY] {
            let err = format_duration(value).unwrap_err();
            assert!(matches!(err, BikeshareError::InvalidDuration { .. }));
        }
    }

    #[test]
    fn test_nan_is_rejected() {
        assert!(format_duration(f64::NAN).is_err());
    }
}
