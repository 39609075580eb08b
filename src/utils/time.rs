//! Time utilities

use std::time::Duration;

use crate::constants::TIMING_DECIMALS;

/// Convert a duration to fractional milliseconds
pub fn duration_to_millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

/// Round a millisecond value to the precision timings are reported with
pub fn round_millis(ms: f64) -> f64 {
    let factor = 10f64.powi(TIMING_DECIMALS as i32);
    (ms * factor).round() / factor
}

/// Format a duration as a human-readable string
pub fn format_duration(duration: Duration) -> String {
    let ms = duration_to_millis(duration);

    if ms < 1000.0 {
        return format!("{:.3}ms", ms);
    }
    if ms < 60_000.0 {
        return format!("{:.2}s", ms / 1000.0);
    }

    let total_seconds = duration.as_secs();
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{}m {}s", minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_micros(1500)), "1.500ms");
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
        assert_eq!(format_duration(Duration::from_secs(65)), "1m 5s");
    }

    #[test]
    fn test_round_millis() {
        assert_eq!(round_millis(1.23456), 1.235);
        assert_eq!(round_millis(0.0004), 0.0);
        assert_eq!(round_millis(12.0), 12.0);
    }

    #[test]
    fn test_duration_to_millis() {
        assert_eq!(duration_to_millis(Duration::from_millis(1500)), 1500.0);
        assert_eq!(duration_to_millis(Duration::ZERO), 0.0);
    }
}
