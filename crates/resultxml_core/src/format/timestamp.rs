//! Timestamp and duration rendering.

use std::time::Duration;

use chrono::{NaiveDateTime, Timelike};

/// ISO 8601 with microseconds, fraction left out when it is zero.
///
/// `2024-01-02T03:04:05.123` renders as `2024-01-02T03:04:05.123000`.
pub fn iso(ts: NaiveDateTime) -> String {
    if ts.nanosecond() / 1_000 == 0 {
        ts.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        ts.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}

/// Compact millisecond timestamp used by schema version 4, e.g.
/// `20240102 03:04:05.123`.
pub fn compact(ts: NaiveDateTime) -> String {
    ts.format("%Y%m%d %H:%M:%S%.3f").to_string()
}

/// Seconds with six decimals, rounded to the nearest microsecond.
pub fn seconds(elapsed: Duration) -> String {
    let micros = (elapsed.as_nanos() + 500) / 1_000;
    format!("{}.{:06}", micros / 1_000_000, micros % 1_000_000)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rstest::rstest;

    fn ts(h: u32, m: u32, s: u32, micro: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_micro_opt(h, m, s, micro)
            .unwrap()
    }

    #[rstest]
    #[case::milliseconds(ts(3, 4, 5, 123_000), "2024-01-02T03:04:05.123000")]
    #[case::microseconds(ts(3, 4, 5, 1), "2024-01-02T03:04:05.000001")]
    #[case::whole_second(ts(23, 59, 59, 0), "2024-01-02T23:59:59")]
    fn test_iso(#[case] input: NaiveDateTime, #[case] expected: &str) {
        assert_eq!(iso(input), expected);
    }

    #[rstest]
    #[case::milliseconds(ts(3, 4, 5, 123_000), "20240102 03:04:05.123")]
    #[case::truncates_micros(ts(3, 4, 5, 123_999), "20240102 03:04:05.123")]
    #[case::whole_second(ts(0, 0, 0, 0), "20240102 00:00:00.000")]
    fn test_compact(#[case] input: NaiveDateTime, #[case] expected: &str) {
        assert_eq!(compact(input), expected);
    }

    #[rstest]
    #[case::zero(Duration::ZERO, "0.000000")]
    #[case::millis(Duration::from_millis(1_234), "1.234000")]
    #[case::rounds_nanos(Duration::from_nanos(999_999_600), "1.000000")]
    #[case::float_seconds(Duration::from_secs_f64(0.123), "0.123000")]
    fn test_seconds(#[case] input: Duration, #[case] expected: &str) {
        assert_eq!(seconds(input), expected);
    }
}
