//! Human-readable relative timestamps ("3 hours ago").

use chrono::{DateTime, Utc};

/// Describe `at` relative to `now`.
///
/// Anything older than 30 days is shown as an absolute date instead.
/// Magnitudes are floored, and timestamps in the future read "just now".
pub fn relative_time(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let age = now.signed_duration_since(at);

    let days = age.num_days();
    if days > 30 {
        return at.format("on %Y-%m-%d").to_string();
    }
    if days >= 1 {
        return ago(days, "day");
    }

    let hours = age.num_hours();
    if hours >= 1 {
        return ago(hours, "hour");
    }

    let minutes = age.num_minutes();
    if minutes >= 1 {
        return ago(minutes, "minute");
    }

    let seconds = age.num_seconds();
    if seconds > 10 {
        return ago(seconds, "second");
    }

    "just now".to_string()
}

fn ago(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("{} {} ago", n, unit)
    } else {
        format!("{} {}s ago", n, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn at(offset: Duration) -> String {
        relative_time(now() - offset, now())
    }

    #[test]
    fn test_just_now() {
        assert_eq!(at(Duration::seconds(0)), "just now");
        assert_eq!(at(Duration::seconds(10)), "just now");
    }

    #[test]
    fn test_seconds() {
        assert_eq!(at(Duration::seconds(11)), "11 seconds ago");
        assert_eq!(at(Duration::seconds(45)), "45 seconds ago");
    }

    #[test]
    fn test_minutes_are_floored() {
        assert_eq!(at(Duration::seconds(60)), "1 minute ago");
        assert_eq!(at(Duration::seconds(119)), "1 minute ago");
        assert_eq!(at(Duration::minutes(59)), "59 minutes ago");
    }

    #[test]
    fn test_hours() {
        assert_eq!(at(Duration::hours(1)), "1 hour ago");
        assert_eq!(at(Duration::minutes(150)), "2 hours ago");
    }

    #[test]
    fn test_one_day_is_singular() {
        assert_eq!(at(Duration::days(1)), "1 day ago");
        assert_eq!(at(Duration::days(2)), "2 days ago");
    }

    #[test]
    fn test_thirty_days_is_still_relative() {
        assert_eq!(at(Duration::days(30)), "30 days ago");
    }

    #[test]
    fn test_older_than_a_month_shows_date() {
        assert_eq!(at(Duration::days(40)), "on 2024-05-06");
    }

    #[test]
    fn test_future_timestamp_reads_just_now() {
        assert_eq!(at(Duration::seconds(-300)), "just now");
    }
}
