//! Human-facing formatting helpers used by feature enrichment.

use chrono::{DateTime, Utc};

/// Render a raw view counter compactly: `532`, `1.5K`, `3.4M`, `1.1B`.
#[must_use]
pub fn format_view_count(value: i64) -> String {
    #[allow(clippy::cast_precision_loss)]
    let v = value as f64;
    match value {
        1_000_000_000.. => format!("{:.1}B", v / 1_000_000_000.0),
        1_000_000.. => format!("{:.1}M", v / 1_000_000.0),
        1_000.. => format!("{:.1}K", v / 1_000.0),
        _ => value.to_string(),
    }
}

/// Render how long ago `then` was, relative to `now`.
///
/// Falls back to an absolute date once the distance exceeds a week.
#[must_use]
pub fn relative_time(now: DateTime<Utc>, then: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);
    if elapsed.num_minutes() < 1 {
        return "just now".to_owned();
    }
    if elapsed.num_hours() < 1 {
        return format!("{} minutes ago", elapsed.num_minutes());
    }
    if elapsed.num_days() < 1 {
        return format!("{} hours ago", elapsed.num_hours());
    }
    if elapsed.num_days() < 7 {
        return format!("{} days ago", elapsed.num_days());
    }
    then.format("%d %b %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    #[test]
    fn view_counts_scale_through_the_suffixes() {
        assert_eq!(format_view_count(0), "0");
        assert_eq!(format_view_count(999), "999");
        assert_eq!(format_view_count(1_500), "1.5K");
        assert_eq!(format_view_count(2_340_000), "2.3M");
        assert_eq!(format_view_count(1_100_000_000), "1.1B");
    }

    #[test]
    fn relative_time_buckets() {
        let now = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        assert_eq!(relative_time(now, now), "just now");
        assert_eq!(
            relative_time(now, now - TimeDelta::minutes(5)),
            "5 minutes ago"
        );
        assert_eq!(relative_time(now, now - TimeDelta::hours(3)), "3 hours ago");
        assert_eq!(relative_time(now, now - TimeDelta::days(2)), "2 days ago");
    }

    #[test]
    fn relative_time_falls_back_to_a_date_after_a_week() {
        let now = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let then = now - TimeDelta::days(30);
        assert_eq!(relative_time(now, then), then.format("%d %b %Y").to_string());
    }
}
