//! Format - Formatting Utilities

use chrono::{DateTime, Local, Utc};

/// Format a UTC datetime for display
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    let local: DateTime<Local> = dt.with_timezone(&Local);
    local.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Relative time such as "3 minutes ago" or "in 2 days"
pub fn format_ago(dt: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(*dt);
    let future = delta.num_seconds() < 0;
    let seconds = delta.num_seconds().unsigned_abs();

    let (amount, unit) = match seconds {
        0..=44 => return "a few seconds ago".to_string(),
        45..=3_599 => (seconds.div_ceil(60).max(1), "minute"),
        3_600..=86_399 => (seconds / 3_600, "hour"),
        86_400..=2_591_999 => (seconds / 86_400, "day"),
        2_592_000..=31_535_999 => (seconds / 2_592_000, "month"),
        _ => (seconds / 31_536_000, "year"),
    };
    let plural = if amount == 1 { "" } else { "s" };
    if future {
        format!("in {amount} {unit}{plural}")
    } else {
        format!("{amount} {unit}{plural} ago")
    }
}

/// Truncate a string to max characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{head}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_format_ago() {
        let now = Utc::now();
        assert_eq!(format_ago(&now, &now), "a few seconds ago");
        assert_eq!(format_ago(&(now - Duration::minutes(1)), &now), "1 minute ago");
        assert_eq!(format_ago(&(now - Duration::minutes(5)), &now), "5 minutes ago");
        assert_eq!(format_ago(&(now - Duration::hours(3)), &now), "3 hours ago");
        assert_eq!(format_ago(&(now - Duration::days(2)), &now), "2 days ago");
        assert_eq!(format_ago(&(now - Duration::days(400)), &now), "1 year ago");
        assert_eq!(format_ago(&(now + Duration::days(2)), &now), "in 2 days");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a-long-login-name", 8), "a-lon...");
        assert_eq!(truncate("abcdef", 2), "ab");
    }
}
