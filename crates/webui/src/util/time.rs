use chrono::{DateTime, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;

/// Human-readable distance between two instants, e.g. "3 hours ago".
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = now.signed_duration_since(then).num_seconds();
    if seconds < 0 {
        return "in the future".to_string();
    }
    let (amount, unit) = if seconds < MINUTE {
        return "just now".to_string();
    } else if seconds < HOUR {
        (seconds / MINUTE, "min")
    } else if seconds < DAY {
        (seconds / HOUR, "hour")
    } else if seconds < MONTH {
        (seconds / DAY, "day")
    } else if seconds < YEAR {
        (seconds / MONTH, "month")
    } else {
        (seconds / YEAR, "year")
    };
    let plural = if amount == 1 { "" } else { "s" };
    format!("{amount} {unit}{plural} ago")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-08-29T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn buckets() {
        let now = now();
        let at = |delta: TimeDelta| relative_time(now - delta, now);
        assert_eq!(at(TimeDelta::seconds(5)), "just now");
        assert_eq!(at(TimeDelta::minutes(1)), "1 min ago");
        assert_eq!(at(TimeDelta::minutes(45)), "45 mins ago");
        assert_eq!(at(TimeDelta::hours(3)), "3 hours ago");
        assert_eq!(at(TimeDelta::days(1)), "1 day ago");
        assert_eq!(at(TimeDelta::days(90)), "3 months ago");
        assert_eq!(at(TimeDelta::days(800)), "2 years ago");
    }

    #[test]
    fn future_timestamps_do_not_underflow() {
        let now = now();
        assert_eq!(
            relative_time(now + TimeDelta::minutes(5), now),
            "in the future"
        );
    }
}
