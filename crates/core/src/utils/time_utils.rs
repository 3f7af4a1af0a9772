use std::time::Duration;

use chrono::{DateTime, Months, NaiveDate, Utc};

/// Returns the instant `months` calendar months before `end`.
///
/// Falls back to `end` itself when the subtraction leaves chrono's range.
pub fn months_before(end: DateTime<Utc>, months: u32) -> DateTime<Utc> {
    end.checked_sub_months(Months::new(months)).unwrap_or(end)
}

/// Parses a stored calendar date.
///
/// Accepts plain ISO dates as well as RFC 3339 timestamps, in which case the
/// UTC date part is kept. Anything else yields `None`.
pub fn parse_stored_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|dt| dt.with_timezone(&Utc).date_naive())
}

/// Whole milliseconds in `duration`, saturating at `u64::MAX`.
pub fn duration_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_months_before() {
        let end = Utc.with_ymd_and_hms(2024, 8, 31, 12, 0, 0).unwrap();
        let start = months_before(end, 6);
        assert_eq!(start.date_naive(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_parse_stored_date() {
        assert_eq!(
            parse_stored_date("2023-03-15"),
            NaiveDate::from_ymd_opt(2023, 3, 15)
        );
        assert_eq!(
            parse_stored_date("2023-03-15T10:00:00Z"),
            NaiveDate::from_ymd_opt(2023, 3, 15)
        );
        assert_eq!(parse_stored_date(""), None);
        assert_eq!(parse_stored_date("15/03/2023"), None);
    }

    #[test]
    fn test_duration_millis_saturates() {
        assert_eq!(duration_millis(Duration::from_millis(1500)), 1500);
        assert_eq!(duration_millis(Duration::MAX), u64::MAX);
    }
}
