use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d"];
const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"];

/// Parses a record date into a Unix timestamp in milliseconds.
///
/// Plain dates are read as UTC midnight. RFC 3339 timestamps keep their
/// offset; naive date-times are read as UTC.
pub fn parse_timestamp_ms(text: &str) -> Option<i64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.timestamp_millis());
    }

    for format in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc().timestamp_millis());
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return date
                .and_hms_opt(0, 0, 0)
                .map(|naive| naive.and_utc().timestamp_millis());
        }
    }

    None
}

/// Timestamp used for ordering: unparseable or missing dates are `0`.
pub fn timestamp_or_epoch(text: Option<&str>) -> i64 {
    text.and_then(parse_timestamp_ms).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_date_is_utc_midnight() {
        assert_eq!(parse_timestamp_ms("1970-01-02"), Some(86_400_000));
        assert_eq!(parse_timestamp_ms("2025/12/30"), parse_timestamp_ms("2025-12-30"));
    }

    #[test]
    fn test_datetime_forms() {
        assert_eq!(parse_timestamp_ms("1970-01-01T00:00:01Z"), Some(1_000));
        assert_eq!(parse_timestamp_ms("1970-01-01T01:00:00+01:00"), Some(0));
        assert_eq!(parse_timestamp_ms("1970-01-01 00:01:00"), Some(60_000));
    }

    #[test]
    fn test_unparseable_dates() {
        assert_eq!(parse_timestamp_ms(""), None);
        assert_eq!(parse_timestamp_ms("yesterday"), None);
        assert_eq!(parse_timestamp_ms("2025-13-01"), None);
        assert_eq!(timestamp_or_epoch(Some("soon")), 0);
        assert_eq!(timestamp_or_epoch(None), 0);
    }
}
