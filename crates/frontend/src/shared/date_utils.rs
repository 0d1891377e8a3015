//! Consistent timestamp formatting for table columns.

use chrono::{DateTime, Utc};

/// "14.03.2026 09:41", compact enough for a table cell.
pub fn format_timestamp(value: DateTime<Utc>) -> String {
    value.format("%d.%m.%Y %H:%M").to_string()
}

/// Dash when the timestamp was never set (e.g. last login).
pub fn format_optional_timestamp(value: Option<DateTime<Utc>>) -> String {
    value.map(format_timestamp).unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_day_first() {
        let value = Utc.with_ymd_and_hms(2026, 3, 14, 9, 41, 7).unwrap();
        assert_eq!(format_timestamp(value), "14.03.2026 09:41");
    }

    #[test]
    fn missing_timestamp_is_a_dash() {
        assert_eq!(format_optional_timestamp(None), "-");
    }
}
