//! Row-to-entity parsing helpers.
//!
//! Timestamps are written as RFC 3339 with nanosecond precision and a `Z`
//! suffix so that lexical order in `ORDER BY created_at` matches time order.
//! Reads also accept `SQLite`'s `datetime('now')` format for hand-edited rows.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::DatabaseError;

/// Format a timestamp for storage.
#[must_use]
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Read an INTEGER column used as a boolean flag.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_flag(row: &libsql::Row, idx: i32) -> Result<bool, DatabaseError> {
    Ok(row.get::<i64>(idx)? != 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    #[test]
    fn format_is_fixed_width_and_sortable() {
        let early = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
        let late = early + chrono::Duration::nanoseconds(1);
        let (a, b) = (format_datetime(&early), format_datetime(&late));
        assert_eq!(a.len(), b.len());
        assert!(a < b);
        assert!(a.ends_with('Z'));
    }

    #[test]
    fn parse_accepts_both_formats() {
        let expected = Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap();
        assert_eq!(parse_datetime("2026-03-01T09:30:00Z").unwrap(), expected);
        assert_eq!(parse_datetime("2026-03-01 09:30:00").unwrap(), expected);
        assert_eq!(parse_datetime(&format_datetime(&expected)).unwrap(), expected);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            parse_datetime("yesterday"),
            Err(DatabaseError::Query(_))
        ));
    }
}
