//! Date/time formatting, parsing, and day ranges.
//!
//! Formats use the `time` crate's description syntax, e.g.
//! `[year]-[month]-[day] [hour]:[minute]:[second]`.

use crate::error::{Error, Result};
use time::format_description;
use time::{Duration, PrimitiveDateTime};
use tracing::error;

/// Format used when the caller does not supply one.
pub const DEFAULT_FORMAT: &str = "[year]-[month]-[day] [hour]:[minute]:[second]";

/// Render `dt` using `format`.
///
/// # Errors
/// Returns [`Error::DateTime`] if `format` is not a valid description or
/// names a component `dt` lacks.
pub fn format_datetime(dt: PrimitiveDateTime, format: &str) -> Result<String> {
    let items =
        format_description::parse(format).map_err(|err| Error::DateTime(err.to_string()))?;
    dt.format(&items).map_err(|err| Error::DateTime(err.to_string()))
}

/// Parse `input` with `format`; logs and returns `None` on failure.
#[must_use]
pub fn parse_datetime(input: &str, format: &str) -> Option<PrimitiveDateTime> {
    match try_parse_datetime(input, format) {
        Ok(dt) => Some(dt),
        Err(err) => {
            error!("failed to parse date/time {input:?}: {err}");
            None
        }
    }
}

/// Parse `input` with `format`.
///
/// # Errors
/// Returns [`Error::DateTime`] if `format` is invalid or `input` does not match it.
pub fn try_parse_datetime(input: &str, format: &str) -> Result<PrimitiveDateTime> {
    let items =
        format_description::parse(format).map_err(|err| Error::DateTime(err.to_string()))?;
    PrimitiveDateTime::parse(input, &items).map_err(|err| Error::DateTime(err.to_string()))
}

/// Every instant from `start` to `end` inclusive, one day apart.
///
/// Empty when `start > end`.
#[must_use]
pub fn date_range(start: PrimitiveDateTime, end: PrimitiveDateTime) -> Vec<PrimitiveDateTime> {
    let mut out = Vec::new();
    let mut current = start;
    while current <= end {
        out.push(current);
        match current.checked_add(Duration::DAY) {
            Some(next) => current = next,
            None => break,
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn default_format_round_trips_a_known_value() -> anyhow::Result<()> {
        let dt = datetime!(2024-03-09 07:05:01);
        let text = format_datetime(dt, DEFAULT_FORMAT)?;
        assert_eq!(text, "2024-03-09 07:05:01");
        assert_eq!(parse_datetime(&text, DEFAULT_FORMAT), Some(dt));
        Ok(())
    }

    #[test]
    fn bad_input_is_none() {
        assert_eq!(parse_datetime("2024-13-40 00:00:00", DEFAULT_FORMAT), None);
        assert_eq!(parse_datetime("yesterday", DEFAULT_FORMAT), None);
        assert!(matches!(
            try_parse_datetime("2024-01-01", "[year"),
            Err(Error::DateTime(_))
        ));
    }

    #[test]
    fn range_is_inclusive_daily() {
        let start = datetime!(2024-02-27 12:00:00);
        let end = datetime!(2024-03-01 12:00:00);
        let days = date_range(start, end);
        assert_eq!(days.len(), 4);
        assert_eq!(days.last().copied(), Some(end));
        assert!(date_range(end, start).is_empty());
        assert_eq!(date_range(start, start), vec![start]);
    }
}
