use chrono::{Duration, NaiveDate};
use std::fmt;

/// Accepted input formats, tried in order.
const INPUT_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// Format used in the `Date` column of the CSV export.
pub const EXPORT_DATE_FORMAT: &str = "%m/%d/%Y";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDateError {
    input: String,
}

impl fmt::Display for ParseDateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid date '{}' (expected YYYY-MM-DD or MM/DD/YYYY)",
            self.input
        )
    }
}

impl std::error::Error for ParseDateError {}

/// Parse a calendar date typed by a user.
pub fn parse_date(input: &str) -> Result<NaiveDate, ParseDateError> {
    let trimmed = input.trim();
    INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| ParseDateError {
            input: input.to_string(),
        })
}

pub fn format_export_date(date: NaiveDate) -> String {
    date.format(EXPORT_DATE_FORMAT).to_string()
}

/// Shift a date by whole days, `None` when the result leaves chrono's range.
pub fn offset(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    date.checked_add_signed(Duration::days(days))
}

/// The day after a work day.
pub fn recovery_date(work_date: NaiveDate) -> Option<NaiveDate> {
    offset(work_date, 1)
}

/// The day before a work day.
pub fn preparation_date(work_date: NaiveDate) -> Option<NaiveDate> {
    offset(work_date, -1)
}

/// Two days before a work day.
pub fn productive_date(work_date: NaiveDate) -> Option<NaiveDate> {
    offset(work_date, -2)
}

/// All dates in `[start, end]`, empty when `start > end`.
pub fn days_in_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut days = Vec::new();
    let mut current = start;
    while current <= end {
        days.push(current);
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }
    days
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn parses_both_input_formats() {
        assert_eq!(parse_date("2024-06-10").unwrap(), d(2024, 6, 10));
        assert_eq!(parse_date(" 06/10/2024 ").unwrap(), d(2024, 6, 10));
        assert!(parse_date("10.06.2024").is_err());
        assert!(parse_date("2024-02-30").is_err());
    }

    #[test]
    fn error_names_the_rejected_text() {
        let err = parse_date("june 10").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid date 'june 10' (expected YYYY-MM-DD or MM/DD/YYYY)"
        );
    }

    #[test]
    fn derived_dates_cross_month_boundaries() {
        let work = d(2024, 3, 1);
        assert_eq!(recovery_date(work), Some(d(2024, 3, 2)));
        assert_eq!(preparation_date(work), Some(d(2024, 2, 29)));
        assert_eq!(productive_date(work), Some(d(2024, 2, 28)));
    }

    #[test]
    fn offsets_at_calendar_edge_are_none() {
        assert_eq!(recovery_date(NaiveDate::MAX), None);
        assert_eq!(productive_date(NaiveDate::MIN), None);
    }

    #[test]
    fn export_format_is_month_first() {
        assert_eq!(format_export_date(d(2024, 6, 8)), "06/08/2024");
    }

    #[test]
    fn range_is_inclusive() {
        let days = days_in_range(d(2024, 12, 30), d(2025, 1, 2));
        assert_eq!(days.len(), 4);
        assert!(days_in_range(d(2025, 1, 2), d(2025, 1, 1)).is_empty());
    }
}
