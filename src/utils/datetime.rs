//! Date helpers for the reminder and due-date fields.
//!
//! The gateway sends dates as plain strings. Most are `YYYY-MM-DD`, some come
//! back as full ISO timestamps, so parsing only looks at the date prefix.

use chrono::{Local, NaiveDate};

/// Date format used by the gateway for due and reminder dates
pub const TASK_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse the date part of a task date string.
pub fn parse_task_date(value: &str) -> Option<NaiveDate> {
    let prefix = value.trim().get(..10)?;
    NaiveDate::parse_from_str(prefix, TASK_DATE_FORMAT).ok()
}

/// Human-readable due label relative to `today`.
///
/// Unparseable input is returned unchanged.
pub fn format_due_relative(value: &str, today: NaiveDate) -> String {
    let Some(date) = parse_task_date(value) else {
        return value.to_string();
    };

    match (date - today).num_days() {
        -1 => "yesterday".to_string(),
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        diff if (2..=30).contains(&diff) => format!("in {} days", diff),
        diff if (-30..=-2).contains(&diff) => format!("{} days ago", -diff),
        _ => date.format(TASK_DATE_FORMAT).to_string(),
    }
}

/// [`format_due_relative`] against the local calendar date.
pub fn format_due(value: &str) -> String {
    format_due_relative(value, Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_plain_and_timestamp_dates() {
        assert_eq!(parse_task_date("2024-10-03"), Some(day(2024, 10, 3)));
        assert_eq!(parse_task_date("2024-10-03T18:00:00.000Z"), Some(day(2024, 10, 3)));
        assert_eq!(parse_task_date("03/10/2024"), None);
        assert_eq!(parse_task_date(""), None);
    }

    #[test]
    fn relative_labels() {
        let today = day(2024, 10, 3);
        assert_eq!(format_due_relative("2024-10-02", today), "yesterday");
        assert_eq!(format_due_relative("2024-10-03", today), "today");
        assert_eq!(format_due_relative("2024-10-04", today), "tomorrow");
        assert_eq!(format_due_relative("2024-10-08", today), "in 5 days");
        assert_eq!(format_due_relative("2024-09-23", today), "10 days ago");
        assert_eq!(format_due_relative("2025-03-01", today), "2025-03-01");
        assert_eq!(format_due_relative("someday", today), "someday");
    }
}
