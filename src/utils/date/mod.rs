// Date utility functions
// Month tables, journal date parsing and calendar grid generation

use chrono::{Datelike, NaiveDate};

pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const SHORT_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Weekday column headers, Sunday first.
pub const DAYS: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];

/// Short month name for a 1-based month number. Out of range months yield "".
pub fn short_month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|idx| SHORT_MONTHS.get(idx as usize))
        .copied()
        .unwrap_or("")
}

/// Full month name for a 1-based month number. Out of range months yield "".
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|idx| MONTHS.get(idx as usize))
        .copied()
        .unwrap_or("")
}

/// Parse a journal date written as `D/M/YYYY`.
///
/// Day and month may be one or two digits. Surrounding whitespace on each
/// component is ignored. Returns `None` for anything that does not name a
/// real calendar day.
pub fn parse_journal_date(date_str: &str) -> Option<NaiveDate> {
    let mut parts = date_str.trim().split('/');
    let day = parts.next()?.trim().parse::<u32>().ok()?;
    let month = parts.next()?.trim().parse::<u32>().ok()?;
    let year = parts.next()?.trim().parse::<i32>().ok()?;

    if parts.next().is_some() {
        return None;
    }

    NaiveDate::from_ymd_opt(year, month, day)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return 0;
    };
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };

    next_first
        .map(|next| next.signed_duration_since(first).num_days() as u32)
        .unwrap_or(31)
}

/// Weekday of the first of the month, 0 = Sunday.
pub fn first_weekday_of_month(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|date| date.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

/// Cells of a Sunday-first month grid: one `None` per weekday before the
/// first of the month followed by every day number. No trailing padding.
pub fn generate_calendar_days(year: i32, month: u32) -> Vec<Option<u32>> {
    let leading = first_weekday_of_month(year, month) as usize;
    let days = days_in_month(year, month);

    let mut cells = Vec::with_capacity(leading + days as usize);
    cells.extend(std::iter::repeat(None).take(leading));
    cells.extend((1..=days).map(Some));
    cells
}

/// Number of week rows a month grid occupies.
pub fn week_rows(year: i32, month: u32) -> usize {
    generate_calendar_days(year, month).len().div_ceil(7)
}

/// Format a `D/M/YYYY` journal date as `"March 5, 2025"`.
pub fn format_long_date(date_str: &str) -> Option<String> {
    let date = parse_journal_date(date_str)?;
    Some(format!(
        "{} {}, {}",
        month_name(date.month()),
        date.day(),
        date.year()
    ))
}
