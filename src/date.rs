//! Date arithmetic and text formats for the calendar.
//!
//! Everything here is pure: no host, no terminal. Dates are day precision
//! (`NaiveDate`), so comparisons never see a time of day.

use chrono::{Datelike, Days, NaiveDate};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use crate::error::CalendarError;

/// Number of days in a week, also the number of grid columns
pub const DAYS_PER_WEEK: u32 = 7;

const MONTH_NAMES: [&str; 12] = [
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

const WEEKDAY_ABBREVS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Component order used when parsing `D/M/Y`-style text
///
/// Only parsing follows this order. The value written back to the input is
/// always `DD/MM/YYYY`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DateFormat {
    #[default]
    Dmy,
    Mdy,
    Ymd,
}

impl FromStr for DateFormat {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "DMY" => Ok(DateFormat::Dmy),
            "MDY" => Ok(DateFormat::Mdy),
            "YMD" => Ok(DateFormat::Ymd),
            _ => Err(CalendarError::UnknownDateFormat(s.to_string())),
        }
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DateFormat::Dmy => "DMY",
            DateFormat::Mdy => "MDY",
            DateFormat::Ymd => "YMD",
        };
        f.write_str(s)
    }
}

/// Optional inclusive date range
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bounds {
    pub min: Option<NaiveDate>,
    pub max: Option<NaiveDate>,
}

impl Bounds {
    pub fn new(min: Option<NaiveDate>, max: Option<NaiveDate>) -> Self {
        Self { min, max }
    }

    /// True when both ends are set and min is after max
    pub fn is_inverted(&self) -> bool {
        matches!((self.min, self.max), (Some(min), Some(max)) if min > max)
    }

    pub fn is_before_min(&self, date: NaiveDate) -> bool {
        self.min.is_some_and(|min| date < min)
    }

    pub fn is_after_max(&self, date: NaiveDate) -> bool {
        self.max.is_some_and(|max| date > max)
    }

    /// Whether `date` may be selected
    pub fn contains(&self, date: NaiveDate) -> bool {
        !self.is_before_min(date) && !self.is_after_max(date)
    }

    pub fn clamp(&self, date: NaiveDate) -> NaiveDate {
        clamp(date, self.min, self.max)
    }
}

fn is_digits(s: &str, min_len: usize, max_len: usize) -> bool {
    (min_len..=max_len).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
}

/// Parse `D/M/Y` text according to `format`
///
/// DMY and MDY expect `D{1,2}/D{1,2}/DDDD`, YMD expects `DDDD/D{1,2}/D{1,2}`.
/// Anything else, including impossible dates like 31/02/2024, yields `None`.
pub fn parse_date(text: &str, format: DateFormat) -> Option<NaiveDate> {
    let parts: Vec<&str> = text.trim().split('/').collect();
    if parts.len() != 3 {
        return None;
    }

    let (day, month, year) = match format {
        DateFormat::Dmy => (parts[0], parts[1], parts[2]),
        DateFormat::Mdy => (parts[1], parts[0], parts[2]),
        DateFormat::Ymd => (parts[2], parts[1], parts[0]),
    };

    if !is_digits(day, 1, 2) || !is_digits(month, 1, 2) || !is_digits(year, 4, 4) {
        return None;
    }

    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

/// Format a date for the host input: always `DD/MM/YYYY`
pub fn format_input_value(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Human-readable date, e.g. "Wednesday 25 December 2024"
pub fn format_human(date: NaiveDate) -> String {
    date.format("%A %-d %B %Y").to_string()
}

/// Dialog title, e.g. "December 2024"
pub fn format_title(date: NaiveDate) -> String {
    format!("{} {}", month_name(date.month()), date.year())
}

/// Full English month name for a 1-based month
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES[((month.clamp(1, 12)) - 1) as usize]
}

/// Column headers, Sunday first
pub fn weekday_abbrevs() -> &'static [&'static str; 7] {
    &WEEKDAY_ABBREVS
}

/// Shift by whole days; saturates at chrono's representable range
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    let shifted = if days >= 0 {
        date.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    };
    shifted.unwrap_or(date)
}

/// Calendar month step that keeps the day of month and lets it overflow
///
/// Jan 31 + 1 month lands in early March, the same way a plain date-object
/// month increment does. Short months are not special-cased.
pub fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    let total = match (date.year() * 12 + date.month0() as i32).checked_add(months) {
        Some(total) => total,
        None => return date,
    };
    let year = total.div_euclid(12);
    let month = total.rem_euclid(12) as u32 + 1;

    match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(first) => first
            .checked_add_days(Days::new(u64::from(date.day() - 1)))
            .unwrap_or(date),
        None => date,
    }
}

/// Calendar year step; Feb 29 rolls to Mar 1 in a non-leap target year
pub fn add_years(date: NaiveDate, years: i32) -> NaiveDate {
    match years.checked_mul(12) {
        Some(months) => add_months(date, months),
        None => date,
    }
}

/// Days since the preceding Sunday (Sunday = 0)
pub fn day_of_week(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

/// Sunday on or before `date`
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    add_days(date, -i64::from(day_of_week(date)))
}

/// Saturday on or after `date`
pub fn end_of_week(date: NaiveDate) -> NaiveDate {
    add_days(date, i64::from(DAYS_PER_WEEK - 1 - day_of_week(date)))
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// First date shown in the grid: the Sunday on or before the 1st of the month
pub fn grid_anchor(date: NaiveDate) -> NaiveDate {
    start_of_week(first_of_month(date))
}

/// Whether two dates share month and year
pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Clamp into the optional inclusive range, min checked first
pub fn clamp(date: NaiveDate, min: Option<NaiveDate>, max: Option<NaiveDate>) -> NaiveDate {
    let mut date = date;
    if let Some(min) = min {
        if date < min {
            date = min;
        }
    }
    if let Some(max) = max {
        if date > max {
            date = max;
        }
    }
    date
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_dmy() {
        assert_eq!(parse_date("25/12/2024", DateFormat::Dmy), Some(ymd(2024, 12, 25)));
        assert_eq!(parse_date("5/1/2025", DateFormat::Dmy), Some(ymd(2025, 1, 5)));
        assert_eq!(parse_date("  05/01/2025 ", DateFormat::Dmy), Some(ymd(2025, 1, 5)));
    }

    #[test]
    fn test_parse_mdy_and_ymd() {
        assert_eq!(parse_date("12/25/2024", DateFormat::Mdy), Some(ymd(2024, 12, 25)));
        assert_eq!(parse_date("2024/12/25", DateFormat::Ymd), Some(ymd(2024, 12, 25)));
        assert_eq!(parse_date("2024/1/5", DateFormat::Ymd), Some(ymd(2024, 1, 5)));
    }

    #[test]
    fn test_parse_same_text_differs_by_format() {
        assert_eq!(parse_date("03/04/2024", DateFormat::Dmy), Some(ymd(2024, 4, 3)));
        assert_eq!(parse_date("03/04/2024", DateFormat::Mdy), Some(ymd(2024, 3, 4)));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(parse_date("", DateFormat::Dmy), None);
        assert_eq!(parse_date("25-12-2024", DateFormat::Dmy), None);
        assert_eq!(parse_date("25/12/24", DateFormat::Dmy), None);
        assert_eq!(parse_date("125/12/2024", DateFormat::Dmy), None);
        assert_eq!(parse_date("25/12/2024/1", DateFormat::Dmy), None);
        assert_eq!(parse_date("aa/12/2024", DateFormat::Dmy), None);
        assert_eq!(parse_date("+1/12/2024", DateFormat::Dmy), None);
        assert_eq!(parse_date("25/12/2024", DateFormat::Ymd), None);
    }

    #[test]
    fn test_parse_rejects_impossible_dates() {
        assert_eq!(parse_date("31/02/2024", DateFormat::Dmy), None);
        assert_eq!(parse_date("29/02/2023", DateFormat::Dmy), None);
        assert_eq!(parse_date("0/1/2024", DateFormat::Dmy), None);
        assert_eq!(parse_date("1/13/2024", DateFormat::Dmy), None);
    }

    #[test]
    fn test_date_format_from_str() {
        assert_eq!("DMY".parse::<DateFormat>(), Ok(DateFormat::Dmy));
        assert_eq!("mdy".parse::<DateFormat>(), Ok(DateFormat::Mdy));
        assert_eq!(" YMD ".parse::<DateFormat>(), Ok(DateFormat::Ymd));
        assert!("DM".parse::<DateFormat>().is_err());
        assert_eq!(DateFormat::default(), DateFormat::Dmy);
        assert_eq!(DateFormat::Mdy.to_string(), "MDY");
    }

    #[test]
    fn test_format_input_value_is_zero_padded() {
        assert_eq!(format_input_value(ymd(2025, 1, 5)), "05/01/2025");
        assert_eq!(format_input_value(ymd(2024, 12, 25)), "25/12/2024");
    }

    #[test]
    fn test_format_human_and_title() {
        assert_eq!(format_human(ymd(2024, 12, 25)), "Wednesday 25 December 2024");
        assert_eq!(format_human(ymd(2025, 1, 5)), "Sunday 5 January 2025");
        assert_eq!(format_title(ymd(2024, 12, 25)), "December 2024");
    }

    #[test]
    fn test_add_days_crosses_months() {
        assert_eq!(add_days(ymd(2024, 1, 31), 1), ymd(2024, 2, 1));
        assert_eq!(add_days(ymd(2024, 3, 1), -1), ymd(2024, 2, 29));
        assert_eq!(add_days(ymd(2024, 12, 28), 7), ymd(2025, 1, 4));
    }

    #[test]
    fn test_add_months() {
        assert_eq!(add_months(ymd(2024, 1, 15), 1), ymd(2024, 2, 15));
        assert_eq!(add_months(ymd(2024, 12, 15), 1), ymd(2025, 1, 15));
        assert_eq!(add_months(ymd(2024, 1, 15), -1), ymd(2023, 12, 15));
    }

    #[test]
    fn test_add_months_rolls_over_short_months() {
        // Feb 2024 has 29 days, so day 31 overflows by two
        assert_eq!(add_months(ymd(2024, 1, 31), 1), ymd(2024, 3, 2));
        assert_eq!(add_months(ymd(2024, 3, 31), -1), ymd(2024, 3, 2));
    }

    #[test]
    fn test_add_years() {
        assert_eq!(add_years(ymd(2024, 6, 10), 1), ymd(2025, 6, 10));
        assert_eq!(add_years(ymd(2024, 6, 10), -1), ymd(2023, 6, 10));
        assert_eq!(add_years(ymd(2024, 2, 29), 1), ymd(2025, 3, 1));
    }

    #[test]
    fn test_month_and_year_steps_saturate_out_of_range() {
        let date = ymd(2024, 6, 10);
        assert_eq!(add_months(date, i32::MAX), date);
        assert_eq!(add_months(date, i32::MIN), date);
        assert_eq!(add_months(date, 12 * 1_000_000), date);
        assert_eq!(add_years(date, i32::MAX), date);
        assert_eq!(add_years(date, i32::MIN), date);
    }

    #[test]
    fn test_week_boundaries() {
        // 2024-12-25 is a Wednesday
        assert_eq!(day_of_week(ymd(2024, 12, 25)), 3);
        assert_eq!(start_of_week(ymd(2024, 12, 25)), ymd(2024, 12, 22));
        assert_eq!(end_of_week(ymd(2024, 12, 25)), ymd(2024, 12, 28));
        assert_eq!(start_of_week(ymd(2024, 12, 22)), ymd(2024, 12, 22));
        assert_eq!(end_of_week(ymd(2024, 12, 28)), ymd(2024, 12, 28));
    }

    #[test]
    fn test_grid_anchor() {
        // December 2024 starts on a Sunday
        assert_eq!(grid_anchor(ymd(2024, 12, 25)), ymd(2024, 12, 1));
        // January 2025 starts on a Wednesday
        assert_eq!(grid_anchor(ymd(2025, 1, 15)), ymd(2024, 12, 29));
    }

    #[test]
    fn test_clamp() {
        let min = Some(ymd(2024, 1, 1));
        let max = Some(ymd(2024, 1, 31));
        assert_eq!(clamp(ymd(2024, 2, 15), min, max), ymd(2024, 1, 31));
        assert_eq!(clamp(ymd(2023, 12, 1), min, max), ymd(2024, 1, 1));
        assert_eq!(clamp(ymd(2024, 1, 10), min, max), ymd(2024, 1, 10));
        assert_eq!(clamp(ymd(2030, 1, 10), None, None), ymd(2030, 1, 10));
    }

    #[test]
    fn test_bounds() {
        let bounds = Bounds::new(Some(ymd(2024, 1, 1)), Some(ymd(2024, 1, 31)));
        assert!(bounds.contains(ymd(2024, 1, 1)));
        assert!(bounds.contains(ymd(2024, 1, 31)));
        assert!(!bounds.contains(ymd(2024, 2, 1)));
        assert!(bounds.is_before_min(ymd(2023, 12, 31)));
        assert!(!bounds.is_inverted());
        assert!(Bounds::new(Some(ymd(2024, 2, 1)), Some(ymd(2024, 1, 1))).is_inverted());
        assert!(Bounds::default().contains(ymd(1999, 1, 1)));
    }
}
