pub mod grid;
pub mod parse;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::date::{self, DateFormat};
use crate::error::CalendarError;

/// Parse a date given on the command line
///
/// Accepts the same `D/M/Y`-style text as the input field, in the order given
/// by `format`. Returns an error if the text does not parse.
pub fn parse_date_arg(text: &str, format: DateFormat) -> Result<NaiveDate> {
    date::parse_date(text, format)
        .ok_or_else(|| CalendarError::InvalidDate {
            text: text.to_string(),
            format: format.to_string(),
        })
        .with_context(|| format!("Could not read '{}' as a date", text))
}
