use anyhow::Result;

use crate::date::{self, DateFormat};

/// Normalized value and spoken form of `text`, one per line
pub fn describe(text: &str, format: DateFormat) -> Result<String> {
    let parsed = super::parse_date_arg(text, format)?;
    Ok(format!(
        "{}\n{}\n",
        date::format_input_value(parsed),
        date::format_human(parsed)
    ))
}

pub fn run(text: &str, format: DateFormat) -> Result<()> {
    print!("{}", describe(text, format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_pads_and_names() {
        assert_eq!(
            describe("5/1/2025", DateFormat::Dmy).unwrap(),
            "05/01/2025\nSunday 5 January 2025\n"
        );
    }

    #[test]
    fn test_describe_year_first() {
        assert_eq!(
            describe("2024/2/29", DateFormat::Ymd).unwrap(),
            "29/02/2024\nThursday 29 February 2024\n"
        );
    }

    #[test]
    fn test_describe_rejects_impossible_date() {
        assert!(describe("31/02/2024", DateFormat::Dmy).is_err());
        assert!(describe("", DateFormat::Dmy).is_err());
    }
}
