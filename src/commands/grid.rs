use anyhow::Result;
use chrono::NaiveDate;
use tracing::debug;

use crate::calendar::{CalendarNavigator, MemoryHost, NavigatorOptions};
use crate::date;
use crate::formatting::{format_month_grid, BoxChars};

/// Build the month grid the dialog would show for `value` and render it as text
///
/// An empty or unparseable `value` opens on `today`, exactly as the dialog does.
pub fn render(
    value: Option<&str>,
    options: NavigatorOptions,
    today: NaiveDate,
    box_chars: &BoxChars,
) -> Result<String> {
    let mut host = MemoryHost::new(today);
    if let Some(value) = value {
        host = host.with_value(value);
    }

    let mut navigator = CalendarNavigator::new(host, options)?;
    navigator.open();
    debug!("GRID: Rendering {} focused on {}", navigator.title(), navigator.focused());

    let mut output = format_month_grid(navigator.grid(), box_chars);
    output.push_str(&format!("Focused: {}\n", date::format_human(navigator.focused())));
    if let Some(selected) = navigator.selected() {
        output.push_str(&format!("Selected: {}\n", date::format_input_value(selected)));
    }
    Ok(output)
}

pub fn run(value: Option<String>, options: NavigatorOptions, box_chars: &BoxChars) -> Result<()> {
    if let Some(text) = value.as_deref() {
        super::parse_date_arg(text, options.format)?;
    }

    let today = chrono::Local::now().date_naive();
    let output = render(value.as_deref(), options, today, box_chars)?;

    println!();
    print!("{}", output);
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::DateFormat;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_render_selected_value() {
        let output = render(
            Some("25/12/2024"),
            NavigatorOptions::default(),
            ymd(2024, 6, 15),
            &BoxChars::ascii(),
        )
        .unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[1].trim_matches('|').trim(), "December 2024");
        assert_eq!(lines[7], "| 22  23  24 >25  26  27  28 |");
        assert_eq!(lines[11], "Focused: Wednesday 25 December 2024");
        assert_eq!(lines[12], "Selected: 25/12/2024");
    }

    #[test]
    fn test_render_defaults_to_today() {
        let output = render(None, NavigatorOptions::default(), ymd(2024, 6, 15), &BoxChars::ascii()).unwrap();
        assert!(output.contains("June 2024"));
        assert!(output.contains(">15"));
        assert!(!output.contains("Selected:"));
    }

    #[test]
    fn test_render_brackets_out_of_bounds_days() {
        let options = NavigatorOptions {
            max_date: Some(ymd(2024, 6, 20)),
            ..Default::default()
        };
        let output = render(None, options, ymd(2024, 6, 15), &BoxChars::ascii()).unwrap();
        assert!(output.contains("[21]"));
        assert!(output.contains(" 20 "));
    }

    #[test]
    fn test_render_month_first_format() {
        let options = NavigatorOptions {
            format: DateFormat::Mdy,
            ..Default::default()
        };
        let output = render(Some("12/25/2024"), options, ymd(2024, 6, 15), &BoxChars::ascii()).unwrap();
        assert!(output.contains("December 2024"));
    }

    #[test]
    fn test_render_rejects_inverted_bounds() {
        let options = NavigatorOptions {
            min_date: Some(ymd(2024, 7, 1)),
            max_date: Some(ymd(2024, 6, 1)),
            ..Default::default()
        };
        assert!(render(None, options, ymd(2024, 6, 15), &BoxChars::ascii()).is_err());
    }
}
