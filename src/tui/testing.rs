//! General test utilities for TUI tests.
//!
//! For widget-specific rendering helpers, see `crate::tui::widgets::testing`.

use chrono::NaiveDate;
use ratatui::buffer::Buffer;
use std::collections::HashMap;

use crate::calendar::NavigatorOptions;
use crate::tui::app::App;
use crate::tui::host::TerminalHost;

/// Constant for general rendering width
pub const RENDER_WIDTH: u16 = 80;

/// Creates an App on a terminal host with a fixed "today" of 15 June 2024.
///
/// # Panics
///
/// Panics if the options carry inverted bounds (acceptable in test code).
pub fn create_app(value: &str, options: NavigatorOptions) -> App {
    let today = NaiveDate::from_ymd_opt(2024, 6, 15).expect("valid test date");
    let host = TerminalHost::new(value.to_string(), HashMap::new(), today);
    App::new(host, options).expect("Failed to create test app")
}

/// Get the text content of a specific line in the buffer
pub fn buffer_line(buf: &Buffer, line: u16) -> String {
    let area = buf.area();
    (0..area.width).map(|x| buf[(x, line)].symbol()).collect()
}

/// Helper to extract lines from buffer
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area();
    (0..area.height).map(|y| buffer_line(buf, y)).collect()
}

/// Helper for buffer assertions
pub fn assert_buffer(buf: &Buffer, expected: &[&str]) {
    let actual = buffer_lines(buf);
    let buffer_width = buf.area().width as usize;

    assert_eq!(
        actual.len(),
        expected.len(),
        "Buffer height mismatch: expected {} lines, got {}",
        expected.len(),
        actual.len()
    );
    for (i, expected_line) in expected.iter().enumerate() {
        assert_eq!(
            actual[i].chars().count(),
            buffer_width,
            "Line {} width mismatch: expected {}, got {}",
            i,
            buffer_width,
            actual[i].chars().count()
        );
        assert_eq!(
            actual[i].trim_end(),
            expected_line.trim_end(),
            "Line {} mismatch:\nExpected: '{}'\nActual:   '{}'",
            i,
            expected_line,
            actual[i]
        );
    }
}
