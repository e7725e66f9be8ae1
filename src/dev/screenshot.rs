/// Screenshot utilities for capturing terminal output
///
/// This module provides functionality to save the picker's screen as a
/// text file for debugging and documentation purposes.

use std::fs::File;
use std::io::{self, Write};
use ratatui::{buffer::Buffer, layout::Rect};

/// Timestamped screenshot filename in the current directory
pub fn screenshot_filename() -> String {
    let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    format!("datepicker-screenshot-{}.txt", timestamp)
}

/// Save a terminal screenshot from a buffer to a text file
///
/// Captures a ratatui Buffer and saves it to a file with the given filename.
/// This should be called with the buffer of the current draw call.
///
/// # Returns
///
/// Returns `Ok(())` if successful, or an IO error if the file could not be written.
pub fn save_buffer_screenshot(
    buffer: &Buffer,
    area: Rect,
    filename: &str,
) -> io::Result<()> {
    let mut file = File::create(filename)?;

    for y in area.top()..area.bottom() {
        let line: String = (area.left()..area.right())
            .map(|x| buffer[(x, y)].symbol())
            .collect();
        writeln!(file, "{}", line.trim_end())?;
    }

    Ok(())
}
