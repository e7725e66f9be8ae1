//! Shared layout constants used across CLI and TUI components.
//!
//! This module centralizes common layout values to ensure consistency
//! and make it easier to adjust layouts globally.

/// Width of one day cell (" dd " plus marker)
pub const DAY_CELL_WIDTH: u16 = 4;

/// Width of the day grid inside the dialog border
pub const GRID_WIDTH: u16 = DAY_CELL_WIDTH * 7;

/// Total dialog width including the 2-char border
pub const DIALOG_WIDTH: u16 = GRID_WIDTH + 2;

/// Dialog height: border, title, weekday header, 6 week rows, buttons, border
pub const DIALOG_HEIGHT: u16 = 11;

/// Width of the text field, brackets included ("[dd/mm/yyyy]")
pub const INPUT_WIDTH: u16 = 12;

/// Width of the trigger button ("[Cal]")
pub const TRIGGER_WIDTH: u16 = 5;

/// Width of each month/year step button in the dialog title row
pub const STEP_BUTTON_WIDTH: u16 = 3;

/// Rows above the dialog: field label, input row, trigger label
pub const FIELD_HEIGHT: u16 = 3;
