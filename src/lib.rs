pub mod calendar;
pub mod commands;
pub mod config;
pub mod date;
pub mod error;
pub mod formatting;
pub mod layout_constants;
pub mod tui;

#[cfg(feature = "development")]
pub mod dev;
