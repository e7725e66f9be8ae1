//! Calendar navigator: focused/selected dates, bounds, the day grid, and the
//! key and pointer transitions that drive them.

pub mod action;
pub mod grid;
pub mod host;
pub mod keys;
pub mod navigator;

pub use action::{Action, PointerTarget};
pub use grid::{CalendarCell, CalendarGrid, GRID_CELLS, GRID_COLS, GRID_ROWS};
pub use host::{DialogControl, FocusTarget, Host, MemoryHost};
pub use keys::key_to_action;
pub use navigator::{CalendarNavigator, NavigatorOptions};
