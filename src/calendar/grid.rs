use chrono::{Datelike, NaiveDate};
use tracing::trace;

use crate::date::{self, Bounds};

/// Rows in the month grid
pub const GRID_ROWS: usize = 6;
/// Columns in the month grid, Sunday first
pub const GRID_COLS: usize = 7;
/// Fixed number of day cells
pub const GRID_CELLS: usize = GRID_ROWS * GRID_COLS;

/// One day slot in the calendar grid
///
/// `row` and `col` never change; every other field is rewritten on each
/// render when the cell is bound to a new date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCell {
    pub row: usize,
    pub col: usize,
    pub date: NaiveDate,
    pub day: u32,
    /// Outside the focused month
    pub hidden: bool,
    /// Outside the min/max bounds
    pub disabled: bool,
    /// Matches the committed selection
    pub selected: bool,
    /// Holds the single keyboard tab stop (`tabindex=0`)
    pub focusable: bool,
}

impl CalendarCell {
    fn at(index: usize, date: NaiveDate) -> Self {
        Self {
            row: index / GRID_COLS,
            col: index % GRID_COLS,
            date,
            day: date.day(),
            hidden: false,
            disabled: false,
            selected: false,
            focusable: false,
        }
    }

    pub fn index(&self) -> usize {
        self.row * GRID_COLS + self.col
    }

    /// Visible and enabled, so it can take focus or be clicked
    pub fn is_interactive(&self) -> bool {
        !self.hidden && !self.disabled
    }

    /// `tabindex` value a DOM rendition would carry
    pub fn tab_index(&self) -> i8 {
        if self.focusable { 0 } else { -1 }
    }
}

/// The 6×7 day grid of the dialog
///
/// Cells are allocated once and relabelled in place by [`update_calendar`].
///
/// [`update_calendar`]: CalendarGrid::update_calendar
#[derive(Debug, Clone)]
pub struct CalendarGrid {
    cells: [CalendarCell; GRID_CELLS],
    title: String,
    month_start: NaiveDate,
}

impl CalendarGrid {
    pub fn new(focused: NaiveDate, selected: Option<NaiveDate>, bounds: &Bounds) -> Self {
        let anchor = date::grid_anchor(focused);
        let cells = std::array::from_fn(|i| CalendarCell::at(i, date::add_days(anchor, i as i64)));
        let mut grid = Self {
            cells,
            title: String::new(),
            month_start: date::first_of_month(focused),
        };
        grid.update_calendar(focused, selected, bounds);
        grid
    }

    /// Rebind all 42 cells to the month containing `focused`
    pub fn update_calendar(&mut self, focused: NaiveDate, selected: Option<NaiveDate>, bounds: &Bounds) {
        let anchor = date::grid_anchor(focused);
        trace!("GRID: Rendering {} from anchor {}", date::format_title(focused), anchor);

        for (i, cell) in self.cells.iter_mut().enumerate() {
            let day = date::add_days(anchor, i as i64);
            cell.date = day;
            cell.day = day.day();
            cell.hidden = !date::same_month(day, focused);
            cell.disabled = !bounds.contains(day);
            cell.selected = selected == Some(day);
        }

        self.month_start = date::first_of_month(focused);
        self.title = date::format_title(focused);
        self.mark_focus(focused);
    }

    /// Move the single tab stop onto `focused`, if it is on screen and enabled
    pub fn mark_focus(&mut self, focused: NaiveDate) {
        for cell in self.cells.iter_mut() {
            cell.focusable = cell.date == focused && cell.is_interactive();
        }
    }

    /// Refresh selection flags without a full relabel
    pub fn mark_selected(&mut self, selected: Option<NaiveDate>) {
        for cell in self.cells.iter_mut() {
            cell.selected = selected == Some(cell.date);
        }
    }

    pub fn cells(&self) -> &[CalendarCell; GRID_CELLS] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<&CalendarCell> {
        self.cells.get(index)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[CalendarCell]> {
        self.cells.chunks(GRID_COLS)
    }

    pub fn cell_for(&self, date: NaiveDate) -> Option<&CalendarCell> {
        self.cells.iter().find(|c| c.date == date)
    }

    pub fn focusable_cell(&self) -> Option<&CalendarCell> {
        self.cells.iter().find(|c| c.focusable)
    }

    /// Dialog title, "<MonthName> <Year>"
    pub fn title(&self) -> &str {
        &self.title
    }

    /// First day of the month currently rendered
    pub fn month_start(&self) -> NaiveDate {
        self.month_start
    }
}
