/// Screen geometry of the date field and its dialog
///
/// The same rectangles drive rendering and pointer hit testing, so a click
/// always lands on what was drawn.

use ratatui::layout::{Position, Rect};

use crate::calendar::{DialogControl, PointerTarget, GRID_CELLS, GRID_COLS};
use crate::layout_constants::{
    DAY_CELL_WIDTH, DIALOG_HEIGHT, DIALOG_WIDTH, FIELD_HEIGHT, INPUT_WIDTH, STEP_BUTTON_WIDTH,
    TRIGGER_WIDTH,
};

/// Calculated areas for each part of the picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerLayout {
    pub label: Rect,
    pub input: Rect,
    pub trigger: Rect,
    pub trigger_label: Rect,
    pub dialog: Rect,
    pub title: Rect,
    pub weekdays: Rect,
    pub grid: Rect,
}

impl PickerLayout {
    /// Lay the picker out from the top-left corner of `area`
    ///
    /// Rectangles are cut down to fit inside `area`.
    pub fn new(area: Rect) -> Self {
        let row = |offset: u16, x: u16, width: u16| {
            Rect::new(x, area.y.saturating_add(offset), width, 1).intersection(area)
        };

        let label = row(0, area.x, area.width);
        let input = row(1, area.x, INPUT_WIDTH);
        let trigger = row(1, area.x.saturating_add(INPUT_WIDTH + 1), TRIGGER_WIDTH);
        let trigger_label = row(2, area.x, area.width);

        let dialog = Rect::new(
            area.x,
            area.y.saturating_add(FIELD_HEIGHT),
            DIALOG_WIDTH,
            DIALOG_HEIGHT,
        )
        .intersection(area);

        let inner_x = dialog.x + 1;
        let inner_y = dialog.y + 1;
        let inner_width = DIALOG_WIDTH - 2;

        Self {
            label,
            input,
            trigger,
            trigger_label,
            dialog,
            title: Rect::new(inner_x, inner_y, inner_width, 1),
            weekdays: Rect::new(inner_x, inner_y + 1, inner_width, 1),
            grid: Rect::new(inner_x, inner_y + 2, inner_width, 6),
        }
    }

    /// Whether the whole dialog fits inside the area it was laid out in
    ///
    /// Only a fitting dialog draws its contents, so only then do its
    /// buttons and cells take clicks.
    pub fn dialog_fits(&self) -> bool {
        self.dialog.width >= DIALOG_WIDTH && self.dialog.height >= DIALOG_HEIGHT
    }

    /// Screen rect of a dialog button
    pub fn control(&self, control: DialogControl) -> Rect {
        let title = self.title;
        let right = title.x + title.width;
        let buttons_y = self.grid.y + self.grid.height;
        match control {
            DialogControl::PrevYear => Rect::new(title.x, title.y, STEP_BUTTON_WIDTH, 1),
            DialogControl::PrevMonth => Rect::new(title.x + STEP_BUTTON_WIDTH, title.y, STEP_BUTTON_WIDTH, 1),
            DialogControl::NextMonth => Rect::new(right - 2 * STEP_BUTTON_WIDTH, title.y, STEP_BUTTON_WIDTH, 1),
            DialogControl::NextYear => Rect::new(right - STEP_BUTTON_WIDTH, title.y, STEP_BUTTON_WIDTH, 1),
            DialogControl::Grid => self.grid,
            DialogControl::Ok => Rect::new(self.grid.x + 2, buttons_y, 4, 1),
            DialogControl::Cancel => Rect::new(self.grid.x + 8, buttons_y, 8, 1),
        }
    }

    /// Title text area between the step buttons
    pub fn title_text(&self) -> Rect {
        let inset = 2 * STEP_BUTTON_WIDTH;
        Rect::new(self.title.x + inset, self.title.y, self.title.width - 2 * inset, 1)
    }

    /// Screen rect of the day cell at grid `index`
    pub fn cell(&self, index: usize) -> Rect {
        let row = (index / GRID_COLS) as u16;
        let col = (index % GRID_COLS) as u16;
        Rect::new(self.grid.x + col * DAY_CELL_WIDTH, self.grid.y + row, DAY_CELL_WIDTH, 1)
    }

    /// Map a pointer position to what it hits
    ///
    /// Dialog parts only count while the dialog is open.
    pub fn hit_test(&self, column: u16, row: u16, dialog_open: bool) -> PointerTarget {
        let pos = Position::new(column, row);

        if dialog_open && self.dialog.contains(pos) {
            if !self.dialog_fits() {
                return PointerTarget::Dialog;
            }
            for control in DialogControl::ALL {
                if control != DialogControl::Grid && self.control(control).contains(pos) {
                    return PointerTarget::Control(control);
                }
            }
            if self.grid.contains(pos) {
                if let Some(index) = (0..GRID_CELLS).find(|i| self.cell(*i).contains(pos)) {
                    return PointerTarget::Cell(index);
                }
            }
            return PointerTarget::Dialog;
        }

        if self.input.contains(pos) {
            PointerTarget::Input
        } else if self.trigger.contains(pos) {
            PointerTarget::Trigger
        } else {
            PointerTarget::Outside
        }
    }
}
