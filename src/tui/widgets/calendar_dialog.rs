//! CalendarDialogWidget - renders the open date picker dialog
//!
//! Features:
//! - Clear background behind the dialog
//! - Title row with year/month step buttons around "<Month> <Year>"
//! - Weekday header, Sunday first
//! - 6×7 day grid: hidden days blank, disabled days dimmed,
//!   the committed day bold, the keyboard tab stop highlighted
//! - OK / Cancel buttons

use crate::calendar::{CalendarCell, CalendarNavigator, DialogControl, Host, GRID_CELLS};
use crate::config::DisplayConfig;
use crate::date;
use crate::layout_constants::DAY_CELL_WIDTH;
use crate::tui::layout::PickerLayout;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    symbols::border,
    widgets::{Block, Borders, Clear, Widget},
};
use unicode_width::UnicodeWidthStr;

use super::RenderableWidget;

const ASCII_BORDER: border::Set = border::Set {
    top_left: "+",
    top_right: "+",
    bottom_left: "+",
    bottom_right: "+",
    vertical_left: "|",
    vertical_right: "|",
    horizontal_top: "-",
    horizontal_bottom: "-",
};

/// Snapshot of what the dialog shows
#[derive(Clone)]
pub struct CalendarDialogWidget {
    pub title: String,
    pub cells: [CalendarCell; GRID_CELLS],
    pub active_control: DialogControl,
}

impl CalendarDialogWidget {
    pub fn from_navigator<H: Host>(navigator: &CalendarNavigator<H>) -> Self {
        Self {
            title: navigator.title().to_string(),
            cells: *navigator.grid().cells(),
            active_control: navigator.active_control(),
        }
    }

    fn control_style(&self, control: DialogControl, config: &DisplayConfig) -> Style {
        if control == self.active_control {
            Style::default()
                .fg(config.selection_fg)
                .add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        }
    }

    fn cell_style(&self, cell: &CalendarCell, config: &DisplayConfig) -> Style {
        let mut style = Style::default();
        if cell.disabled {
            style = style.fg(config.disabled_fg).add_modifier(Modifier::DIM);
        }
        if cell.selected {
            style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        if cell.focusable {
            let fg = if self.active_control == DialogControl::Grid {
                config.selection_fg
            } else {
                config.unfocused_selection_fg()
            };
            style = style.fg(fg).add_modifier(Modifier::REVERSED);
        }
        style
    }

    fn render_title_row(&self, layout: &PickerLayout, buf: &mut Buffer, config: &DisplayConfig) {
        for control in [
            DialogControl::PrevYear,
            DialogControl::PrevMonth,
            DialogControl::NextMonth,
            DialogControl::NextYear,
        ] {
            let rect = layout.control(control);
            let text = format!(" {} ", control.label());
            buf.set_string(rect.x, rect.y, &text, self.control_style(control, config));
        }

        let title_area = layout.title_text();
        let width = self.title.width() as u16;
        let x = title_area.x + title_area.width.saturating_sub(width) / 2;
        buf.set_string(x, title_area.y, &self.title, Style::default().fg(config.title_fg));
    }

    fn render_weekdays(&self, layout: &PickerLayout, buf: &mut Buffer) {
        let area = layout.weekdays;
        for (i, abbrev) in date::weekday_abbrevs().iter().enumerate() {
            let x = area.x + i as u16 * DAY_CELL_WIDTH + 1;
            buf.set_string(x, area.y, *abbrev, Style::default().add_modifier(Modifier::BOLD));
        }
    }

    fn render_cells(&self, layout: &PickerLayout, buf: &mut Buffer, config: &DisplayConfig) {
        for cell in self.cells.iter() {
            if cell.hidden {
                continue;
            }
            let rect = layout.cell(cell.index());
            let text = format!("{:>2}", cell.day);
            buf.set_string(rect.x + 1, rect.y, &text, self.cell_style(cell, config));
        }
    }

    fn render_buttons(&self, layout: &PickerLayout, buf: &mut Buffer, config: &DisplayConfig) {
        for control in [DialogControl::Ok, DialogControl::Cancel] {
            let rect = layout.control(control);
            let text = format!("[{}]", control.label());
            buf.set_string(rect.x, rect.y, &text, self.control_style(control, config));
        }
    }
}

impl RenderableWidget for CalendarDialogWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        let layout = PickerLayout::new(area);
        if layout.dialog.is_empty() {
            return;
        }

        Clear.render(layout.dialog, buf);

        let border_set = if config.use_unicode { border::ROUNDED } else { ASCII_BORDER };
        Block::default()
            .borders(Borders::ALL)
            .border_set(border_set)
            .render(layout.dialog, buf);

        // Everything below assumes the full dialog fits
        if !layout.dialog_fits() {
            return;
        }

        self.render_title_row(&layout, buf, config);
        self.render_weekdays(&layout, buf);
        self.render_cells(&layout, buf, config);
        self.render_buttons(&layout, buf, config);
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(crate::layout_constants::DIALOG_HEIGHT)
    }

    fn preferred_width(&self) -> Option<u16> {
        Some(crate::layout_constants::DIALOG_WIDTH)
    }
}
