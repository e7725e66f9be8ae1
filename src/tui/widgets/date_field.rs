/// DateFieldWidget - the text input, trigger button and trigger label
///
/// The trigger label is the accessible text of the button; in the terminal it
/// is shown as a hint line under the field.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};
use unicode_width::UnicodeWidthStr;

use super::RenderableWidget;
use crate::calendar::FocusTarget;
use crate::config::DisplayConfig;
use crate::layout_constants::INPUT_WIDTH;
use crate::tui::layout::PickerLayout;

#[derive(Clone)]
pub struct DateFieldWidget {
    pub label: String,
    pub value: String,
    pub trigger_label: String,
    pub focused: FocusTarget,
}

impl DateFieldWidget {
    /// Visible part of the value; the tail is kept when it overflows
    fn visible_value(&self) -> &str {
        let capacity = (INPUT_WIDTH - 2) as usize;
        let mut start = 0;
        while self.value[start..].width() > capacity {
            match self.value[start..].chars().next() {
                Some(c) => start += c.len_utf8(),
                None => break,
            }
        }
        &self.value[start..]
    }

    fn focus_style(&self, target: FocusTarget, config: &DisplayConfig) -> Style {
        if self.focused == target {
            Style::default()
                .fg(config.selection_fg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        }
    }
}

impl RenderableWidget for DateFieldWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        let layout = PickerLayout::new(area);

        buf.set_string(layout.label.x, layout.label.y, &self.label, Style::default());

        let input_style = self.focus_style(FocusTarget::Input, config);
        let padded = format!("[{:<width$}]", self.visible_value(), width = (INPUT_WIDTH - 2) as usize);
        buf.set_stringn(layout.input.x, layout.input.y, &padded, layout.input.width as usize, input_style);

        let trigger_style = self.focus_style(FocusTarget::Trigger, config);
        buf.set_stringn(layout.trigger.x, layout.trigger.y, "[Cal]", layout.trigger.width as usize, trigger_style);

        buf.set_stringn(
            layout.trigger_label.x,
            layout.trigger_label.y,
            &self.trigger_label,
            layout.trigger_label.width as usize,
            Style::default().add_modifier(Modifier::ITALIC),
        );
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(crate::layout_constants::FIELD_HEIGHT)
    }
}
