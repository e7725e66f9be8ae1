use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{buffer::Buffer, layout::Rect};
use tracing::debug;

use crate::calendar::{
    key_to_action, Action, CalendarNavigator, FocusTarget, Host, NavigatorOptions,
};
use crate::config::DisplayConfig;
use crate::date::DateFormat;
use crate::error::CalendarResult;
use crate::tui::host::TerminalHost;
use crate::tui::layout::PickerLayout;
use crate::tui::widgets::{CalendarDialogWidget, DateFieldWidget, RenderableWidget};

/// The interactive picker: one text field, one trigger, one dialog
///
/// Keys go to the navigator first; whatever it does not consume gets the
/// field's default handling (typing, tabbing between input and trigger).
pub struct App {
    navigator: CalendarNavigator<TerminalHost>,
    should_quit: bool,
}

impl App {
    pub fn new(host: TerminalHost, options: NavigatorOptions) -> CalendarResult<Self> {
        Ok(Self {
            navigator: CalendarNavigator::new(host, options)?,
            should_quit: false,
        })
    }

    pub fn navigator(&self) -> &CalendarNavigator<TerminalHost> {
        &self.navigator
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Current text of the input field
    pub fn value(&self) -> &str {
        self.navigator.host().value()
    }

    fn field_label(&self) -> String {
        let pattern = match self.navigator.format() {
            DateFormat::Dmy => "dd/mm/yyyy",
            DateFormat::Mdy => "mm/dd/yyyy",
            DateFormat::Ymd => "yyyy/mm/dd",
        };
        format!("Date ({})", pattern)
    }

    fn quit(&mut self) {
        debug!("APP: Quitting");
        self.should_quit = true;
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        if let Some(action) = key_to_action(key, &self.navigator) {
            if self.navigator.dispatch(action) {
                return;
            }
        }

        // Dialog closed (or key not consumed): default field handling
        if self.navigator.is_open() {
            return;
        }

        match self.navigator.host().focused() {
            FocusTarget::Trigger => self.handle_trigger_key(key),
            _ => self.handle_input_key(key),
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.navigator.host_mut().push_char(c);
            }
            KeyCode::Backspace => self.navigator.host_mut().pop_char(),
            KeyCode::Tab => self.navigator.host_mut().focus(FocusTarget::Trigger),
            KeyCode::Enter | KeyCode::Esc => self.quit(),
            _ => {}
        }
    }

    fn handle_trigger_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.navigator.dispatch(Action::Toggle);
            }
            KeyCode::Tab | KeyCode::BackTab => self.navigator.host_mut().focus(FocusTarget::Input),
            KeyCode::Esc => self.quit(),
            _ => {}
        }
    }

    /// Left-button presses are hit-tested against the layout of `area`
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let layout = PickerLayout::new(area);
        let target = layout.hit_test(mouse.column, mouse.row, self.navigator.is_open());
        debug!("MOUSE: ({}, {}) -> {:?}", mouse.column, mouse.row, target);
        self.navigator.dispatch(Action::PointerDown(target));
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        let field = DateFieldWidget {
            label: self.field_label(),
            value: self.value().to_string(),
            trigger_label: self.navigator.trigger_label().to_string(),
            focused: self.navigator.host().focused(),
        };
        field.render(area, buf, config);

        if self.navigator.is_open() {
            CalendarDialogWidget::from_navigator(&self.navigator).render(area, buf, config);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::DialogControl;
    use crate::tui::testing::{buffer_line, create_app};
    use crate::tui::widgets::testing::test_config;
    use chrono::NaiveDate;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn area() -> Rect {
        Rect::new(0, 0, 80, 24)
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_typing_edits_input() {
        let mut app = create_app("", NavigatorOptions::default());
        for c in "1/2/2025".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.value(), "1/2/202");
        assert!(!app.should_quit());
    }

    #[test]
    fn test_tab_then_enter_opens_dialog_on_typed_date() {
        let mut app = create_app("", NavigatorOptions::default());
        for c in "3/2/2025".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.navigator().host().focused(), FocusTarget::Trigger);

        app.handle_key(key(KeyCode::Enter));
        assert!(app.navigator().is_open());
        assert_eq!(app.navigator().focused(), ymd(2025, 2, 3));
        assert_eq!(app.navigator().host().focused(), FocusTarget::Dialog(DialogControl::Grid));
    }

    #[test]
    fn test_keyboard_select_commits_and_returns_to_trigger() {
        let mut app = create_app("10/03/2024", NavigatorOptions::default());
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Char(' ')));
        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));

        assert!(!app.navigator().is_open());
        assert_eq!(app.value(), "18/03/2024");
        assert_eq!(app.navigator().host().focused(), FocusTarget::Trigger);
        assert_eq!(
            app.navigator().trigger_label(),
            "Choose date. Selected date is Monday 18 March 2024"
        );
    }

    #[test]
    fn test_escape_closes_dialog_without_quitting() {
        let mut app = create_app("", NavigatorOptions::default());
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Esc));
        assert!(!app.navigator().is_open());
        assert!(!app.should_quit());

        app.handle_key(key(KeyCode::Esc));
        assert!(app.should_quit());
    }

    #[test]
    fn test_ctrl_c_quits_even_when_open() {
        let mut app = create_app("", NavigatorOptions::default());
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }

    #[test]
    fn test_release_events_ignored() {
        let mut app = create_app("", NavigatorOptions::default());
        app.handle_key(KeyEvent {
            code: KeyCode::Char('x'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(app.value(), "");
    }

    #[test]
    fn test_mouse_trigger_cell_and_outside() {
        let mut app = create_app("", NavigatorOptions::default());
        let layout = PickerLayout::new(area());

        app.handle_mouse(click(layout.trigger.x, layout.trigger.y), area());
        assert!(app.navigator().is_open());

        // June 2024 starts on a Saturday, so cell 6 is June 1
        let cell = layout.cell(6);
        app.handle_mouse(click(cell.x + 1, cell.y), area());
        assert!(!app.navigator().is_open());
        assert_eq!(app.value(), "01/06/2024");

        app.handle_mouse(click(layout.trigger.x, layout.trigger.y), area());
        assert!(app.navigator().is_open());
        app.handle_mouse(click(70, 20), area());
        assert!(!app.navigator().is_open());
        assert_eq!(app.value(), "01/06/2024");
    }

    #[test]
    fn test_click_in_clipped_dialog_commits_nothing() {
        let short = Rect::new(0, 0, 80, 12);
        let mut app = create_app("", NavigatorOptions::default());
        let layout = PickerLayout::new(short);

        app.handle_mouse(click(layout.trigger.x, layout.trigger.y), short);
        assert!(app.navigator().is_open());

        let mut buf = Buffer::empty(short);
        app.render(short, &mut buf, &test_config());
        assert_eq!(buffer_line(&buf, 6).trim_end(), format!("│{}│", " ".repeat(28)));

        // June 1 would sit in cell 6, but nothing was drawn there
        let cell = layout.cell(6);
        app.handle_mouse(click(cell.x + 1, cell.y), short);
        assert!(app.navigator().is_open());
        assert_eq!(app.value(), "");
        assert_eq!(app.navigator().selected(), None);
    }

    #[test]
    fn test_render_shows_dialog_only_when_open() {
        let mut app = create_app("", NavigatorOptions::default());
        let config = test_config();

        let mut buf = Buffer::empty(area());
        app.render(area(), &mut buf, &config);
        assert!(buffer_line(&buf, 0).starts_with("Date (dd/mm/yyyy)"));
        assert!(!buffer_line(&buf, 4).contains("June 2024"));

        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Enter));
        let mut buf = Buffer::empty(area());
        app.render(area(), &mut buf, &config);
        assert!(buffer_line(&buf, 4).contains("June 2024"));
    }
}
