use chrono::NaiveDate;
use tracing::{debug, trace, warn};

use super::action::{Action, PointerTarget};
use super::grid::CalendarGrid;
use super::host::{
    DialogControl, FocusTarget, Host, ATTR_DATE_FORMAT, ATTR_MAX_DATE, ATTR_MIN_DATE, TRIGGER_LABEL,
};
use crate::date::{self, Bounds, DateFormat};
use crate::error::{CalendarError, CalendarResult};

/// Construction-time configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigatorOptions {
    pub min_date: Option<NaiveDate>,
    pub max_date: Option<NaiveDate>,
    pub format: DateFormat,
}

/// Calendar state machine behind a date picker
///
/// Owns the focused date (keyboard cursor), the committed selection, the
/// optional bounds and the open/closed dialog state, and keeps the 42-cell
/// grid in step with them. All UI access goes through the injected [`Host`].
#[derive(Debug)]
pub struct CalendarNavigator<H: Host> {
    host: H,
    options: NavigatorOptions,
    bounds: Bounds,
    format: DateFormat,
    focused: NaiveDate,
    selected: Option<NaiveDate>,
    open: bool,
    active_control: DialogControl,
    grid: CalendarGrid,
    trigger_label: String,
}

impl<H: Host> CalendarNavigator<H> {
    /// Create a navigator attached to `host`
    ///
    /// Fails only when both bounds are given and the minimum is after the
    /// maximum.
    pub fn new(mut host: H, options: NavigatorOptions) -> CalendarResult<Self> {
        let bounds = Bounds::new(options.min_date, options.max_date);
        if let (Some(min), Some(max)) = (bounds.min, bounds.max) {
            if min > max {
                return Err(CalendarError::InvalidBounds { min, max });
            }
        }

        let focused = bounds.clamp(host.today());
        let grid = CalendarGrid::new(focused, None, &bounds);
        host.set_trigger_label(TRIGGER_LABEL);

        Ok(Self {
            host,
            options,
            bounds,
            format: options.format,
            focused,
            selected: None,
            open: false,
            active_control: DialogControl::Grid,
            grid,
            trigger_label: TRIGGER_LABEL.to_string(),
        })
    }

    pub fn focused(&self) -> NaiveDate {
        self.focused
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn format(&self) -> DateFormat {
        self.format
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn active_control(&self) -> DialogControl {
        self.active_control
    }

    pub fn grid(&self) -> &CalendarGrid {
        &self.grid
    }

    /// Dialog title, "<MonthName> <Year>"
    pub fn title(&self) -> &str {
        self.grid.title()
    }

    pub fn trigger_label(&self) -> &str {
        &self.trigger_label
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Re-read `data-dateformat`, `data-mindate` and `data-maxdate`
    ///
    /// Attributes override the construction options. Unparseable attributes
    /// fall back to the options; an inverted pair is dropped as a whole.
    fn apply_host_attributes(&mut self) {
        self.format = self
            .host
            .data_attribute(ATTR_DATE_FORMAT)
            .and_then(|s| s.parse().ok())
            .unwrap_or(self.options.format);

        let format = self.format;
        let read = |value: Option<String>| value.and_then(|s| date::parse_date(&s, format));
        let min = read(self.host.data_attribute(ATTR_MIN_DATE)).or(self.options.min_date);
        let max = read(self.host.data_attribute(ATTR_MAX_DATE)).or(self.options.max_date);

        let bounds = Bounds::new(min, max);
        if bounds.is_inverted() {
            warn!("NAV: Ignoring date attributes, min {:?} is after max {:?}", min, max);
            self.bounds = Bounds::new(self.options.min_date, self.options.max_date);
        } else {
            self.bounds = bounds;
        }
    }

    /// Show the dialog
    ///
    /// A parseable input value becomes both the focused and the selected
    /// date; otherwise the previous focus is kept. No-op when already open.
    pub fn open(&mut self) {
        if self.open {
            trace!("NAV: open() while already open - ignoring");
            return;
        }

        self.apply_host_attributes();

        let value = self.host.input_value();
        if let Some(parsed) = date::parse_date(&value, self.format) {
            debug!("NAV: Opening on input value {}", parsed);
            self.focused = parsed;
            self.selected = Some(parsed);
        } else if !value.trim().is_empty() {
            debug!("NAV: Ignoring unparseable input value '{}'", value);
        }

        self.focused = self.bounds.clamp(self.focused);
        self.grid.update_calendar(self.focused, self.selected, &self.bounds);
        self.open = true;
        self.active_control = DialogControl::Grid;
        self.host.focus(FocusTarget::Dialog(DialogControl::Grid));
    }

    /// Hide the dialog and hand focus back to the trigger. No-op when closed.
    pub fn close(&mut self) {
        if !self.open {
            return;
        }
        debug!("NAV: Closing dialog");
        self.open = false;
        self.host.focus(FocusTarget::Trigger);
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Commit `date` to the host input and close
    ///
    /// The date is committed as given. Disabled cells never reach here; the
    /// pointer path drops them before selecting.
    pub fn select_date(&mut self, date: NaiveDate) {
        debug!("NAV: Selected {}", date);
        self.selected = Some(date);
        self.host.set_input_value(&date::format_input_value(date));

        self.trigger_label = format!("{}. Selected date is {}", TRIGGER_LABEL, date::format_human(date));
        self.host.set_trigger_label(&self.trigger_label);

        self.go_to_date(date, false);
        self.close();
    }

    /// Move the focused date, clamped into the bounds
    ///
    /// The grid is relabelled only when the month changes; otherwise only the
    /// focus and selection marks move.
    pub fn go_to_date(&mut self, date: NaiveDate, should_focus: bool) {
        let target = self.bounds.clamp(date);
        if target != date {
            trace!("NAV: Clamped {} to {}", date, target);
        }

        self.focused = target;
        if date::same_month(target, self.grid.month_start()) {
            self.grid.mark_selected(self.selected);
            self.grid.mark_focus(target);
        } else {
            self.grid.update_calendar(target, self.selected, &self.bounds);
        }

        if should_focus && self.open {
            self.active_control = DialogControl::Grid;
            self.host.focus(FocusTarget::Dialog(DialogControl::Grid));
        }
    }

    pub fn next_day(&mut self) {
        self.go_to_date(date::add_days(self.focused, 1), true);
    }

    pub fn prev_day(&mut self) {
        self.go_to_date(date::add_days(self.focused, -1), true);
    }

    pub fn next_week(&mut self) {
        self.go_to_date(date::add_days(self.focused, 7), true);
    }

    pub fn prev_week(&mut self) {
        self.go_to_date(date::add_days(self.focused, -7), true);
    }

    pub fn first_day_of_week(&mut self) {
        self.go_to_date(date::start_of_week(self.focused), true);
    }

    pub fn last_day_of_week(&mut self) {
        self.go_to_date(date::end_of_week(self.focused), true);
    }

    pub fn next_month(&mut self) {
        self.go_to_date(date::add_months(self.focused, 1), true);
    }

    pub fn prev_month(&mut self) {
        self.go_to_date(date::add_months(self.focused, -1), true);
    }

    pub fn next_year(&mut self) {
        self.go_to_date(date::add_years(self.focused, 1), true);
    }

    pub fn prev_year(&mut self) {
        self.go_to_date(date::add_years(self.focused, -1), true);
    }

    fn focus_control(&mut self, control: DialogControl) {
        self.active_control = control;
        self.host.focus(FocusTarget::Dialog(control));
    }

    /// Tab inside the dialog; wraps from the last control to the first
    pub fn focus_next_control(&mut self) {
        if self.open {
            self.focus_control(self.active_control.next());
        }
    }

    /// Shift+Tab inside the dialog; wraps from the first control to the last
    pub fn focus_prev_control(&mut self) {
        if self.open {
            self.focus_control(self.active_control.prev());
        }
    }

    /// Enter/Space on the active control
    ///
    /// Month and year buttons keep focus on themselves.
    pub fn activate_control(&mut self) {
        if !self.open {
            return;
        }
        match self.active_control {
            DialogControl::Grid | DialogControl::Ok => self.select_date(self.focused),
            DialogControl::Cancel => self.close(),
            DialogControl::PrevYear => self.go_to_date(date::add_years(self.focused, -1), false),
            DialogControl::PrevMonth => self.go_to_date(date::add_months(self.focused, -1), false),
            DialogControl::NextMonth => self.go_to_date(date::add_months(self.focused, 1), false),
            DialogControl::NextYear => self.go_to_date(date::add_years(self.focused, 1), false),
        }
    }

    /// Pointer press, already hit-tested by the host
    pub fn pointer_down(&mut self, target: PointerTarget) {
        match target {
            PointerTarget::Outside => {
                if self.open {
                    debug!("NAV: Pointer down outside dialog - closing");
                    self.close();
                }
            }
            PointerTarget::Trigger => self.toggle(),
            PointerTarget::Input => {
                if !self.open {
                    self.host.focus(FocusTarget::Input);
                }
            }
            PointerTarget::Dialog => {}
            PointerTarget::Control(control) => {
                if self.open {
                    self.focus_control(control);
                    self.activate_control();
                }
            }
            PointerTarget::Cell(index) => {
                if !self.open {
                    return;
                }
                match self.grid.cell(index) {
                    Some(cell) if cell.is_interactive() => {
                        let date = cell.date;
                        self.select_date(date);
                    }
                    _ => trace!("NAV: Ignoring click on inactive cell {}", index),
                }
            }
        }
    }

    /// Apply an action; returns false when the action does not apply in the
    /// current state and the caller should fall back to default handling
    pub fn dispatch(&mut self, action: Action) -> bool {
        trace!("NAV: Dispatching {:?}", action);

        if action.is_navigation() && !self.open {
            return false;
        }

        match action {
            Action::Open => self.open(),
            Action::Close => self.close(),
            Action::Toggle => self.toggle(),
            Action::NextDay => self.next_day(),
            Action::PrevDay => self.prev_day(),
            Action::NextWeek => self.next_week(),
            Action::PrevWeek => self.prev_week(),
            Action::FirstDayOfWeek => self.first_day_of_week(),
            Action::LastDayOfWeek => self.last_day_of_week(),
            Action::NextMonth => self.next_month(),
            Action::PrevMonth => self.prev_month(),
            Action::NextYear => self.next_year(),
            Action::PrevYear => self.prev_year(),
            Action::GoToDate(date) => self.go_to_date(date, true),
            Action::SelectDate(date) => self.select_date(date),
            Action::SelectFocused => self.select_date(self.focused),
            Action::FocusNextControl => self.focus_next_control(),
            Action::FocusPrevControl => self.focus_prev_control(),
            Action::ActivateControl => self.activate_control(),
            Action::PointerDown(target) => self.pointer_down(target),
        }
        true
    }
}
