use chrono::NaiveDate;
use std::collections::HashMap;

/// Data attribute holding the earliest selectable date
pub const ATTR_MIN_DATE: &str = "mindate";
/// Data attribute holding the latest selectable date
pub const ATTR_MAX_DATE: &str = "maxdate";
/// Data attribute holding the parse order (DMY, MDY, YMD)
pub const ATTR_DATE_FORMAT: &str = "dateformat";

/// Trigger label before anything has been chosen
pub const TRIGGER_LABEL: &str = "Choose date";

/// Focusable controls inside the open dialog, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogControl {
    PrevYear,
    PrevMonth,
    NextMonth,
    NextYear,
    #[default]
    Grid,
    Ok,
    Cancel,
}

impl DialogControl {
    pub const ALL: [DialogControl; 7] = [
        DialogControl::PrevYear,
        DialogControl::PrevMonth,
        DialogControl::NextMonth,
        DialogControl::NextYear,
        DialogControl::Grid,
        DialogControl::Ok,
        DialogControl::Cancel,
    ];

    fn position(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }

    /// Next control in tab order, wrapping from the last to the first
    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    /// Previous control in tab order, wrapping from the first to the last
    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.position() + len - 1) % len]
    }

    pub fn label(self) -> &'static str {
        match self {
            DialogControl::PrevYear => "«",
            DialogControl::PrevMonth => "‹",
            DialogControl::NextMonth => "›",
            DialogControl::NextYear => "»",
            DialogControl::Grid => "",
            DialogControl::Ok => "OK",
            DialogControl::Cancel => "Cancel",
        }
    }
}

/// Where keyboard focus currently sits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Input,
    Trigger,
    Dialog(DialogControl),
}

/// What the navigator needs from the page hosting it
///
/// The navigator never reaches for globals; every read and write of the
/// surrounding UI goes through this trait.
pub trait Host {
    /// Current text of the host input
    fn input_value(&self) -> String;

    fn set_input_value(&mut self, value: &str);

    /// `data-*` attribute on the input, name without the `data-` prefix
    fn data_attribute(&self, name: &str) -> Option<String>;

    /// Accessible label text of the trigger button
    fn set_trigger_label(&mut self, label: &str);

    /// Move keyboard focus
    fn focus(&mut self, target: FocusTarget);

    /// Date source used for the initial focus
    fn today(&self) -> NaiveDate;
}

/// In-memory host for tests and headless use
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryHost {
    pub value: String,
    pub attributes: HashMap<String, String>,
    pub trigger_label: String,
    pub focused: FocusTarget,
    pub today: NaiveDate,
}

impl MemoryHost {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            value: String::new(),
            attributes: HashMap::new(),
            trigger_label: TRIGGER_LABEL.to_string(),
            focused: FocusTarget::Input,
            today,
        }
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }

    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }
}

impl Host for MemoryHost {
    fn input_value(&self) -> String {
        self.value.clone()
    }

    fn set_input_value(&mut self, value: &str) {
        self.value = value.to_string();
    }

    fn data_attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }

    fn set_trigger_label(&mut self, label: &str) {
        self.trigger_label = label.to_string();
    }

    fn focus(&mut self, target: FocusTarget) {
        self.focused = target;
    }

    fn today(&self) -> NaiveDate {
        self.today
    }
}
