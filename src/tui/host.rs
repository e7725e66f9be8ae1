use chrono::NaiveDate;
use std::collections::HashMap;
use tracing::trace;

use crate::calendar::host::{FocusTarget, Host, TRIGGER_LABEL};

/// Terminal-side state the navigator reads and writes
///
/// Holds the text field contents, the `data-*` attributes taken from config
/// and CLI, the trigger's accessible label and where the cursor is.
#[derive(Debug, Clone)]
pub struct TerminalHost {
    value: String,
    attributes: HashMap<String, String>,
    trigger_label: String,
    focused: FocusTarget,
    today: NaiveDate,
}

impl TerminalHost {
    pub fn new(value: String, attributes: HashMap<String, String>, today: NaiveDate) -> Self {
        Self {
            value,
            attributes,
            trigger_label: TRIGGER_LABEL.to_string(),
            focused: FocusTarget::Input,
            today,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn trigger_label(&self) -> &str {
        &self.trigger_label
    }

    pub fn focused(&self) -> FocusTarget {
        self.focused
    }

    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn pop_char(&mut self) {
        self.value.pop();
    }
}

impl Host for TerminalHost {
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
        trace!("HOST: Focus {:?} -> {:?}", self.focused, target);
        self.focused = target;
    }

    fn today(&self) -> NaiveDate {
        self.today
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_editing() {
        let mut host = TerminalHost::new(String::new(), HashMap::new(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        for c in "1/2/2024".chars() {
            host.push_char(c);
        }
        host.pop_char();
        assert_eq!(host.value(), "1/2/202");
        assert_eq!(host.input_value(), "1/2/202");
        assert_eq!(host.focused(), FocusTarget::Input);
    }
}
