use chrono::NaiveDate;

/// Hit-test result for a pointer press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// Anywhere that is not the input, trigger or dialog
    Outside,
    Input,
    Trigger,
    /// Dialog chrome that is not a day cell or button
    Dialog,
    /// A dialog button
    Control(super::host::DialogControl),
    /// Day cell by grid index (row-major)
    Cell(usize),
}

/// Calendar transitions
///
/// Every state change of the navigator goes through one of these. They are
/// produced by the key map, by pointer hit testing, or directly by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Open,
    Close,
    Toggle,

    // Focus date movement
    NextDay,
    PrevDay,
    NextWeek,
    PrevWeek,
    FirstDayOfWeek,
    LastDayOfWeek,
    NextMonth,
    PrevMonth,
    NextYear,
    PrevYear,
    GoToDate(NaiveDate),

    /// Commit the given date
    SelectDate(NaiveDate),
    /// Commit whatever is focused
    SelectFocused,

    // Focus trap inside the dialog
    FocusNextControl,
    FocusPrevControl,
    /// Enter/Space on the active dialog control
    ActivateControl,

    PointerDown(PointerTarget),
}

impl Action {
    /// Whether the action moves the focused date
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::NextDay
                | Self::PrevDay
                | Self::NextWeek
                | Self::PrevWeek
                | Self::FirstDayOfWeek
                | Self::LastDayOfWeek
                | Self::NextMonth
                | Self::PrevMonth
                | Self::NextYear
                | Self::PrevYear
                | Self::GoToDate(_)
        )
    }
}
