use chrono::NaiveDate;
use thiserror::Error;

/// Calendar construction and configuration errors
///
/// Navigation never fails; malformed input there is ignored. These errors only
/// surface where a caller hands us configuration up front.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Minimum date {min} is after maximum date {max}")]
    InvalidBounds { min: NaiveDate, max: NaiveDate },

    #[error("Unknown date format '{0}'. Use DMY, MDY or YMD")]
    UnknownDateFormat(String),

    #[error("Invalid date '{text}' for format {format}")]
    InvalidDate { text: String, format: String },
}

/// Result type for calendar operations
pub type CalendarResult<T> = Result<T, CalendarError>;
