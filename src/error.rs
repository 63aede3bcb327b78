use std::io;

use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("input closed before the profile was complete")]
    InputClosed,
    #[error("logging setup failed: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum FieldError {
    #[error("{field} cannot be empty. Try again")]
    Empty { field: &'static str },
    #[error("{field} must be at least {min} characters long. Try again")]
    TooShort { field: &'static str, min: usize },
    #[error("{field} is too long (maximum is {max} characters). Try again")]
    TooLong { field: &'static str, max: usize },
    #[error("{field} can only contain {allowed}. Try again")]
    InvalidCharacters {
        field: &'static str,
        allowed: &'static str,
    },
    #[error("Invalid date format. Please use the MM/DD/YYYY format (03/02/2026)")]
    BadDateFormat,
    #[error("Birthdate cannot be in the future. Try again")]
    FutureDate,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum FieldWarning {
    #[error("Warning: that birthdate is more than {years} years ago. Accepting it anyway")]
    OlderThan { years: u32 },
}
