use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Invalid match status: {value} {location}")]
    InvalidMatchStatus {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Field the error refers to, when it is a field validation failure
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => field.as_deref(),
            Self::InvalidMatchStatus { .. } => Some("status"),
        }
    }

    /// Message without the source location suffix
    pub fn message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::InvalidMatchStatus { value, .. } => format!("invalid match status: {value}"),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
