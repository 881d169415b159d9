pub mod commentary;
pub mod match_record;
pub mod match_status;
pub mod new_commentary;
pub mod new_match;
pub mod score_update;

use crate::{CoreError, CoreResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Reject blank strings, reporting the offending field
#[track_caller]
pub(crate) fn require_non_empty(value: &str, field: &str) -> CoreResult<()> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation {
            message: format!("{field} must be a non-empty string"),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(())
}

/// Reject negative integers, reporting the offending field
#[track_caller]
pub(crate) fn require_non_negative(value: i32, field: &str) -> CoreResult<()> {
    if value < 0 {
        return Err(CoreError::Validation {
            message: format!("{field} must be zero or greater, got {value}"),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(())
}
