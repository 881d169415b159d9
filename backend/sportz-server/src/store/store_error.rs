use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Match {match_id} not found {location}")]
    MatchNotFound {
        match_id: i64,
        location: ErrorLocation,
    },

    #[error("Storage failure: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl StoreError {
    #[track_caller]
    pub fn match_not_found(match_id: i64) -> Self {
        Self::MatchNotFound {
            match_id,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
