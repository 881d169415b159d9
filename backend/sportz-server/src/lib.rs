pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;
pub mod store;

#[cfg(test)]
mod tests;

pub use api::{
    commentary::commentary::{create_commentary, list_commentary},
    data_response::DataResponse,
    error::ApiError,
    error::Result as ApiResult,
    list_query::ListQuery,
    match_id::parse_match_id,
    matches::matches::{create_match, get_match, list_matches, update_score},
    welcome::welcome,
};
pub use error::{Result as ServerResult, ServerError};
pub use routes::build_router;
pub use state::AppState;
pub use store::{InMemoryMatchStore, MatchStore, StoreError, StoreResult};
