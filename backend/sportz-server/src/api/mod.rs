pub mod commentary;
pub mod data_response;
pub mod error;
pub mod list_query;
pub mod match_id;
pub mod matches;
pub mod welcome;
