mod error;
mod list_query;
mod match_id;
