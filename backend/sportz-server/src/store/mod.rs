mod in_memory_match_store;
mod match_store;
mod store_error;

pub use in_memory_match_store::InMemoryMatchStore;
pub use match_store::MatchStore;
pub use store_error::{Result as StoreResult, StoreError};
