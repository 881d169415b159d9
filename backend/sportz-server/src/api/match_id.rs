use crate::{ApiError, ApiResult};

/// Parse the `{id}` path segment; only positive integers name a match
pub fn parse_match_id(raw: &str) -> ApiResult<i64> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ApiError::validation(
            format!("match id must be a positive integer, got '{raw}'"),
            "id",
        )),
    }
}
