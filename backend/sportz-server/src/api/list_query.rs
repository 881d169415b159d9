use crate::{ApiError, ApiResult};

use sportz_config::ApiConfig;

use serde::Deserialize;

/// `?limit=N` on list endpoints
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub limit: Option<usize>,
}

impl ListQuery {
    /// Page size for the match list: 1 to the configured maximum, else 400
    pub fn resolve_bounded(&self, config: &ApiConfig) -> ApiResult<usize> {
        self.reject_zero()?;
        config.checked_limit(self.limit).ok_or_else(|| {
            ApiError::validation(
                format!("limit must be at most {}", config.max_list_limit),
                "limit",
            )
        })
    }

    /// Page size for commentary feeds: defaults to the maximum and is clamped to it
    pub fn resolve_clamped(&self, config: &ApiConfig) -> ApiResult<usize> {
        self.reject_zero()?;
        Ok(config.clamp_limit(self.limit))
    }

    fn reject_zero(&self) -> ApiResult<()> {
        if self.limit == Some(0) {
            return Err(ApiError::validation(
                "limit must be a positive integer",
                "limit",
            ));
        }
        Ok(())
    }
}
