use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const DEFAULT_MAX_LIST_LIMIT: usize = 100;
pub const DEFAULT_LIST_LIMIT: usize = 50;
pub const MAX_MAX_LIST_LIMIT: usize = 1000;

/// HTTP API settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Upper bound for `?limit=` on list endpoints
    pub max_list_limit: usize,
    /// Page size when no `?limit=` is given
    pub default_list_limit: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            max_list_limit: DEFAULT_MAX_LIST_LIMIT,
            default_list_limit: DEFAULT_LIST_LIMIT,
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_list_limit == 0 || self.max_list_limit > MAX_MAX_LIST_LIMIT {
            return Err(ConfigError::config(format!(
                "api.max_list_limit must be 1-{}, got {}",
                MAX_MAX_LIST_LIMIT, self.max_list_limit
            )));
        }

        if self.default_list_limit == 0 || self.default_list_limit > self.max_list_limit {
            return Err(ConfigError::config(format!(
                "api.default_list_limit must be 1-{} (max_list_limit), got {}",
                self.max_list_limit, self.default_list_limit
            )));
        }

        Ok(())
    }

    /// Page size for bounded lists. None when the request exceeds the maximum.
    pub fn checked_limit(&self, requested: Option<usize>) -> Option<usize> {
        match requested {
            None => Some(self.default_list_limit),
            Some(limit) if limit <= self.max_list_limit => Some(limit),
            Some(_) => None,
        }
    }

    /// Page size for feeds, which default to and saturate at the maximum
    pub fn clamp_limit(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.max_list_limit)
            .min(self.max_list_limit)
    }
}
