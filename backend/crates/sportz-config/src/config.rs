use crate::{
    ApiConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, LoggingConfig, ServerConfig, WebSocketConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub websocket: WebSocketConfig,
    pub api: ApiConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. SPORTZ_CONFIG_DIR env var, else ./.sportz/
    /// 2. config.toml in that directory if it exists, else defaults
    /// 3. SPORTZ_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_dir()?.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: SPORTZ_CONFIG_DIR env var > ./.sportz/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.websocket.validate()?;
        self.api.validate()?;

        for (name, value) in [
            ("logging.dir", Some(self.logging.dir.as_str())),
            ("logging.file", self.logging.file.as_deref()),
        ] {
            if let Some(value) = value
                && (Path::new(value).is_absolute() || value.contains(".."))
            {
                return Err(ConfigError::logging(format!(
                    "{name} must be relative and cannot contain '..'"
                )));
            }
        }

        Ok(())
    }

    /// Absolute path of the log file, when file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref filename) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(filename),
            )),
            None => Ok(None),
        }
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (max {} connections)",
            self.server.host, self.server.port, self.server.max_connections
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!(
            "  websocket: buffer={}, heartbeat={}s/{}s, max_message={}B",
            self.websocket.send_buffer_size,
            self.websocket.heartbeat_interval_secs,
            self.websocket.heartbeat_timeout_secs,
            self.websocket.max_message_size
        );
        info!(
            "  api: list limit default={}, max={}",
            self.api.default_list_limit, self.api.max_list_limit
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("SPORTZ_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("SPORTZ_SERVER_PORT", &mut self.server.port);
        Self::apply_env_parse(
            "SPORTZ_SERVER_MAX_CONNECTIONS",
            &mut self.server.max_connections,
        );

        // Logging
        Self::apply_env_parse("SPORTZ_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("SPORTZ_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("SPORTZ_LOG_FILE", &mut self.logging.file);
        Self::apply_env_string("SPORTZ_LOG_DIR", &mut self.logging.dir);

        // WebSocket
        Self::apply_env_parse(
            "SPORTZ_WS_SEND_BUFFER_SIZE",
            &mut self.websocket.send_buffer_size,
        );
        Self::apply_env_parse(
            "SPORTZ_WS_HEARTBEAT_INTERVAL_SECS",
            &mut self.websocket.heartbeat_interval_secs,
        );
        Self::apply_env_parse(
            "SPORTZ_WS_HEARTBEAT_TIMEOUT_SECS",
            &mut self.websocket.heartbeat_timeout_secs,
        );
        Self::apply_env_parse(
            "SPORTZ_WS_MAX_MESSAGE_SIZE",
            &mut self.websocket.max_message_size,
        );

        // API
        Self::apply_env_parse("SPORTZ_API_MAX_LIST_LIMIT", &mut self.api.max_list_limit);
        Self::apply_env_parse(
            "SPORTZ_API_DEFAULT_LIST_LIMIT",
            &mut self.api.default_list_limit,
        );
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Unparseable values are ignored and the previous value kept
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
