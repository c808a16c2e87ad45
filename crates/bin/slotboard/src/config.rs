//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `slotboard.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::time::Duration;

use serde::Deserialize;

use slotboard_app::board::BoardConfig;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Grid data endpoint settings.
    pub source: SourceConfig,
    /// Refresh cadence and banner settings.
    pub refresh: RefreshConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Where occupancy data comes from.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Full URL of the grid data endpoint.
    pub endpoint: String,
}

/// Refresh timing.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    /// Seconds between periodic refreshes.
    pub interval_secs: u64,
    /// Seconds before an error banner dismisses itself.
    pub error_dismiss_secs: u64,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `slotboard.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if
    /// the resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("slotboard.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("SLOTBOARD_ENDPOINT") {
            self.source.endpoint = val;
        }
        if let Ok(val) = std::env::var("SLOTBOARD_REFRESH_SECS") {
            if let Ok(secs) = val.parse() {
                self.refresh.interval_secs = secs;
            }
        }
        if let Ok(val) = std::env::var("SLOTBOARD_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.source.endpoint.is_empty() {
            return Err(ConfigError::Validation(
                "source endpoint must not be empty".to_string(),
            ));
        }
        if self.refresh.interval_secs == 0 {
            return Err(ConfigError::Validation(
                "refresh interval must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// The grid data endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.source.endpoint
    }

    /// Board tuning derived from the refresh section.
    #[must_use]
    pub fn board_config(&self) -> BoardConfig {
        BoardConfig {
            refresh_interval: Duration::from_secs(self.refresh.interval_secs),
            error_dismiss_after: Duration::from_secs(self.refresh.error_dismiss_secs),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:8069/occupancy/grid_data".to_string(),
        }
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            interval_secs: 60,
            error_dismiss_secs: 5,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "slotboard=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
