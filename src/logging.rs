//! Logging configuration and initialization.

use serde::{Deserialize, Serialize};

#[cfg(feature = "subscriber")]
use crate::error::ContractError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directives, e.g. `"info"` or `"item_ledger=debug,warn"`.
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

fn default_level() -> String {
    "info".into()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

impl LoggingConfig {
    /// Install a global tracing subscriber for this configuration.
    ///
    /// Fails if the filter does not parse or a global subscriber is already
    /// installed.
    #[cfg(feature = "subscriber")]
    pub fn init(&self) -> Result<(), ContractError> {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_new(&self.level).map_err(|e| {
            ContractError::Config(format!("invalid log level {:?}: {}", self.level, e))
        })?;

        let installed = match self.format {
            LogFormat::Json => fmt().json().with_env_filter(filter).try_init(),
            LogFormat::Compact => fmt().compact().with_env_filter(filter).try_init(),
            LogFormat::Pretty => fmt().pretty().with_env_filter(filter).try_init(),
        };
        installed.map_err(|e| ContractError::Config(e.to_string()))
    }
}
