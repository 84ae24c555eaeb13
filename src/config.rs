//! ContractConfig - per-deployment settings loaded from TOML.
//!
//! Every section has a default, so an empty document is a valid config:
//! no authorized principals, the stock bootstrap set, `info` logging.
//!
//! ```toml
//! [authorization]
//! enforce = true
//! principals = { admin = true, auditor = false }
//!
//! [[bootstrap]]
//! ID = "Item1"
//! Owner = "Alice"
//! Value = "A Yellow Lamp"
//!
//! [logging]
//! level = "item_ledger=debug,info"
//! format = "json"
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::auth::AuthorizationPolicy;
use crate::error::ContractError;
use crate::item::{default_bootstrap, Item};
use crate::logging::LoggingConfig;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractConfig {
    #[serde(default)]
    pub authorization: AuthorizationPolicy,
    /// Records written by `InitLedger`.
    #[serde(default = "default_bootstrap")]
    pub bootstrap: Vec<Item>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            authorization: AuthorizationPolicy::default(),
            bootstrap: default_bootstrap(),
            logging: LoggingConfig::default(),
        }
    }
}

impl ContractConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ContractError> {
        let config: Self =
            toml::from_str(source).map_err(|e| ContractError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ContractError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| {
            ContractError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&source)
    }

    /// Bootstrap ids must be non-empty and unique.
    pub fn validate(&self) -> Result<(), ContractError> {
        let mut seen = HashSet::new();
        for item in &self.bootstrap {
            if item.id.is_empty() {
                return Err(ContractError::Config(
                    "bootstrap item with empty ID".into(),
                ));
            }
            if !seen.insert(item.id.as_str()) {
                return Err(ContractError::Config(format!(
                    "duplicate bootstrap item ID {}",
                    item.id
                )));
            }
        }
        Ok(())
    }
}
