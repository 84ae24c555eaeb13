//! AuthorizationPolicy - certificate common name allow-list.
//!
//! Maps an already-authenticated caller name to an allow/deny decision.
//! Certificate chain validation is not done here.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ContractError;

/// Allow-list keyed by certificate subject common name.
///
/// ## Example
///
/// ```ignore
/// let policy = AuthorizationPolicy::new().allow("admin").deny("auditor");
/// assert!(policy.check("admin").is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationPolicy {
    /// Gate state-changing transactions on the allow-list at dispatch.
    #[serde(default)]
    pub enforce: bool,
    #[serde(default)]
    pub principals: BTreeMap<String, bool>,
}

impl AuthorizationPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `principal` to true.
    pub fn allow(mut self, principal: impl Into<String>) -> Self {
        self.principals.insert(principal.into(), true);
        self
    }

    /// Map `principal` to false.
    pub fn deny(mut self, principal: impl Into<String>) -> Self {
        self.principals.insert(principal.into(), false);
        self
    }

    pub fn enforced(mut self, enforce: bool) -> Self {
        self.enforce = enforce;
        self
    }

    /// Succeeds only when `common_name` is present and mapped to true.
    pub fn check(&self, common_name: &str) -> Result<(), ContractError> {
        match self.principals.get(common_name) {
            Some(true) => Ok(()),
            _ => Err(ContractError::Unauthorized {
                principal: common_name.to_string(),
            }),
        }
    }
}
