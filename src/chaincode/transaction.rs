//! Request/response envelope for transaction dispatch.

use serde::{Deserialize, Serialize};

use crate::error::ContractError;

/// Whether a transaction changes world state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    /// Writes world state; gated on authorization when the policy enforces it.
    Submit,
    /// Read-only.
    Evaluate,
}

/// A transaction name plus its string arguments, as the runtime delivers them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationRequest {
    pub function: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl InvocationRequest {
    pub fn new<I, S>(function: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            function: function.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

/// Result of an invocation: status, error message, payload bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub message: String,
    pub payload: Vec<u8>,
}

impl Response {
    pub const OK: u16 = 200;

    pub fn ok(payload: Vec<u8>) -> Self {
        Self {
            status: Self::OK,
            message: String::new(),
            payload,
        }
    }

    pub fn error(err: &ContractError) -> Self {
        Self {
            status: err.status_code(),
            message: err.to_string(),
            payload: Vec::new(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == Self::OK
    }
}
