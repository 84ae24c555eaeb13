use thiserror::Error;

use crate::identity::IdentityError;
use crate::state::StateError;

/// Error type for contract operations and transaction dispatch.
#[derive(Debug, Error)]
pub enum ContractError {
    /// Create attempted on an id that is already present.
    #[error("the item {id} already exists")]
    AlreadyExists { id: String },
    /// Read, update, delete or transfer attempted on a missing id.
    #[error("the item {id} does not exist")]
    NotFound { id: String },
    /// Caller's common name is absent from the allow-list or mapped to false.
    #[error("caller {principal} is not authorized")]
    Unauthorized { principal: String },
    /// Argument rejected before touching world state.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// No transaction registered under this name.
    #[error("unknown transaction: {0}")]
    UnknownTransaction(String),
    /// Encoding or decoding of a stored record failed.
    #[error("item serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// World state read, write or scan failed.
    #[error("failed to access world state: {0}")]
    Store(#[from] StateError),
    /// Caller identity could not be extracted.
    #[error("caller identity error: {0}")]
    Identity(#[from] IdentityError),
    #[error("configuration error: {0}")]
    Config(String),
}

impl ContractError {
    /// Map this error to an HTTP-style status code.
    pub fn status_code(&self) -> u16 {
        match self {
            ContractError::AlreadyExists { .. } => 409,
            ContractError::NotFound { .. } => 404,
            ContractError::Unauthorized { .. } => 403,
            ContractError::InvalidArgument(_) => 400,
            ContractError::UnknownTransaction(_) => 404,
            ContractError::Serialization(_) => 500,
            ContractError::Store(_) => 500,
            ContractError::Identity(_) => 401,
            ContractError::Config(_) => 500,
        }
    }
}
