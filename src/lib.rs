mod auth;
mod chaincode;
mod config;
mod context;
mod contract;
mod error;
mod identity;
mod item;
mod logging;
mod state;

pub use auth::AuthorizationPolicy;
pub use chaincode::{Chaincode, InvocationRequest, Response, TransactionKind};
pub use config::ContractConfig;
pub use context::{InMemoryContext, TransactionContext};
pub use contract::ItemContract;
pub use error::ContractError;
pub use identity::{
    Certificate, ClientIdentity, IdentityError, IdentityToken, StaticIdentity, Subject,
};
pub use item::{default_bootstrap, Item};
pub use logging::{LogFormat, LoggingConfig};
pub use state::{
    InMemoryWorldState, KeyValue, ScanGuard, StateError, StateQueryIterator, WorldState,
};
