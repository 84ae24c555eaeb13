//! TransactionContext - what a contract operation receives from the runtime.

use crate::identity::{ClientIdentity, StaticIdentity};
use crate::state::{InMemoryWorldState, WorldState};

/// Capabilities the ledger runtime hands to each transaction.
pub trait TransactionContext {
    /// World state access.
    fn stub(&self) -> &dyn WorldState;

    /// The identity that submitted the transaction.
    fn client_identity(&self) -> &dyn ClientIdentity;
}

/// In-memory context for tests and embedded use.
///
/// Clones (and contexts made with `as_caller`) share the same world state.
#[derive(Clone, Default)]
pub struct InMemoryContext {
    state: InMemoryWorldState,
    identity: StaticIdentity,
}

impl InMemoryContext {
    /// Empty world state, anonymous caller.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: InMemoryWorldState) -> Self {
        Self {
            state,
            identity: StaticIdentity::anonymous(),
        }
    }

    pub fn with_identity(mut self, identity: StaticIdentity) -> Self {
        self.identity = identity;
        self
    }

    /// Same world state, different caller.
    pub fn as_caller(&self, common_name: impl Into<String>) -> Self {
        Self {
            state: self.state.clone(),
            identity: StaticIdentity::for_common_name(common_name),
        }
    }

    pub fn state(&self) -> &InMemoryWorldState {
        &self.state
    }
}

impl TransactionContext for InMemoryContext {
    fn stub(&self) -> &dyn WorldState {
        &self.state
    }

    fn client_identity(&self) -> &dyn ClientIdentity {
        &self.identity
    }
}
