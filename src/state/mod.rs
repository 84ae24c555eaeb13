//! World state - the key-value capability a contract runs against.
//!
//! The ledger runtime owns the actual state database; a contract only sees
//! it through `WorldState`. Keys are plain strings, values are opaque bytes,
//! and range scans walk keys in lexicographic byte order.
//!
//! ## Example
//!
//! ```ignore
//! use item_ledger::{InMemoryWorldState, ScanGuard, WorldState};
//!
//! let state = InMemoryWorldState::new();
//! state.put_state("Item1", b"{}".to_vec())?;
//!
//! let mut scan = ScanGuard::new(state.get_state_by_range("", "")?);
//! for entry in scan.by_ref() {
//!     let kv = entry?;
//!     println!("{} => {} bytes", kv.key, kv.value.len());
//! }
//! scan.close()?;
//! ```

mod in_memory;
mod scan;
mod store;

use thiserror::Error;

/// A single entry produced by a range scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
    pub key: String,
    pub value: Vec<u8>,
}

/// Error type for world state access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    /// Backend-level failure (I/O, transport, peer error).
    #[error("world state error: {0}")]
    Storage(String),
    /// The in-process lock guarding the state was poisoned.
    #[error("world state lock poisoned during {0}")]
    LockPoisoned(&'static str),
    /// `next()` called on an iterator with no remaining entries.
    #[error("range iterator exhausted")]
    IteratorExhausted,
    /// The iterator was used after `close()`.
    #[error("range iterator already closed")]
    IteratorClosed,
    /// Keys must be non-empty.
    #[error("key must not be empty")]
    EmptyKey,
}

pub use in_memory::InMemoryWorldState;
pub use scan::ScanGuard;
pub use store::{StateQueryIterator, WorldState};
