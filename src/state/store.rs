//! WorldState - Abstract key-value access supplied by the ledger runtime.

use super::{KeyValue, StateError};

/// Key-value operations a transaction may issue against world state.
///
/// Implementations are responsible for their own atomicity boundary; a
/// contract issues at most one logical write per operation and never
/// caches what it reads.
pub trait WorldState: Send + Sync {
    /// Read the value stored at `key`. Returns `None` when absent.
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StateError>;

    /// Write `value` at `key`, replacing whatever was there.
    fn put_state(&self, key: &str, value: Vec<u8>) -> Result<(), StateError>;

    /// Remove `key`. Removing an absent key is not an error at this layer.
    fn del_state(&self, key: &str) -> Result<(), StateError>;

    /// Open a scan over `[start, end)`.
    ///
    /// An empty `start` begins at the first key and an empty `end` runs to
    /// the last one, so `("", "")` covers the whole key space. The returned
    /// cursor must be closed; wrap it in a `ScanGuard` to get that on every
    /// exit path.
    fn get_state_by_range<'a>(
        &'a self,
        start: &str,
        end: &str,
    ) -> Result<Box<dyn StateQueryIterator + 'a>, StateError>;
}

/// Cursor over the results of a range scan.
pub trait StateQueryIterator {
    /// Whether another entry is available.
    fn has_next(&self) -> bool;

    /// Advance and return the next entry.
    fn next(&mut self) -> Result<KeyValue, StateError>;

    /// Release the cursor. Further calls to `next` fail.
    fn close(&mut self) -> Result<(), StateError>;
}
