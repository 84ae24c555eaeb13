//! InMemoryWorldState - BTreeMap-backed world state for testing and embedding.

use std::collections::{BTreeMap, VecDeque};
use std::ops::Bound;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use super::{KeyValue, StateError, StateQueryIterator, WorldState};

/// In-memory world state.
///
/// Keys are kept in a `BTreeMap` so range scans come out in lexicographic
/// byte order. Clone-friendly via Arc; clones share storage.
#[derive(Clone)]
pub struct InMemoryWorldState {
    storage: Arc<RwLock<BTreeMap<String, Vec<u8>>>>,
    open_cursors: Arc<AtomicUsize>,
}

impl Default for InMemoryWorldState {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryWorldState {
    /// Create a new empty world state.
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(BTreeMap::new())),
            open_cursors: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of stored keys.
    pub fn len(&self) -> Result<usize, StateError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| StateError::LockPoisoned("len"))?;
        Ok(storage.len())
    }

    pub fn is_empty(&self) -> Result<bool, StateError> {
        Ok(self.len()? == 0)
    }

    /// Range cursors opened and not yet closed.
    pub fn open_iterators(&self) -> usize {
        self.open_cursors.load(Ordering::SeqCst)
    }
}

impl WorldState for InMemoryWorldState {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StateError> {
        if key.is_empty() {
            return Err(StateError::EmptyKey);
        }
        let storage = self
            .storage
            .read()
            .map_err(|_| StateError::LockPoisoned("get_state"))?;

        Ok(storage.get(key).filter(|bytes| !bytes.is_empty()).cloned())
    }

    fn put_state(&self, key: &str, value: Vec<u8>) -> Result<(), StateError> {
        if key.is_empty() {
            return Err(StateError::EmptyKey);
        }
        let mut storage = self
            .storage
            .write()
            .map_err(|_| StateError::LockPoisoned("put_state"))?;

        // An empty value is a delete, as on the peer.
        if value.is_empty() {
            storage.remove(key);
        } else {
            storage.insert(key.to_string(), value);
        }
        Ok(())
    }

    fn del_state(&self, key: &str) -> Result<(), StateError> {
        if key.is_empty() {
            return Err(StateError::EmptyKey);
        }
        let mut storage = self
            .storage
            .write()
            .map_err(|_| StateError::LockPoisoned("del_state"))?;

        storage.remove(key);
        Ok(())
    }

    fn get_state_by_range<'a>(
        &'a self,
        start: &str,
        end: &str,
    ) -> Result<Box<dyn StateQueryIterator + 'a>, StateError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| StateError::LockPoisoned("get_state_by_range"))?;

        let lower = if start.is_empty() {
            Bound::Unbounded
        } else {
            Bound::Included(start.to_string())
        };
        let upper = if end.is_empty() {
            Bound::Unbounded
        } else {
            Bound::Excluded(end.to_string())
        };

        // BTreeMap::range panics on an inverted range.
        let inverted = !start.is_empty() && !end.is_empty() && start > end;
        let entries: VecDeque<KeyValue> = if inverted {
            VecDeque::new()
        } else {
            storage
                .range::<String, _>((lower, upper))
                .map(|(key, value)| KeyValue {
                    key: key.clone(),
                    value: value.clone(),
                })
                .collect()
        };

        self.open_cursors.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(InMemoryRangeIterator {
            entries,
            closed: false,
            open_cursors: Arc::clone(&self.open_cursors),
        }))
    }
}

/// Snapshot cursor: sees the state as it was when the scan was opened.
struct InMemoryRangeIterator {
    entries: VecDeque<KeyValue>,
    closed: bool,
    open_cursors: Arc<AtomicUsize>,
}

impl StateQueryIterator for InMemoryRangeIterator {
    fn has_next(&self) -> bool {
        !self.closed && !self.entries.is_empty()
    }

    fn next(&mut self) -> Result<KeyValue, StateError> {
        if self.closed {
            return Err(StateError::IteratorClosed);
        }
        self.entries
            .pop_front()
            .ok_or(StateError::IteratorExhausted)
    }

    fn close(&mut self) -> Result<(), StateError> {
        if !self.closed {
            self.closed = true;
            self.entries.clear();
            self.open_cursors.fetch_sub(1, Ordering::SeqCst);
        }
        Ok(())
    }
}
