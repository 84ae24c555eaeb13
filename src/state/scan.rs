//! ScanGuard - closes a range cursor on every exit path.

use super::{KeyValue, StateError, StateQueryIterator};

/// Owns an open `StateQueryIterator` and exposes it as a Rust `Iterator`.
///
/// Call `close()` on the happy path to surface close errors. If the guard is
/// dropped first (an early `?` return, a panic unwinding through the scan)
/// the cursor is still closed and any failure is logged.
pub struct ScanGuard<'a> {
    inner: Box<dyn StateQueryIterator + 'a>,
    closed: bool,
}

impl<'a> ScanGuard<'a> {
    pub fn new(inner: Box<dyn StateQueryIterator + 'a>) -> Self {
        Self {
            inner,
            closed: false,
        }
    }

    /// Close the underlying cursor, reporting any error.
    pub fn close(mut self) -> Result<(), StateError> {
        self.closed = true;
        self.inner.close()
    }
}

impl Iterator for ScanGuard<'_> {
    type Item = Result<KeyValue, StateError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.closed || !self.inner.has_next() {
            return None;
        }
        Some(StateQueryIterator::next(self.inner.as_mut()))
    }
}

impl Drop for ScanGuard<'_> {
    fn drop(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        if let Err(err) = self.inner.close() {
            tracing::warn!(error = %err, "failed to close range iterator");
        }
    }
}
