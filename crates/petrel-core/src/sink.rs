//! Per-scope storage for the most recent diagnostic.
//!
//! Each scope object (library context, connection) owns one sink. The slot
//! holds a single diagnostic, last-write-wins: earlier events in the same
//! call are overwritten by design, so callers probing an outcome reset the
//! sink, invoke the operation, then inspect.

use parking_lot::Mutex;

use crate::message::Diagnostic;

/// Single-slot holder for the most recent unconsumed diagnostic.
///
/// The internal lock makes individual operations consistent; it does not
/// order concurrent raises against the same scope — per-scope serialization
/// remains the caller's contract.
#[derive(Debug, Default)]
pub struct MessageSink {
    slot: Mutex<Option<Diagnostic>>,
}

impl MessageSink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the slot. Always succeeds.
    pub fn reset(&self) {
        *self.slot.lock() = None;
    }

    /// Overwrite the slot with `diag` unconditionally.
    pub fn record(&self, diag: Diagnostic) {
        *self.slot.lock() = Some(diag);
    }

    /// Snapshot of the stored diagnostic, `None` if nothing has been
    /// recorded since the last reset.
    #[must_use]
    pub fn current(&self) -> Option<Diagnostic> {
        self.slot.lock().clone()
    }

    /// True if no diagnostic has been recorded since the last reset.
    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.slot.lock().is_none()
    }
}
