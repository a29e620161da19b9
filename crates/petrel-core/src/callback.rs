//! Handler trait and per-scope callback registry.
//!
//! Each scope object carries its own registry mapping an event class to at
//! most one installed handler. Installing over an existing entry replaces
//! it; the registry itself never reports errors — argument validation
//! belongs to the client-facing registration entry point.

use std::sync::Arc;

use fxhash::FxHashMap;
use parking_lot::Mutex;

use crate::message::Diagnostic;

/// Category of diagnostic a handler subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallbackKind {
    /// Messages generated by the client library itself.
    ClientMessage,
    /// Messages reported by the server.
    ServerMessage,
}

/// A user-installed diagnostic handler.
///
/// Invoked synchronously on the raising call path; implementations must not
/// block on I/O and must not raise further diagnostics into the same scope
/// (the record step has already completed when the handler runs).
pub trait MessageHandler: Send + Sync {
    /// Called with the diagnostic that was just recorded.
    fn on_message(&self, diag: &Diagnostic);
}

impl<F> MessageHandler for F
where
    F: Fn(&Diagnostic) + Send + Sync,
{
    fn on_message(&self, diag: &Diagnostic) {
        self(diag);
    }
}

// Handlers are opaque capabilities; registration results still need to be
// printable (assertions, error formatting).
impl std::fmt::Debug for dyn MessageHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("MessageHandler")
    }
}

/// Per-scope table of installed handlers, one per event class.
///
/// Entries are owned by the scope object that embeds the registry and
/// disappear with it. Not safe to mutate from two call paths concurrently
/// without external synchronization (per-scope serialization contract).
#[derive(Default)]
pub struct CallbackRegistry {
    handlers: Mutex<FxHashMap<CallbackKind, Arc<dyn MessageHandler>>>,
}

impl CallbackRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `handler` for `kind`, returning the replaced entry if any.
    pub fn install(
        &self,
        kind: CallbackKind,
        handler: Arc<dyn MessageHandler>,
    ) -> Option<Arc<dyn MessageHandler>> {
        self.handlers.lock().insert(kind, handler)
    }

    /// Remove the handler for `kind`, returning it if one was installed.
    pub fn remove(&self, kind: CallbackKind) -> Option<Arc<dyn MessageHandler>> {
        self.handlers.lock().remove(&kind)
    }

    /// Currently installed handler for `kind`.
    #[must_use]
    pub fn get(&self, kind: CallbackKind) -> Option<Arc<dyn MessageHandler>> {
        self.handlers.lock().get(&kind).cloned()
    }
}

impl std::fmt::Debug for CallbackRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let handlers = self.handlers.lock();
        f.debug_struct("CallbackRegistry")
            .field("installed", &handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}
