//! Records a diagnostic and routes it to the resolved handler.

use crate::callback::{CallbackKind, CallbackRegistry};
use crate::message::Diagnostic;
use crate::sink::MessageSink;

/// How connection-level handlers interact with context-level ones when both
/// are candidates for the same event class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CallbackPrecedence {
    /// Connection handler wins; the context handler is consulted when the
    /// connection has none installed for the class.
    #[default]
    Fallback,
    /// Only the most specific scope is consulted: if a connection is in
    /// play, an absent connection handler means no handler fires.
    Override,
}

/// Record `diag` into `sink` and invoke the handler resolved from
/// `registries`.
///
/// `registries` is ordered most-specific first (connection before context).
/// Recording happens before resolution, so the diagnostic is retrievable
/// even when no handler is installed; a missing handler is a silent no-op
/// and this path never fails. The handler runs synchronously on the
/// calling thread.
pub fn dispatch(
    sink: &MessageSink,
    diag: Diagnostic,
    kind: CallbackKind,
    registries: &[&CallbackRegistry],
    precedence: CallbackPrecedence,
) {
    tracing::debug!(scope = %diag.scope, code = diag.code, "diagnostic raised");
    sink.record(diag.clone());

    let handler = match precedence {
        CallbackPrecedence::Fallback => registries.iter().find_map(|r| r.get(kind)),
        CallbackPrecedence::Override => registries.first().and_then(|r| r.get(kind)),
    };
    match handler {
        Some(handler) => handler.on_message(&diag),
        None => tracing::trace!(code = diag.code, "no handler installed, diagnostic recorded only"),
    }
}
