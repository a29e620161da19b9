//! The per-connection client scope.

use std::sync::Arc;

use petrel_core::{dispatch, CallbackKind, CallbackRegistry, Diagnostic, MessageScope, MessageSink};

use crate::context::ClientContext;
use crate::error::ClientError;

/// A single client connection scope.
///
/// Owns its own message sink and callback registry, so connection-scoped
/// diagnostics are observable independently of the context and of other
/// connections. Handlers installed here take precedence over context-level
/// handlers for events raised while this connection is active; whether the
/// context handler remains a fallback is the context's
/// [`precedence`](ClientContext::precedence) setting.
///
/// Transport and result-processing collaborators report through the
/// `raise_*` entry points; this core does not model the wire protocol.
#[derive(Debug)]
pub struct Connection {
    context: Arc<ClientContext>,
    sink: MessageSink,
    callbacks: CallbackRegistry,
}

impl Connection {
    /// Create a connection scope owned by `context`.
    #[must_use]
    pub fn new(context: Arc<ClientContext>) -> Self {
        Self {
            context,
            sink: MessageSink::new(),
            callbacks: CallbackRegistry::new(),
        }
    }

    /// The owning context.
    #[must_use]
    pub fn context(&self) -> &Arc<ClientContext> {
        &self.context
    }

    /// The connection's last-message sink.
    #[must_use]
    pub fn sink(&self) -> &MessageSink {
        &self.sink
    }

    pub(crate) fn callbacks(&self) -> &CallbackRegistry {
        &self.callbacks
    }

    /// Raise a connection-scoped client diagnostic.
    ///
    /// Records into the connection sink, then invokes the connection's
    /// client message handler, deferring to the context handler per the
    /// configured precedence. Never fails.
    pub fn raise_client_message(&self, code: u32, text: impl Into<String>) {
        self.dispatch_diag(
            Diagnostic::new(MessageScope::ClientLibraryConnection, code, text.into()),
            CallbackKind::ClientMessage,
        );
    }

    /// Raise a server message reported on this connection.
    pub fn raise_server_message(&self, code: u32, text: impl Into<String>) {
        self.dispatch_diag(
            Diagnostic::new(MessageScope::Server, code, text.into()),
            CallbackKind::ServerMessage,
        );
    }

    pub(crate) fn raise_error(&self, err: &ClientError) {
        self.dispatch_diag(
            err.diagnostic(MessageScope::ClientLibraryConnection),
            CallbackKind::ClientMessage,
        );
    }

    fn dispatch_diag(&self, diag: Diagnostic, kind: CallbackKind) {
        dispatch(
            &self.sink,
            diag,
            kind,
            &[&self.callbacks, self.context.callbacks()],
            self.context.precedence(),
        );
    }
}
