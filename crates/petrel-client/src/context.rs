//! The library-wide client scope.

use petrel_core::{
    dispatch, CallbackKind, CallbackPrecedence, CallbackRegistry, MessageScope, MessageSink,
};

use crate::consts::actions;
use crate::error::ClientError;
use crate::property::PropertyStore;

/// Library-wide scope object.
///
/// Owns the context-level message sink, callback registry, and property
/// store. Connections hold an `Arc<ClientContext>` so context-level
/// handlers can serve as the default for connection diagnostics (see
/// [`CallbackPrecedence`]).
///
/// # Example
///
/// ```rust,ignore
/// use petrel_client::{ClientContext, consts::{actions, properties}};
///
/// let ctx = ClientContext::new();
/// let mut name = *b"reporting";
/// ctx.config(actions::SET, properties::APP_NAME, &mut name, 9, None)?;
/// ```
#[derive(Debug, Default)]
pub struct ClientContext {
    sink: MessageSink,
    callbacks: CallbackRegistry,
    properties: PropertyStore,
    precedence: CallbackPrecedence,
}

impl ClientContext {
    /// Create a context with the default (fallback) callback precedence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with an explicit callback precedence.
    #[must_use]
    pub fn with_precedence(precedence: CallbackPrecedence) -> Self {
        Self {
            precedence,
            ..Self::default()
        }
    }

    /// The context's last-message sink.
    #[must_use]
    pub fn sink(&self) -> &MessageSink {
        &self.sink
    }

    /// How connection handlers interact with context handlers.
    #[must_use]
    pub fn precedence(&self) -> CallbackPrecedence {
        self.precedence
    }

    pub(crate) fn callbacks(&self) -> &CallbackRegistry {
        &self.callbacks
    }

    /// Raise a library-scoped client diagnostic against this context.
    ///
    /// Records into the context sink and invokes the context's client
    /// message handler if one is installed. Never fails.
    pub fn raise_client_message(&self, code: u32, text: impl Into<String>) {
        self.raise(MessageScope::ClientLibrary, code, text.into());
    }

    /// Raise a core-services diagnostic against this context.
    ///
    /// Core-services events are routed to the context's client message
    /// handler; they are never tied to a connection.
    pub fn raise_core_message(&self, code: u32, text: impl Into<String>) {
        self.raise(MessageScope::CoreServices, code, text.into());
    }

    fn raise(&self, scope: MessageScope, code: u32, text: String) {
        dispatch(
            &self.sink,
            petrel_core::Diagnostic::new(scope, code, text),
            CallbackKind::ClientMessage,
            &[&self.callbacks],
            self.precedence,
        );
    }

    pub(crate) fn raise_error(&self, err: &ClientError) {
        dispatch(
            &self.sink,
            err.diagnostic(MessageScope::CoreServices),
            CallbackKind::ClientMessage,
            &[&self.callbacks],
            self.precedence,
        );
    }

    /// Get or set a configuration property.
    ///
    /// `action` and `property` are raw constants from
    /// [`consts`](crate::consts); `buf` is the source for
    /// [`actions::SET`] and the destination for [`actions::GET`], and is
    /// ignored by [`actions::CLEAR`]. `len` is an exact byte count or a
    /// sentinel from [`consts::buflen`](crate::consts::buflen). `outlen`,
    /// if supplied on Get, receives the stored value's true length.
    ///
    /// Validation order is action, property, then buffer length; a call
    /// either fully applies or leaves prior state untouched.
    ///
    /// # Errors
    ///
    /// Returns `ClientError` on an unrecognized action or property, an
    /// illegal buffer length, or a destination too small for the stored
    /// value. Every failure is also recorded as a core-services diagnostic
    /// in the context sink.
    pub fn config(
        &self,
        action: i32,
        property: i32,
        buf: &mut [u8],
        len: i32,
        outlen: Option<&mut i32>,
    ) -> Result<(), ClientError> {
        let result = match action {
            actions::SET => self.properties.set(property, buf, len),
            actions::GET => self.properties.get(property, buf, len, outlen),
            actions::CLEAR => self.properties.clear(property),
            _ => Err(ClientError::config_illegal_param("action")),
        };
        if let Err(err) = &result {
            self.raise_error(err);
        }
        result
    }
}
