//! Validated callback registration across the context and connection
//! scopes.

use std::sync::Arc;

use petrel_core::{CallbackKind, MessageHandler};

use crate::consts::{actions, kinds};
use crate::context::ClientContext;
use crate::connection::Connection;
use crate::error::ClientError;

/// Install, retrieve, or remove a diagnostic handler.
///
/// Exactly one of `context` / `connection` names the owning scope. `action`
/// is one of [`actions::SET`], [`actions::GET`], [`actions::CLEAR`]; `kind`
/// is one of [`kinds::CLIENTMSG_CB`], [`kinds::SERVERMSG_CB`]. For `SET`,
/// `handler` is installed (replacing any previous entry; `None` uninstalls,
/// matching the classic null-function-pointer convention). The returned
/// handler is the previous entry for `SET`/`CLEAR`, or the current entry
/// for `GET`.
///
/// Success is silent. Failures return `ClientError` and, when an owning
/// scope exists, record a diagnostic there:
///
/// - neither scope supplied: error only, nothing to record into
/// - both scopes supplied: recorded at the connection, code `0x01010133`
/// - unrecognized `action` / `kind`: recorded at the supplied scope,
///   code `0x01010105`
///
/// # Errors
///
/// Returns `ClientError` on scope or parameter validation failure.
pub fn callback(
    context: Option<&ClientContext>,
    connection: Option<&Connection>,
    action: i32,
    kind: i32,
    handler: Option<Arc<dyn MessageHandler>>,
) -> Result<Option<Arc<dyn MessageHandler>>, ClientError> {
    let owner = match (context, connection) {
        (None, None) => return Err(ClientError::no_scope()),
        (Some(_), Some(conn)) => {
            let err = ClientError::both_scopes();
            conn.raise_error(&err);
            return Err(err);
        }
        (Some(ctx), None) => Owner::Context(ctx),
        (None, Some(conn)) => Owner::Connection(conn),
    };

    if !matches!(action, actions::SET | actions::GET | actions::CLEAR) {
        return Err(owner.fail(ClientError::illegal_param("action")));
    }
    let kind = match kind {
        kinds::CLIENTMSG_CB => CallbackKind::ClientMessage,
        kinds::SERVERMSG_CB => CallbackKind::ServerMessage,
        _ => return Err(owner.fail(ClientError::illegal_param("type"))),
    };

    let registry = owner.registry();
    let previous = match action {
        actions::SET => match handler {
            Some(handler) => registry.install(kind, handler),
            None => registry.remove(kind),
        },
        actions::CLEAR => registry.remove(kind),
        // validated above, so this is GET
        _ => registry.get(kind),
    };
    Ok(previous)
}

/// The single owning scope resolved from the two optional references.
enum Owner<'a> {
    Context(&'a ClientContext),
    Connection(&'a Connection),
}

impl Owner<'_> {
    fn registry(&self) -> &petrel_core::CallbackRegistry {
        match self {
            Owner::Context(ctx) => ctx.callbacks(),
            Owner::Connection(conn) => conn.callbacks(),
        }
    }

    /// Record `err` at this scope and hand it back for returning.
    fn fail(&self, err: ClientError) -> ClientError {
        match self {
            Owner::Context(ctx) => {
                ctx.raise_client_message(err.code(), err.message());
            }
            Owner::Connection(conn) => conn.raise_error(&err),
        }
        err
    }
}
