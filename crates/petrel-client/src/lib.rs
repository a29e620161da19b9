//! # PetrelDB Client
//!
//! Client-facing scopes for the PetrelDB client library: the library-wide
//! [`ClientContext`], per-connection [`Connection`] scopes, validated
//! [`callback`] registration, the configuration property surface, and the
//! [`Command`] lifecycle guard.
//!
//! Every diagnostic raised inside the library is recorded into the owning
//! scope's last-message sink and routed to the user-installed handler
//! resolved connection-first (see
//! [`CallbackPrecedence`](petrel_core::CallbackPrecedence)). Failures are
//! reported on both channels at once: the returned [`ClientError`] and the
//! recorded diagnostic.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use petrel_client::{callback, consts, ClientContext, Connection};
//!
//! let ctx = Arc::new(ClientContext::new());
//! let conn = Connection::new(Arc::clone(&ctx));
//!
//! callback(
//!     None,
//!     Some(&conn),
//!     consts::actions::SET,
//!     consts::kinds::CLIENTMSG_CB,
//!     Some(Arc::new(|diag: &petrel_core::Diagnostic| {
//!         eprintln!("client message: {diag}");
//!     })),
//! )?;
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod callback;
mod command;
mod connection;
pub mod consts;
mod context;
mod error;
mod property;

pub use callback::callback;
pub use command::{Command, CommandState};
pub use connection::Connection;
pub use context::ClientContext;
pub use error::{codes, ClientError};

// Re-export the core types callers interact with directly.
pub use petrel_core::{
    CallbackKind, CallbackPrecedence, Diagnostic, MessageHandler, MessageScope, MessageSink,
};
