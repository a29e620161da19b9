//! # PetrelDB Client Core
//!
//! Scope-independent diagnostic machinery for the PetrelDB client library:
//! the pieces every client-visible scope object (library context, connection)
//! embeds to report and route diagnostics.
//!
//! This crate provides:
//! - **Message**: the diagnostic record carried through the library
//! - **Sink**: a per-scope "last message" slot with explicit reset
//! - **Callback**: the handler trait and per-scope registry
//! - **Dispatch**: records a diagnostic and invokes the resolved handler
//!
//! ## Threading contract
//!
//! All operations are synchronous and non-blocking; handlers run in-line on
//! the raising call path. A single scope's sink and registry must not be
//! mutated concurrently from two call paths without external
//! synchronization — the surrounding library serializes access per scope,
//! and the internal locks only keep individual operations consistent.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod callback;
pub mod dispatch;
pub mod message;
pub mod sink;

pub use callback::{CallbackKind, CallbackRegistry, MessageHandler};
pub use dispatch::{dispatch, CallbackPrecedence};
pub use message::{Diagnostic, MessageScope};
pub use sink::MessageSink;
