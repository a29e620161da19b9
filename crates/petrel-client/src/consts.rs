//! Raw protocol constants for the client-facing entry points.
//!
//! `callback` and `ClientContext::config` take actions, callback kinds, and
//! buffer lengths as raw integers so that out-of-range values surface as
//! recorded diagnostics instead of being unrepresentable; these modules
//! hold the recognized values.

/// Actions accepted by `callback` and `config`.
pub mod actions {
    /// Retrieve the current value.
    pub const GET: i32 = 33;
    /// Install or replace a value.
    pub const SET: i32 = 34;
    /// Remove the current value.
    pub const CLEAR: i32 = 35;
}

/// Recognized callback kinds (raw form of
/// [`CallbackKind`](petrel_core::CallbackKind)).
pub mod kinds {
    /// Client-library messages.
    pub const CLIENTMSG_CB: i32 = 7;
    /// Server messages.
    pub const SERVERMSG_CB: i32 = 8;
}

/// Sentinel buffer lengths.
///
/// Reserved negative values with special meaning; every other negative
/// value is illegal wherever a length is expected.
pub mod buflen {
    /// Treat the buffer as a NUL-terminated string; resolved to the
    /// string's length at the point of the call.
    pub const NULLTERM: i32 = -9;
    /// Pattern-match wildcard. Never valid as a buffer length.
    pub const WILDCARD: i32 = -99;
    /// No length limit. On Get, requires an output-length slot.
    pub const NO_LIMIT: i32 = -9999;
    /// Argument not used by this call. Never valid as a buffer length.
    pub const UNUSED: i32 = -99999;
}

/// Configurable property identifiers.
pub mod properties {
    /// Opaque user data attached to a context.
    pub const USERDATA: i32 = 143;
    /// Application name reported to the server at login.
    pub const APP_NAME: i32 = 9502;
}
