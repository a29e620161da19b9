//! Client error types with stable numeric diagnostic codes.
//!
//! Every fallible client operation reports on two channels at once: the
//! returned `ClientError`, and a `Diagnostic` recorded into the owning
//! scope's sink (except registration with no owning scope, where there is
//! nowhere to record). The numeric codes are reproduced bit-exact for
//! compatibility with existing integrations.

use petrel_core::{Diagnostic, MessageScope};
use thiserror::Error;

/// Stable diagnostic codes.
pub mod codes {
    /// Callback registration supplied both a context and a connection.
    pub const BOTH_SCOPES: u32 = 0x0101_0133;
    /// A callback registration parameter had an illegal value.
    pub const ILLEGAL_PARAM: u32 = 0x0101_0105;
    /// Operation attempted while the command is not in an idle state.
    pub const COMMAND_NOT_IDLE: u32 = 0x0101_019b;
    /// Destination buffer too small to hold a configured value.
    pub const CONFIG_BUFFER_TOO_SMALL: u32 = 0x0201_0102;
    /// A configuration parameter had an illegal value.
    pub const CONFIG_ILLEGAL_PARAM: u32 = 0x0201_0106;
}

/// Error returned by client operations.
///
/// Each variant carries the numeric code also recorded in the diagnostic,
/// so the return channel and the sink channel always agree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// Owning-scope validation failed during callback registration.
    #[error("scope error ({code:#010x}): {message}")]
    Scope {
        /// Stable diagnostic code.
        code: u32,
        /// Error message.
        message: String,
    },

    /// A parameter had an illegal value.
    #[error("argument error ({code:#010x}): {message}")]
    Argument {
        /// Stable diagnostic code.
        code: u32,
        /// Error message.
        message: String,
    },

    /// A destination buffer could not hold the stored value.
    #[error("truncation error ({code:#010x}): {message}")]
    Truncation {
        /// Stable diagnostic code.
        code: u32,
        /// Error message.
        message: String,
    },

    /// An operation was attempted in an illegal lifecycle state.
    #[error("state error ({code:#010x}): {message}")]
    State {
        /// Stable diagnostic code.
        code: u32,
        /// Error message.
        message: String,
    },
}

impl ClientError {
    /// The stable numeric code.
    #[must_use]
    pub fn code(&self) -> u32 {
        match self {
            Self::Scope { code, .. }
            | Self::Argument { code, .. }
            | Self::Truncation { code, .. }
            | Self::State { code, .. } => *code,
        }
    }

    /// The error message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Scope { message, .. }
            | Self::Argument { message, .. }
            | Self::Truncation { message, .. }
            | Self::State { message, .. } => message,
        }
    }

    /// The diagnostic recorded for this error at `scope`.
    #[must_use]
    pub fn diagnostic(&self, scope: MessageScope) -> Diagnostic {
        Diagnostic::new(scope, self.code(), self.message())
    }

    // ---- Constructor helpers ----

    /// Registration was given neither a context nor a connection.
    #[must_use]
    pub fn no_scope() -> Self {
        Self::Scope {
            code: codes::BOTH_SCOPES,
            message: "a context or a connection must be supplied".into(),
        }
    }

    /// Registration was given both a context and a connection.
    #[must_use]
    pub fn both_scopes() -> Self {
        Self::Scope {
            code: codes::BOTH_SCOPES,
            message: "a context and a connection cannot both be supplied".into(),
        }
    }

    /// A callback registration parameter (`action`, `type`) was illegal.
    #[must_use]
    pub fn illegal_param(param: &str) -> Self {
        Self::Argument {
            code: codes::ILLEGAL_PARAM,
            message: format!("an illegal value was given for parameter '{param}'"),
        }
    }

    /// A configuration parameter (`action`, `property`, `buflen`) was
    /// illegal.
    #[must_use]
    pub fn config_illegal_param(param: &str) -> Self {
        Self::Argument {
            code: codes::CONFIG_ILLEGAL_PARAM,
            message: format!("an illegal value was given for parameter '{param}'"),
        }
    }

    /// A destination of `available` bytes cannot hold a `required`-byte
    /// value.
    #[must_use]
    pub fn buffer_too_small(available: usize, required: usize) -> Self {
        Self::Truncation {
            code: codes::CONFIG_BUFFER_TOO_SMALL,
            message: format!(
                "the supplied buffer of {available} bytes is too small, \
                 at least {required} bytes are required"
            ),
        }
    }

    /// The command is not in an idle state.
    #[must_use]
    pub fn command_not_idle() -> Self {
        Self::State {
            code: codes::COMMAND_NOT_IDLE,
            message: "the command is not in an idle state".into(),
        }
    }
}
