//! Command lifecycle guard.
//!
//! Result iteration and command text belong to the excluded execution
//! layer; this module only models the state machine far enough to refuse
//! sends at the wrong time.

use std::sync::Arc;

use crate::connection::Connection;
use crate::error::ClientError;

/// Lifecycle state of a command object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CommandState {
    /// Freshly allocated or reset; the only state that permits a send.
    #[default]
    Idle,
    /// A send has been issued.
    Sent,
    /// The server is returning results.
    ResultsPending,
    /// All results have been consumed.
    ResultsDone,
}

/// A command object bound to one connection.
#[derive(Debug)]
pub struct Command {
    connection: Arc<Connection>,
    state: CommandState,
}

impl Command {
    /// Allocate an idle command on `connection`.
    #[must_use]
    pub fn new(connection: Arc<Connection>) -> Self {
        Self {
            connection,
            state: CommandState::Idle,
        }
    }

    /// The connection this command is bound to.
    #[must_use]
    pub fn connection(&self) -> &Arc<Connection> {
        &self.connection
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> CommandState {
        self.state
    }

    /// Issue the send for this command.
    ///
    /// Transitions `Idle` to `Sent`; the states beyond belong to the
    /// result-iteration layer.
    ///
    /// # Errors
    ///
    /// Fails with code `0x0101019b` if the command is not idle, recording
    /// the diagnostic at the owning connection and leaving the state
    /// unchanged.
    pub fn send(&mut self) -> Result<(), ClientError> {
        if self.state != CommandState::Idle {
            let err = ClientError::command_not_idle();
            self.connection.raise_error(&err);
            return Err(err);
        }
        tracing::debug!("command sent");
        self.state = CommandState::Sent;
        Ok(())
    }

    /// Return the command to `Idle`, abandoning any in-flight results.
    pub fn reset(&mut self) {
        self.state = CommandState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ClientContext;
    use crate::error::codes;
    use petrel_core::MessageScope;

    fn command() -> Command {
        let ctx = Arc::new(ClientContext::new());
        Command::new(Arc::new(Connection::new(ctx)))
    }

    #[test]
    fn test_fresh_command_sends_once() {
        let mut cmd = command();
        assert_eq!(cmd.state(), CommandState::Idle);
        cmd.send().unwrap();
        assert_eq!(cmd.state(), CommandState::Sent);
    }

    #[test]
    fn test_second_send_fails_without_state_change() {
        let mut cmd = command();
        cmd.send().unwrap();

        cmd.connection().sink().reset();
        let err = cmd.send().unwrap_err();
        assert_eq!(err.code(), codes::COMMAND_NOT_IDLE);
        assert!(err.message().contains("idle"));
        assert_eq!(cmd.state(), CommandState::Sent, "state unchanged");

        let diag = cmd.connection().sink().current().unwrap();
        assert_eq!(diag.scope, MessageScope::ClientLibraryConnection);
        assert_eq!(diag.code, codes::COMMAND_NOT_IDLE);
    }

    #[test]
    fn test_reset_permits_another_send() {
        let mut cmd = command();
        cmd.send().unwrap();
        cmd.reset();
        cmd.send().unwrap();
        assert_eq!(cmd.state(), CommandState::Sent);
    }
}
