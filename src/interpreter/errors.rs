//! Interpreter Errors
//!
//! - `CommandError`: a command failed; reported and the session goes on
//! - `ExitError`: the `exit` builtin ran; the session must terminate
//!
//! `InterpreterError` is what escapes `execute`. Ordinary command failures
//! never do; they are turned into an `ExecResult` at the dispatch boundary.

use std::fmt;

use thiserror::Error;

use crate::fs::VfsError;
use crate::interpreter::types::ExecResult;

/// Exit status for an unknown command.
pub const EXIT_COMMAND_NOT_FOUND: i32 = 127;
/// Exit status for a usage error.
pub const EXIT_USAGE: i32 = 2;

/// Per-command failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Command not found: {0}")]
    NotFound(String),

    #[error("{command}: {message}")]
    Usage { command: &'static str, message: String },

    #[error("{command}: {message}")]
    Execution { command: &'static str, message: String },

    #[error("{command}: {source}")]
    Vfs {
        command: &'static str,
        #[source]
        source: VfsError,
    },
}

impl CommandError {
    pub fn usage(command: &'static str, message: impl Into<String>) -> Self {
        CommandError::Usage { command, message: message.into() }
    }

    pub fn execution(command: &'static str, message: impl Into<String>) -> Self {
        CommandError::Execution { command, message: message.into() }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            CommandError::NotFound(_) => EXIT_COMMAND_NOT_FOUND,
            CommandError::Usage { .. } => EXIT_USAGE,
            CommandError::Execution { .. } | CommandError::Vfs { .. } => 1,
        }
    }

    /// Render as a failed result carrying the message on stderr.
    pub fn into_result(self) -> ExecResult {
        let code = self.exit_code();
        ExecResult::failure_with_code(format!("{}\n", self), code)
    }
}

/// Raised by `exit`: carries the status the process should end with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitError {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ExitError {
    pub fn new(exit_code: i32, stdout: String, stderr: String) -> Self {
        Self { exit_code, stdout, stderr }
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "exit {}", self.exit_code)
    }
}

impl std::error::Error for ExitError {}

/// Errors that escape line execution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InterpreterError {
    #[error(transparent)]
    Exit(#[from] ExitError),
}
