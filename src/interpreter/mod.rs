//! Interpreter Module
//!
//! Executes tokenized command lines against the session state.
//!
//! Main components:
//! - `types`: session state and `ExecResult`
//! - `errors`: `CommandError`, `ExitError`, `InterpreterError`
//! - `builtin_dispatch`: the closed `Builtin` set and its dispatcher
//! - `builtins`: `cd`, `exit`, `conf-dump`
//! - `interpreter`: `execute_line`

pub mod builtin_dispatch;
pub mod builtins;
pub mod errors;
pub mod interpreter;
pub mod types;

pub use builtin_dispatch::{dispatch_builtin, Builtin};
pub use errors::{CommandError, ExitError, InterpreterError};
pub use interpreter::execute_line;
pub use types::{ExecResult, InterpreterState};
