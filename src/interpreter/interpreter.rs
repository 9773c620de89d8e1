//! Line Interpreter
//!
//! Entry point for executing one input line: tokenize, look the command
//! up, dispatch, and record the outcome in the session state.

use tracing::debug;

use crate::interpreter::builtin_dispatch::{dispatch_builtin, Builtin};
use crate::interpreter::errors::InterpreterError;
use crate::interpreter::types::{ExecResult, InterpreterState};
use crate::parser::tokenize;

/// Execute one line against `state`.
///
/// Empty lines are a no-op. Unknown commands and failing handlers are
/// reported through the returned `ExecResult`; the only error is the
/// `Exit` raised by `exit`.
pub fn execute_line(state: &mut InterpreterState, line: &str) -> Result<ExecResult, InterpreterError> {
    let argv = tokenize(line, state.env());
    let Some((name, args)) = argv.split_first() else {
        return Ok(ExecResult::ok());
    };
    debug!(command = %name, ?args, "dispatch");

    let result = match name.parse::<Builtin>() {
        Ok(builtin) => dispatch_builtin(state, builtin, args)?,
        Err(not_found) => not_found.into_result(),
    };

    state.last_exit_code = result.exit_code;
    state.ensure_cursor();
    Ok(result)
}
