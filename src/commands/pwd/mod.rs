// src/commands/pwd/mod.rs
use crate::interpreter::types::{ExecResult, InterpreterState};

/// The VFS cursor, or the real working directory in stub mode.
pub fn handle_pwd(state: &InterpreterState) -> ExecResult {
    let pwd = if state.is_vfs_mode() {
        state.vfs_cwd.as_str()
    } else {
        state.config.cwd.as_str()
    };
    ExecResult::new(format!("{}\n", pwd), String::new(), 0)
}
