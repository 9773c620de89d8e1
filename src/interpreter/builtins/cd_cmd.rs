//! cd - Change directory builtin
//!
//! Supports:
//! - cd [dir] - move the VFS cursor to a directory
//! - cd - move the VFS cursor to `/`
//! - stub mode: report where the cursor would go

use crate::interpreter::errors::CommandError;
use crate::interpreter::types::{ExecResult, InterpreterState};

/// Handle the cd builtin command
pub fn handle_cd(state: &mut InterpreterState, args: &[String]) -> Result<ExecResult, CommandError> {
    if args.len() > 1 {
        return Err(CommandError::usage(
            "cd",
            "too many arguments\nUsage: cd [directory]",
        ));
    }
    let target = args.first();

    let Some(vfs) = &state.vfs else {
        let stdout = match target {
            None => format!("cd: would change to home directory: {}\n", state.config.home),
            Some(dir) => format!("cd: would change to directory: {}\n", dir),
        };
        return Ok(ExecResult::new(stdout, String::new(), 0));
    };

    let new_dir = match target {
        None => "/".to_string(),
        Some(dir) => state.resolve(dir),
    };

    if !vfs.is_directory(&new_dir) {
        let display = target.map(String::as_str).unwrap_or("/");
        let reason = if vfs.exists(&new_dir) {
            "Not a directory"
        } else {
            "No such file or directory"
        };
        return Err(CommandError::execution("cd", format!("{}: {}", display, reason)));
    }

    state.vfs_cwd = new_dir;
    Ok(ExecResult::ok())
}
