// src/commands/cat/mod.rs
use crate::fs::VfsError;
use crate::interpreter::errors::CommandError;
use crate::interpreter::types::{ExecResult, InterpreterState};

/// Concatenate VFS files to stdout. Unreadable operands are reported and
/// skipped.
pub fn handle_cat(state: &InterpreterState, args: &[String]) -> Result<ExecResult, CommandError> {
    let Some(vfs) = &state.vfs else {
        return Err(CommandError::execution(
            "cat",
            "no virtual filesystem loaded (start with --vfs-path)",
        ));
    };
    if args.is_empty() {
        return Err(CommandError::usage("cat", "missing file operand"));
    }

    let mut stdout = String::new();
    let mut stderr = String::new();
    let mut exit_code = 0;

    for file in args {
        let path = state.resolve(file);
        match vfs.read_file(&path) {
            Ok(content) => stdout.push_str(content),
            Err(e @ VfsError::IsADirectory { .. }) | Err(e @ VfsError::NotFound { .. }) => {
                stderr.push_str(&format!("cat: {}: {}\n", file, e.reason()));
                exit_code = 1;
            }
            Err(e) => {
                stderr.push_str(&format!("cat: {}\n", e));
                exit_code = 1;
            }
        }
    }

    Ok(ExecResult::new(stdout, stderr, exit_code))
}
