// src/commands/mkdir/mod.rs
use crate::fs::VfsError;
use crate::interpreter::errors::CommandError;
use crate::interpreter::types::{ExecResult, InterpreterState};

pub fn handle_mkdir(state: &mut InterpreterState, args: &[String]) -> Result<ExecResult, CommandError> {
    if args.is_empty() {
        return Err(CommandError::usage("mkdir", "missing operand"));
    }

    let paths: Vec<String> = args.iter().map(|a| state.resolve(a)).collect();
    let Some(vfs) = state.vfs.as_mut() else {
        let stdout: String = args
            .iter()
            .map(|dir| format!("mkdir: would create directory: {}\n", dir))
            .collect();
        return Ok(ExecResult::new(stdout, String::new(), 0));
    };

    let mut stderr = String::new();
    let mut exit_code = 0;

    for (dir, path) in args.iter().zip(&paths) {
        if let Err(e) = vfs.make_directory(path) {
            let reason = match e {
                VfsError::AlreadyExists { .. } => "File exists",
                _ => "No such file or directory",
            };
            stderr.push_str(&format!("mkdir: cannot create directory '{}': {}\n", dir, reason));
            exit_code = 1;
        }
    }

    Ok(ExecResult::new(String::new(), stderr, exit_code))
}
