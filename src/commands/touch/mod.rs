// src/commands/touch/mod.rs
use crate::fs::VfsError;
use crate::interpreter::errors::CommandError;
use crate::interpreter::types::{ExecResult, InterpreterState};

/// Create empty files. Existing entries are left as they are.
pub fn handle_touch(state: &mut InterpreterState, args: &[String]) -> Result<ExecResult, CommandError> {
    if args.is_empty() {
        return Err(CommandError::usage("touch", "missing file operand"));
    }

    let paths: Vec<String> = args.iter().map(|a| state.resolve(a)).collect();
    let Some(vfs) = state.vfs.as_mut() else {
        let stdout: String = args
            .iter()
            .map(|file| format!("touch: would create file: {}\n", file))
            .collect();
        return Ok(ExecResult::new(stdout, String::new(), 0));
    };

    let mut stderr = String::new();
    let mut exit_code = 0;

    for (file, path) in args.iter().zip(&paths) {
        match vfs.make_file(path, "") {
            Ok(()) | Err(VfsError::AlreadyExists { .. }) => {}
            Err(_) => {
                stderr.push_str(&format!(
                    "touch: cannot touch '{}': No such file or directory\n",
                    file
                ));
                exit_code = 1;
            }
        }
    }

    Ok(ExecResult::new(String::new(), stderr, exit_code))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::types::test_support::*;

    #[test]
    fn test_touch_creates_empty_file() {
        let mut state = vfs_state();
        let result = handle_touch(&mut state, &args(&["/a/new.txt"])).unwrap();
        assert_eq!(result.exit_code, 0);
        assert_eq!(state.vfs.as_ref().unwrap().read_file("/a/new.txt").unwrap(), "");
    }

    #[test]
    fn test_touch_existing_keeps_content() {
        let mut state = vfs_state();
        let result = handle_touch(&mut state, &args(&["/readme"])).unwrap();
        assert_eq!(result.exit_code, 0);
        assert_eq!(state.vfs.as_ref().unwrap().read_file("/readme").unwrap(), "read me");
    }

    #[test]
    fn test_touch_missing_parent() {
        let mut state = vfs_state();
        let result = handle_touch(&mut state, &args(&["/no/such"])).unwrap();
        assert_eq!(result.exit_code, 1);
        assert_eq!(result.stderr, "touch: cannot touch '/no/such': No such file or directory\n");
    }
}
