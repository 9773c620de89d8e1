// src/commands/cp/mod.rs
use crate::fs::path::{basename, join};
use crate::fs::VfsError;
use crate::interpreter::errors::CommandError;
use crate::interpreter::types::{ExecResult, InterpreterState};

/// Copy one VFS file. A destination naming an existing directory receives
/// the file under its own name.
pub fn handle_cp(state: &mut InterpreterState, args: &[String]) -> Result<ExecResult, CommandError> {
    let (src, dst) = match args {
        [] => return Err(CommandError::usage("cp", "missing file operand")),
        [src] => {
            return Err(CommandError::usage(
                "cp",
                format!("missing destination file operand after '{}'", src),
            ))
        }
        [src, dst] => (src, dst),
        [_, _, extra, ..] => {
            return Err(CommandError::usage("cp", format!("extra operand '{}'", extra)))
        }
    };

    let src_path = state.resolve(src);
    let mut dst_path = state.resolve(dst);
    let Some(vfs) = state.vfs.as_mut() else {
        return Ok(ExecResult::new(
            format!("cp: would copy '{}' to '{}'\n", src, dst),
            String::new(),
            0,
        ));
    };

    if vfs.is_directory(&dst_path) {
        dst_path = join(&dst_path, basename(&src_path));
    }

    match vfs.copy_file(&src_path, &dst_path) {
        Ok(()) => Ok(ExecResult::ok()),
        Err(e) => {
            let message = match e {
                VfsError::SourceMissing { .. } => {
                    format!("cannot stat '{}': No such file or directory", src)
                }
                VfsError::IsADirectory { .. } => {
                    format!("-r not specified; omitting directory '{}'", src)
                }
                other => format!("cannot create regular file '{}': {}", dst, other.reason()),
            };
            Err(CommandError::execution("cp", message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::types::test_support::*;

    #[test]
    fn test_cp_file() {
        let mut state = vfs_state();
        let result = handle_cp(&mut state, &args(&["/readme", "/a/copy"])).unwrap();
        assert_eq!(result.exit_code, 0);
        assert_eq!(state.vfs.as_ref().unwrap().read_file("/a/copy").unwrap(), "read me");
    }

    #[test]
    fn test_cp_into_directory() {
        let mut state = vfs_state();
        handle_cp(&mut state, &args(&["/readme", "/a/b"])).unwrap();
        assert_eq!(state.vfs.as_ref().unwrap().read_file("/a/b/readme").unwrap(), "read me");
    }

    #[test]
    fn test_cp_missing_source() {
        let mut state = vfs_state();
        let err = handle_cp(&mut state, &args(&["/missing", "/a/g"])).unwrap_err();
        assert_eq!(err.to_string(), "cp: cannot stat '/missing': No such file or directory");
        assert!(!state.vfs.as_ref().unwrap().exists("/a/g"));
    }

    #[test]
    fn test_cp_parent_missing() {
        let mut state = vfs_state();
        let err = handle_cp(&mut state, &args(&["/readme", "/nope/g"])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "cp: cannot create regular file '/nope/g': No such file or directory"
        );
        assert!(!state.vfs.as_ref().unwrap().exists("/nope"));
    }

    #[test]
    fn test_cp_existing_destination() {
        let mut state = vfs_state();
        let err = handle_cp(&mut state, &args(&["/readme", "/a/b/x.txt"])).unwrap_err();
        assert!(err.to_string().contains("File exists"));
        assert_eq!(state.vfs.as_ref().unwrap().read_file("/a/b/x.txt").unwrap(), "ex\n");
    }

    #[test]
    fn test_cp_operand_count() {
        let mut state = vfs_state();
        assert!(matches!(handle_cp(&mut state, &[]), Err(CommandError::Usage { .. })));
        assert!(matches!(
            handle_cp(&mut state, &args(&["a", "b", "c"])),
            Err(CommandError::Usage { .. })
        ));
    }
}
