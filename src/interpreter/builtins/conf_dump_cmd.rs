//! conf-dump - print the session configuration

use crate::interpreter::types::{ExecResult, InterpreterState};

/// Configuration lines followed by the session mode and, in VFS mode,
/// the cursor and document source.
pub fn render_configuration(state: &InterpreterState) -> String {
    let mut out = state.config.dump();
    match &state.vfs {
        Some(vfs) => {
            out.push_str("mode=vfs\n");
            out.push_str(&format!("vfs_cwd={}\n", state.vfs_cwd));
            if let Some(source) = vfs.source() {
                out.push_str(&format!("vfs_source={}\n", source.display()));
            }
        }
        None => out.push_str("mode=stub\n"),
    }
    out
}

pub fn handle_conf_dump(state: &InterpreterState) -> ExecResult {
    ExecResult::new(render_configuration(state), String::new(), 0)
}
