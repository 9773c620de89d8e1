//! Interpreter Types
//!
//! Session state shared by every command handler, and the result type
//! they produce.

use std::collections::HashMap;

use crate::config::ShellConfig;
use crate::fs::{resolve_path, Vfs};

/// Result of executing one command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl ExecResult {
    pub fn new(stdout: String, stderr: String, exit_code: i32) -> Self {
        Self { stdout, stderr, exit_code }
    }

    /// Success result with no output
    pub fn ok() -> Self {
        Self::new(String::new(), String::new(), 0)
    }

    /// Failure result with stderr message and custom exit code
    pub fn failure_with_code(stderr: impl Into<String>, exit_code: i32) -> Self {
        Self::new(String::new(), stderr.into(), exit_code)
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Mutable state of a shell session.
#[derive(Debug, Clone)]
pub struct InterpreterState {
    pub config: ShellConfig,
    /// Loaded virtual file system; `None` runs the shell in stub mode.
    pub vfs: Option<Vfs>,
    /// Cursor inside the VFS. Always names an existing directory.
    pub vfs_cwd: String,
    /// Exit code of last executed command
    pub last_exit_code: i32,
}

impl InterpreterState {
    pub fn new(config: ShellConfig, vfs: Option<Vfs>) -> Self {
        Self {
            config,
            vfs,
            vfs_cwd: "/".to_string(),
            last_exit_code: 0,
        }
    }

    /// Whether commands operate on a loaded VFS.
    pub fn is_vfs_mode(&self) -> bool {
        self.vfs.is_some()
    }

    /// Variables available for `$NAME` expansion.
    pub fn env(&self) -> &HashMap<String, String> {
        &self.config.env
    }

    /// Resolve a command operand against the VFS cursor.
    pub fn resolve(&self, target: &str) -> String {
        resolve_path(&self.vfs_cwd, target)
    }

    /// Reset the cursor to `/` if it no longer names a directory.
    pub fn ensure_cursor(&mut self) {
        if let Some(vfs) = &self.vfs {
            if !vfs.is_directory(&self.vfs_cwd) {
                self.vfs_cwd = "/".to_string();
            }
        }
    }
}
