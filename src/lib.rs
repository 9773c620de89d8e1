//! vfs-shell - a UNIX-like shell prompt emulator
//!
//! Runs a small set of commands either as stubs against the host (no VFS)
//! or for real against an in-memory virtual file system loaded from a
//! JSON/YAML document.

pub mod commands;
pub mod config;
pub mod fs;
pub mod interpreter;
pub mod parser;
pub mod repl;
pub mod shell;

pub use config::ShellConfig;
pub use fs::{Vfs, VfsError, VfsNode};
pub use interpreter::{Builtin, ExecResult, InterpreterError};
pub use parser::tokenize;
pub use shell::{ScriptError, ScriptReport, Shell};
