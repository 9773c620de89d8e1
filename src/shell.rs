//! Shell Session
//!
//! Main entry point for the shell environment.
//! Ties together the configuration, the VFS and the interpreter, and
//! replays startup scripts.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::config::ShellConfig;
use crate::fs::Vfs;
use crate::interpreter::builtins::render_configuration;
use crate::interpreter::{execute_line, ExecResult, ExitError, InterpreterError, InterpreterState};

/// Startup script errors
#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("cannot read startup script '{}': {source}", path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The script ran `exit`.
    #[error(transparent)]
    Exited(ExitError),

    #[error("failed to write script output: {0}")]
    Output(#[from] io::Error),
}

impl From<InterpreterError> for ScriptError {
    fn from(err: InterpreterError) -> Self {
        match err {
            InterpreterError::Exit(e) => ScriptError::Exited(e),
        }
    }
}

/// Counters for one startup-script replay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptReport {
    pub executed: usize,
    pub failed: usize,
    pub skipped: usize,
}

/// A shell session.
pub struct Shell {
    state: InterpreterState,
}

impl Shell {
    /// Create a session. With `config.vfs_path` set, the VFS is loaded from
    /// that document (an unreadable document yields an empty VFS).
    pub fn new(config: ShellConfig) -> Self {
        let vfs = config.vfs_path.as_deref().map(Vfs::from_document_or_empty);
        Self::with_vfs(config, vfs)
    }

    /// Create a session around an already-built VFS (`None` for stub mode).
    pub fn with_vfs(config: ShellConfig, vfs: Option<Vfs>) -> Self {
        Self {
            state: InterpreterState::new(config, vfs),
        }
    }

    /// Execute one line.
    pub fn execute(&mut self, line: &str) -> Result<ExecResult, InterpreterError> {
        execute_line(&mut self.state, line)
    }

    /// `user@host:dir$ `
    pub fn prompt(&self) -> String {
        let config = &self.state.config;
        let dir = if self.state.is_vfs_mode() {
            self.state.vfs_cwd.clone()
        } else {
            config.display_cwd()
        };
        format!("{}@{}:{}$ ", config.username, config.hostname, dir)
    }

    pub fn config(&self) -> &ShellConfig {
        &self.state.config
    }

    pub fn vfs(&self) -> Option<&Vfs> {
        self.state.vfs.as_ref()
    }

    /// Current VFS cursor.
    pub fn vfs_cwd(&self) -> &str {
        &self.state.vfs_cwd
    }

    pub fn last_exit_code(&self) -> i32 {
        self.state.last_exit_code
    }

    /// Same text `conf-dump` prints.
    pub fn configuration_report(&self) -> String {
        render_configuration(&self.state)
    }

    /// Replay a startup script line by line.
    ///
    /// Blank lines and `#` comments are skipped. Every other line is echoed
    /// after the prompt, then executed; failures are reported and the
    /// replay moves on. Only `exit` stops it early.
    pub fn run_startup_script(
        &mut self,
        path: &Path,
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> Result<ScriptReport, ScriptError> {
        let script = std::fs::read_to_string(path).map_err(|source| ScriptError::Unavailable {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "running startup script");

        let mut report = ScriptReport::default();
        for (lineno, raw) in script.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                report.skipped += 1;
                continue;
            }

            writeln!(out, "{}{}", self.prompt(), line)?;
            debug!(line = lineno + 1, "startup script line");
            match self.execute(line) {
                Ok(result) => {
                    report.executed += 1;
                    if !result.is_success() {
                        report.failed += 1;
                    }
                    write_result(&result, out, err)?;
                }
                Err(InterpreterError::Exit(exit)) => {
                    report.executed += 1;
                    write_output(&exit.stdout, &exit.stderr, out, err)?;
                    return Err(ScriptError::Exited(exit));
                }
            }
        }

        info!(
            executed = report.executed,
            failed = report.failed,
            "startup script finished"
        );
        Ok(report)
    }
}

/// Write a command's output, terminating stdout with a newline so the next
/// prompt starts on its own line.
pub fn write_result(result: &ExecResult, out: &mut impl Write, err: &mut impl Write) -> io::Result<()> {
    write_output(&result.stdout, &result.stderr, out, err)
}

/// Write raw stdout/stderr text the way `write_result` does.
pub fn write_output(
    stdout: &str,
    stderr: &str,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<()> {
    if !stdout.is_empty() {
        out.write_all(stdout.as_bytes())?;
        if !stdout.ends_with('\n') {
            out.write_all(b"\n")?;
        }
        out.flush()?;
    }
    if !stderr.is_empty() {
        err.write_all(stderr.as_bytes())?;
        err.flush()?;
    }
    Ok(())
}
