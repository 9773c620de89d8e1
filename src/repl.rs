//! Interactive read loop.

use std::io;

use anyhow::{Context, Result};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{info, warn};

use crate::interpreter::{Builtin, InterpreterError};
use crate::shell::{write_output, write_result, ScriptError, Shell};

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    ExecutingStartupScript,
    Running,
    /// Carries the process exit status.
    Terminated(i32),
}

fn banner() -> String {
    let names: Vec<&str> = Builtin::ALL.iter().map(|b| b.name()).collect();
    format!(
        "Welcome to the shell emulator!\n\
         Available commands: {}\n\
         Environment variables are expanded: $VAR, ${{VAR}}\n\
         Use 'exit' or Ctrl+C to leave\n{}",
        names.join(", "),
        "-".repeat(50)
    )
}

/// Replay the configured startup script, if any.
fn run_startup(shell: &mut Shell) -> Result<SessionState> {
    let Some(path) = shell.config().startup_script.clone() else {
        return Ok(SessionState::Running);
    };
    let stdout = io::stdout();
    let stderr = io::stderr();
    match shell.run_startup_script(&path, &mut stdout.lock(), &mut stderr.lock()) {
        Ok(report) => {
            info!(?report, "startup script complete");
            Ok(SessionState::Running)
        }
        Err(ScriptError::Exited(exit)) => Ok(SessionState::Terminated(exit.exit_code)),
        Err(e @ ScriptError::Unavailable { .. }) => {
            warn!("{}", e);
            eprintln!("{}", e);
            Ok(SessionState::Running)
        }
        Err(ScriptError::Output(e)) => Err(e).context("writing startup script output"),
    }
}

/// Run the session until `exit`, end of input or interrupt. Returns the
/// process exit status.
pub fn run(shell: &mut Shell) -> Result<i32> {
    let mut state = if shell.config().startup_script.is_some() {
        SessionState::ExecutingStartupScript
    } else {
        SessionState::Running
    };

    if state == SessionState::ExecutingStartupScript {
        state = run_startup(shell)?;
    }
    if let SessionState::Terminated(code) = state {
        return Ok(code);
    }

    println!("{}", banner());
    let mut rl = DefaultEditor::new().context("Failed to create editor")?;

    while state == SessionState::Running {
        match rl.readline(&shell.prompt()) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = rl.add_history_entry(line.as_str());
                }
                state = run_line(shell, &line)?;
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("\nExiting shell");
                state = SessionState::Terminated(0);
            }
            Err(err) => return Err(err).context("reading input"),
        }
    }

    match state {
        SessionState::Terminated(code) => Ok(code),
        _ => Ok(0),
    }
}

/// Non-interactive mode: replay the startup script, then run `line`.
/// Returns the process exit status.
pub fn run_command(shell: &mut Shell, line: &str) -> Result<i32> {
    if let SessionState::Terminated(code) = run_startup(shell)? {
        return Ok(code);
    }
    let state = run_line(shell, line)?;
    Ok(match state {
        SessionState::Terminated(code) => code,
        _ => shell.last_exit_code(),
    })
}

/// Execute one interactive line and print its output.
pub fn run_line(shell: &mut Shell, line: &str) -> Result<SessionState> {
    let stdout = io::stdout();
    let stderr = io::stderr();
    let (mut out, mut err) = (stdout.lock(), stderr.lock());
    match shell.execute(line) {
        Ok(result) => {
            write_result(&result, &mut out, &mut err).context("writing command output")?;
            Ok(SessionState::Running)
        }
        Err(InterpreterError::Exit(exit)) => {
            write_output(&exit.stdout, &exit.stderr, &mut out, &mut err)
                .context("writing command output")?;
            Ok(SessionState::Terminated(exit.exit_code))
        }
    }
}
