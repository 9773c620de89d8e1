//! Builtin Command Dispatch
//!
//! The closed set of supported commands and the single function that
//! routes each one to its handler.

use std::fmt;
use std::str::FromStr;

use crate::commands::{
    handle_cat, handle_cp, handle_echo, handle_ls, handle_mkdir, handle_pwd, handle_touch,
};
use crate::interpreter::builtins::{handle_cd, handle_conf_dump, handle_exit};
use crate::interpreter::errors::{CommandError, InterpreterError};
use crate::interpreter::types::{ExecResult, InterpreterState};

/// Every command the shell understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    Ls,
    Cd,
    Echo,
    Cat,
    Pwd,
    Mkdir,
    Touch,
    Cp,
    ConfDump,
    Exit,
}

impl Builtin {
    pub const ALL: [Builtin; 10] = [
        Builtin::Ls,
        Builtin::Cd,
        Builtin::Echo,
        Builtin::Cat,
        Builtin::Pwd,
        Builtin::Mkdir,
        Builtin::Touch,
        Builtin::Cp,
        Builtin::ConfDump,
        Builtin::Exit,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Builtin::Ls => "ls",
            Builtin::Cd => "cd",
            Builtin::Echo => "echo",
            Builtin::Cat => "cat",
            Builtin::Pwd => "pwd",
            Builtin::Mkdir => "mkdir",
            Builtin::Touch => "touch",
            Builtin::Cp => "cp",
            Builtin::ConfDump => "conf-dump",
            Builtin::Exit => "exit",
        }
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Builtin {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Builtin::ALL
            .into_iter()
            .find(|b| b.name() == s)
            .ok_or_else(|| CommandError::NotFound(s.to_string()))
    }
}

/// Run `builtin` with `args`.
///
/// Handler failures come back as a failed `ExecResult`; only `exit`
/// produces an error.
pub fn dispatch_builtin(
    state: &mut InterpreterState,
    builtin: Builtin,
    args: &[String],
) -> Result<ExecResult, InterpreterError> {
    let outcome = match builtin {
        Builtin::Ls => handle_ls(state, args),
        Builtin::Cd => handle_cd(state, args),
        Builtin::Echo => Ok(handle_echo(args)),
        Builtin::Cat => handle_cat(state, args),
        Builtin::Pwd => Ok(handle_pwd(state)),
        Builtin::Mkdir => handle_mkdir(state, args),
        Builtin::Touch => handle_touch(state, args),
        Builtin::Cp => handle_cp(state, args),
        Builtin::ConfDump => Ok(handle_conf_dump(state)),
        Builtin::Exit => return Err(handle_exit(args).into()),
    };

    Ok(outcome.unwrap_or_else(CommandError::into_result))
}
