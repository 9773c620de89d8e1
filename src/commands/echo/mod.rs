// src/commands/echo/mod.rs
use crate::interpreter::types::ExecResult;

/// Print the arguments joined by single spaces, newline-terminated.
///
/// Arguments arrive already expanded and with their quote characters
/// intact; echo prints them exactly as given.
pub fn handle_echo(args: &[String]) -> ExecResult {
    let mut output = args.join(" ");
    output.push('\n');
    ExecResult::new(output, String::new(), 0)
}
