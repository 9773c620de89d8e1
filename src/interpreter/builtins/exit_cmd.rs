//! exit - Exit shell builtin

use crate::interpreter::errors::ExitError;

/// Status used when the argument is not an integer.
pub const EXIT_BAD_ARGUMENT: i32 = 1;

/// Handle the exit builtin command.
///
/// Always produces an `ExitError`; the session turns it into process
/// termination. Extra arguments after the first are ignored.
pub fn handle_exit(args: &[String]) -> ExitError {
    let Some(arg) = args.first() else {
        return ExitError::new(0, "Exiting shell\n".to_string(), String::new());
    };

    let arg = arg.trim();
    match wrapped_status(arg) {
        Some(code) => ExitError::new(code, format!("Exiting with code: {}\n", arg), String::new()),
        None => ExitError::new(
            EXIT_BAD_ARGUMENT,
            String::new(),
            format!("exit: {}: numeric argument required\n", arg),
        ),
    }
}

/// Decimal integer of any length, reduced modulo 256 (wrap around).
fn wrapped_status(arg: &str) -> Option<i32> {
    let (negative, digits) = match arg.as_bytes().first()? {
        b'-' => (true, &arg[1..]),
        b'+' => (false, &arg[1..]),
        _ => (false, arg),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let rem = digits
        .bytes()
        .fold(0u32, |acc, b| (acc * 10 + u32::from(b - b'0')) % 256);
    let code = if negative { (256 - rem) % 256 } else { rem };
    Some(code as i32)
}
