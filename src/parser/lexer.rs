//! Command-line Tokenizer
//!
//! Splits an input line into arguments:
//! - unquoted spaces separate arguments, runs of spaces collapse
//! - `"..."` and `'...'` group text containing spaces
//! - quote characters are kept in the emitted argument
//! - every argument goes through variable expansion before it is emitted
//!
//! The tokenizer never fails. An unterminated quote swallows the rest of
//! the line into the final argument.

use std::collections::HashMap;

use super::expansion::expand_variables;

/// Quoting state while scanning a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuoteState {
    Unquoted,
    Quoted(char),
}

/// Tokenize `line` into an argument list, expanding variables from `env`.
///
/// An empty or whitespace-only line yields an empty list.
pub fn tokenize(line: &str, env: &HashMap<String, String>) -> Vec<String> {
    if line.trim().is_empty() {
        return Vec::new();
    }

    let mut parts = Vec::new();
    let mut current = String::new();
    let mut state = QuoteState::Unquoted;

    for c in line.chars() {
        match (state, c) {
            (QuoteState::Unquoted, '"' | '\'') => {
                state = QuoteState::Quoted(c);
                current.push(c);
            }
            (QuoteState::Quoted(open), _) if c == open => {
                state = QuoteState::Unquoted;
                current.push(c);
            }
            (QuoteState::Unquoted, ' ') => {
                push_fragment(&mut parts, &current, env);
                current.clear();
            }
            _ => current.push(c),
        }
    }
    push_fragment(&mut parts, &current, env);

    parts
}

fn push_fragment(parts: &mut Vec<String>, fragment: &str, env: &HashMap<String, String>) {
    let trimmed = fragment.trim();
    if !trimmed.is_empty() {
        parts.push(expand_variables(trimmed, env));
    }
}
