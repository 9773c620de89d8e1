//! Variable Expansion
//!
//! Textual substitution of `${NAME}` and `$NAME` references. Unset
//! variables are left in place verbatim; there is no nesting, command
//! substitution or arithmetic.

use std::collections::HashMap;

use regex_lite::{Captures, Regex};

lazy_static::lazy_static! {
    /// `${NAME}` - anything up to the closing brace names the variable.
    static ref BRACED_VAR: Regex = Regex::new(r"\$\{([^}]+)\}").unwrap();
    /// `$NAME` - letter or underscore, then letters, digits, underscores.
    static ref SIMPLE_VAR: Regex = Regex::new(r"\$([A-Za-z_][A-Za-z0-9_]*)").unwrap();
}

/// Expand variable references in `text` against `env`.
///
/// The braced form is substituted first so that `${HOME}x` is never read
/// as `$HOME` followed by garbage.
pub fn expand_variables(text: &str, env: &HashMap<String, String>) -> String {
    if !text.contains('$') {
        return text.to_string();
    }

    let braced = BRACED_VAR.replace_all(text, |caps: &Captures| {
        let name = caps.get(1).map(|m| m.as_str()).unwrap_or("");
        env.get(name)
            .cloned()
            .unwrap_or_else(|| format!("${{{}}}", name))
    });

    SIMPLE_VAR
        .replace_all(&braced, |caps: &Captures| {
            let name = caps.get(1).map(|m| m.as_str()).unwrap_or("");
            env.get(name).cloned().unwrap_or_else(|| format!("${}", name))
        })
        .into_owned()
}
