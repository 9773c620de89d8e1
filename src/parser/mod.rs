//! Parser module
//!
//! Turns a raw input line into the argument list handed to the dispatcher.

pub mod expansion;
pub mod lexer;

pub use expansion::expand_variables;
pub use lexer::tokenize;
