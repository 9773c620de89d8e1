//! File System Module
//!
//! In-memory virtual file system for the shell:
//! - `Vfs`: the directory/file tree and its path-addressed operations
//! - `document`: building a tree from a JSON or YAML document
//! - `path`: normalization and cursor-relative resolution

pub mod document;
pub mod path;
pub mod types;
pub mod vfs;

pub use document::{DocumentError, DocumentFormat};
pub use path::{normalize_path, resolve_path};
pub use types::*;
pub use vfs::Vfs;
