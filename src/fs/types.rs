//! File System Types
//!
//! Core types for the virtual file system tree.

use std::fmt;

use indexmap::IndexMap;
use thiserror::Error;

/// VFS operation errors.
///
/// Every VFS operation reports failure through one of these values;
/// nothing in the tree panics or unwinds on a bad path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VfsError {
    #[error("ENOENT: no such file or directory, {operation} '{path}'")]
    NotFound { path: String, operation: &'static str },

    #[error("ENOTDIR: not a directory, {operation} '{path}'")]
    NotADirectory { path: String, operation: &'static str },

    #[error("EISDIR: illegal operation on a directory, {operation} '{path}'")]
    IsADirectory { path: String, operation: &'static str },

    #[error("EEXIST: file already exists, {operation} '{path}'")]
    AlreadyExists { path: String, operation: &'static str },

    #[error("ENOENT: parent directory missing, {operation} '{path}'")]
    ParentMissing { path: String, operation: &'static str },

    #[error("ENOENT: source file missing, {operation} '{path}'")]
    SourceMissing { path: String, operation: &'static str },
}

impl VfsError {
    /// The path the failing operation was given.
    pub fn path(&self) -> &str {
        match self {
            VfsError::NotFound { path, .. }
            | VfsError::NotADirectory { path, .. }
            | VfsError::IsADirectory { path, .. }
            | VfsError::AlreadyExists { path, .. }
            | VfsError::ParentMissing { path, .. }
            | VfsError::SourceMissing { path, .. } => path,
        }
    }

    /// Short, shell-style reason text (`No such file or directory`, ...).
    pub fn reason(&self) -> &'static str {
        match self {
            VfsError::NotFound { .. }
            | VfsError::ParentMissing { .. }
            | VfsError::SourceMissing { .. } => "No such file or directory",
            VfsError::NotADirectory { .. } => "Not a directory",
            VfsError::IsADirectory { .. } => "Is a directory",
            VfsError::AlreadyExists { .. } => "File exists",
        }
    }
}

/// A node of the tree: a directory holding named children, or a file
/// holding text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VfsNode {
    Directory { children: IndexMap<String, VfsNode> },
    File { content: String },
}

impl VfsNode {
    /// An empty directory.
    pub fn empty_dir() -> Self {
        VfsNode::Directory {
            children: IndexMap::new(),
        }
    }

    /// A file with the given content.
    pub fn file(content: impl Into<String>) -> Self {
        VfsNode::File {
            content: content.into(),
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, VfsNode::Directory { .. })
    }

    pub fn is_file(&self) -> bool {
        matches!(self, VfsNode::File { .. })
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            VfsNode::Directory { .. } => NodeKind::Directory,
            VfsNode::File { .. } => NodeKind::File,
        }
    }

    /// Children of a directory, `None` for a file.
    pub fn children(&self) -> Option<&IndexMap<String, VfsNode>> {
        match self {
            VfsNode::Directory { children } => Some(children),
            VfsNode::File { .. } => None,
        }
    }
}

/// Node variant, as reported by directory listings.
///
/// The declaration order is the listing order: files sort before
/// directories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NodeKind {
    File,
    Directory,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::File => write!(f, "file"),
            NodeKind::Directory => write!(f, "directory"),
        }
    }
}

/// Directory entry returned by `Vfs::list`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct DirEntry {
    pub kind: NodeKind,
    pub name: String,
}
