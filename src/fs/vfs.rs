//! Virtual File System Tree
//!
//! An in-memory directory/file tree addressed by `/`-separated paths.
//! Paths handed to these operations are expected to be normalized
//! (see `fs::path`); empty segments are ignored and nothing is ever
//! created implicitly while walking.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tracing::debug;

use super::path::{segments, split_parent};
use super::types::{DirEntry, VfsError, VfsNode};

/// The virtual file system: one root directory plus the document it
/// was built from, if any.
#[derive(Debug, Clone)]
pub struct Vfs {
    root: VfsNode,
    source: Option<PathBuf>,
}

impl Vfs {
    /// Create an empty file system with only `/`.
    pub fn new() -> Self {
        Self {
            root: VfsNode::empty_dir(),
            source: None,
        }
    }

    /// Wrap an already-built tree. `root` must be a directory; a file is
    /// replaced by an empty root.
    pub fn from_root(root: VfsNode, source: Option<PathBuf>) -> Self {
        let root = if root.is_directory() {
            root
        } else {
            VfsNode::empty_dir()
        };
        Self { root, source }
    }

    /// Document this tree was loaded from.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn root(&self) -> &VfsNode {
        &self.root
    }

    /// Walk from the root to the directory at `path`.
    pub fn resolve_directory(&self, path: &str) -> Result<&VfsNode, VfsError> {
        let mut node = &self.root;
        for seg in segments(path) {
            node = match node {
                VfsNode::Directory { children } => {
                    children.get(seg).ok_or_else(|| VfsError::NotFound {
                        path: path.to_string(),
                        operation: "resolve",
                    })?
                }
                VfsNode::File { .. } => {
                    return Err(VfsError::NotADirectory {
                        path: path.to_string(),
                        operation: "resolve",
                    })
                }
            };
        }
        if node.is_directory() {
            Ok(node)
        } else {
            Err(VfsError::NotADirectory {
                path: path.to_string(),
                operation: "resolve",
            })
        }
    }

    /// Whether `path` names an existing directory.
    pub fn is_directory(&self, path: &str) -> bool {
        self.resolve_directory(path).is_ok()
    }

    /// Whether `path` names an existing node of either kind.
    pub fn exists(&self, path: &str) -> bool {
        self.lookup(path).is_some()
    }

    /// List a directory: files first, then directories, each group sorted
    /// by name.
    pub fn list(&self, path: &str) -> Result<Vec<DirEntry>, VfsError> {
        let dir = self.resolve_directory(path).map_err(|e| relabel(e, "scandir"))?;
        let mut entries: Vec<DirEntry> = dir
            .children()
            .map(|children| {
                children
                    .iter()
                    .map(|(name, node)| DirEntry {
                        kind: node.kind(),
                        name: name.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default();
        entries.sort();
        Ok(entries)
    }

    /// Read the content of the file at `path`.
    pub fn read_file(&self, path: &str) -> Result<&str, VfsError> {
        let not_found = || VfsError::NotFound {
            path: path.to_string(),
            operation: "open",
        };
        let (parent, leaf) = split_parent(path).ok_or_else(|| VfsError::IsADirectory {
            path: path.to_string(),
            operation: "read",
        })?;
        let dir = self.walk(&parent).ok_or_else(not_found)?;
        match dir.get(leaf) {
            Some(VfsNode::File { content }) => Ok(content),
            Some(VfsNode::Directory { .. }) => Err(VfsError::IsADirectory {
                path: path.to_string(),
                operation: "read",
            }),
            None => Err(not_found()),
        }
    }

    /// Create an empty directory. Never overwrites.
    pub fn make_directory(&mut self, path: &str) -> Result<(), VfsError> {
        self.insert(path, VfsNode::empty_dir(), "mkdir")
    }

    /// Create a file with `content`. Never overwrites.
    pub fn make_file(&mut self, path: &str, content: &str) -> Result<(), VfsError> {
        self.insert(path, VfsNode::file(content), "open")
    }

    /// Copy the content of file `src` into a new file `dst`.
    ///
    /// The destination is untouched when the source cannot be read.
    pub fn copy_file(&mut self, src: &str, dst: &str) -> Result<(), VfsError> {
        let content = match self.read_file(src) {
            Ok(content) => content.to_string(),
            Err(VfsError::IsADirectory { .. }) => {
                return Err(VfsError::IsADirectory {
                    path: src.to_string(),
                    operation: "copyfile",
                })
            }
            Err(_) => {
                return Err(VfsError::SourceMissing {
                    path: src.to_string(),
                    operation: "copyfile",
                })
            }
        };
        self.insert(dst, VfsNode::file(content), "copyfile")
    }

    fn lookup(&self, path: &str) -> Option<&VfsNode> {
        match split_parent(path) {
            None => Some(&self.root),
            Some((parent, leaf)) => self.walk(&parent)?.get(leaf),
        }
    }

    /// Children of the directory reached by following `parts` from root.
    fn walk(&self, parts: &[&str]) -> Option<&IndexMap<String, VfsNode>> {
        let mut node = &self.root;
        for part in parts {
            node = node.children()?.get(*part)?;
        }
        node.children()
    }

    fn walk_mut(&mut self, parts: &[&str]) -> Option<&mut IndexMap<String, VfsNode>> {
        let mut node = &mut self.root;
        for part in parts {
            node = match node {
                VfsNode::Directory { children } => children.get_mut(*part)?,
                VfsNode::File { .. } => return None,
            };
        }
        match node {
            VfsNode::Directory { children } => Some(children),
            VfsNode::File { .. } => None,
        }
    }

    fn insert(&mut self, path: &str, node: VfsNode, operation: &'static str) -> Result<(), VfsError> {
        let (parent, leaf) = split_parent(path).ok_or_else(|| VfsError::AlreadyExists {
            path: path.to_string(),
            operation,
        })?;
        let children = self.walk_mut(&parent).ok_or_else(|| VfsError::ParentMissing {
            path: path.to_string(),
            operation,
        })?;
        if children.contains_key(leaf) {
            return Err(VfsError::AlreadyExists {
                path: path.to_string(),
                operation,
            });
        }
        debug!(path, kind = %node.kind(), "vfs insert");
        children.insert(leaf.to_string(), node);
        Ok(())
    }
}

impl Default for Vfs {
    fn default() -> Self {
        Self::new()
    }
}

fn relabel(err: VfsError, operation: &'static str) -> VfsError {
    match err {
        VfsError::NotFound { path, .. } => VfsError::NotFound { path, operation },
        VfsError::NotADirectory { path, .. } => VfsError::NotADirectory { path, operation },
        other => other,
    }
}
