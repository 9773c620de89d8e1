//! VFS Document Loading
//!
//! Builds a tree from a serialized document. Each node carries a `type`
//! tag (`directory` or `file`) and a `name`; directories list
//! `children`, files carry `content`, optionally tagged
//! `"encoding": "base64"`.
//!
//! JSON is the default format; `.yaml`/`.yml` files are read as YAML.

use std::path::{Path, PathBuf};

use base64::Engine;
use indexmap::IndexMap;
use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use super::types::VfsNode;
use super::vfs::Vfs;

/// Document loading errors
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("cannot read VFS document '{}': {source}", path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed VFS document: {message}")]
    Malformed { message: String },
}

impl DocumentError {
    fn malformed(message: impl Into<String>) -> Self {
        DocumentError::Malformed {
            message: message.into(),
        }
    }
}

/// Serialization format of a VFS document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentFormat {
    #[default]
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Pick a format from the file extension; anything unrecognized is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => DocumentFormat::Yaml,
            _ => DocumentFormat::Json,
        }
    }
}

/// How a file node's `content` is encoded in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentEncoding {
    #[default]
    Text,
    Base64,
}

/// One node as it appears in the document.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum DocumentNode {
    Directory {
        #[serde(default)]
        name: String,
        #[serde(default)]
        children: Vec<DocumentNode>,
    },
    File {
        name: String,
        #[serde(default, deserialize_with = "scalar_text")]
        content: String,
        #[serde(default)]
        encoding: ContentEncoding,
    },
}

/// Accept any scalar as file content. YAML reads `content: 42` as an
/// integer and a bare `content:` as null.
fn scalar_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct ScalarText;

    impl<'de> Visitor<'de> for ScalarText {
        type Value = String;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            f.write_str("a string or scalar value")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
            Ok(v)
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_unit<E: de::Error>(self) -> Result<String, E> {
            Ok(String::new())
        }

        fn visit_none<E: de::Error>(self) -> Result<String, E> {
            Ok(String::new())
        }
    }

    deserializer.deserialize_any(ScalarText)
}

impl Vfs {
    /// Load a tree from the document at `path`.
    pub fn load_from_document(path: &Path) -> Result<Vfs, DocumentError> {
        let text = std::fs::read_to_string(path).map_err(|source| DocumentError::Unavailable {
            path: path.to_path_buf(),
            source,
        })?;
        let root = parse_document(&text, DocumentFormat::from_path(path))?;
        info!(path = %path.display(), "loaded VFS document");
        Ok(Vfs::from_root(root, Some(path.to_path_buf())))
    }

    /// Load a tree, degrading to an empty root (with a warning) when the
    /// document is missing or malformed.
    pub fn from_document_or_empty(path: &Path) -> Vfs {
        match Vfs::load_from_document(path) {
            Ok(vfs) => vfs,
            Err(e) => {
                warn!("{}; starting with an empty VFS", e);
                Vfs::from_root(VfsNode::empty_dir(), Some(path.to_path_buf()))
            }
        }
    }
}

/// Parse document text into a root directory node.
pub fn parse_document(text: &str, format: DocumentFormat) -> Result<VfsNode, DocumentError> {
    let doc: DocumentNode = match format {
        DocumentFormat::Json => {
            serde_json::from_str(text).map_err(|e| DocumentError::malformed(e.to_string()))?
        }
        DocumentFormat::Yaml => {
            serde_yaml::from_str(text).map_err(|e| DocumentError::malformed(e.to_string()))?
        }
    };

    match doc {
        DocumentNode::Directory { children, .. } => build_directory(children, ""),
        DocumentNode::File { name, .. } => Err(DocumentError::malformed(format!(
            "top-level node '{}' must be a directory",
            name
        ))),
    }
}

/// Build a directory node bottom-up from its document children.
fn build_directory(children: Vec<DocumentNode>, dir_path: &str) -> Result<VfsNode, DocumentError> {
    let mut built: IndexMap<String, VfsNode> = IndexMap::new();

    for child in children {
        let (name, node) = match child {
            DocumentNode::Directory { name, children } => {
                validate_name(&name, dir_path)?;
                let path = format!("{}/{}", dir_path, name);
                let node = build_directory(children, &path)?;
                (name, node)
            }
            DocumentNode::File { name, content, encoding } => {
                validate_name(&name, dir_path)?;
                let path = format!("{}/{}", dir_path, name);
                let content = decode_content(content, encoding, &path);
                (name, VfsNode::File { content })
            }
        };
        if built.contains_key(&name) {
            warn!(path = %format!("{}/{}", dir_path, name), "duplicate entry in VFS document, keeping the later one");
        }
        built.insert(name, node);
    }

    Ok(VfsNode::Directory { children: built })
}

fn validate_name(name: &str, dir_path: &str) -> Result<(), DocumentError> {
    if name.is_empty() || name.contains('/') || name == "." || name == ".." {
        return Err(DocumentError::malformed(format!(
            "invalid node name '{}' under '{}/'",
            name, dir_path
        )));
    }
    Ok(())
}

/// Decode file content. A base64 payload that fails to decode is kept
/// verbatim.
fn decode_content(raw: String, encoding: ContentEncoding, path: &str) -> String {
    match encoding {
        ContentEncoding::Text => raw,
        ContentEncoding::Base64 => {
            let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
            match base64::engine::general_purpose::STANDARD.decode(compact.as_bytes()) {
                Ok(bytes) => match String::from_utf8(bytes) {
                    Ok(s) => s,
                    Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
                },
                Err(e) => {
                    warn!(path, error = %e, "base64 decode failed, keeping raw content");
                    raw
                }
            }
        }
    }
}
