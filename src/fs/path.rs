//! Path utilities
//!
//! String-level path handling shared by the session and the tree. None of
//! these touch the tree itself.

/// Normalize a path: collapse empty and `.` segments, apply `..`
/// (clamped at root). The result is always absolute.
pub fn normalize_path(path: &str) -> String {
    let mut resolved: Vec<&str> = Vec::new();
    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                resolved.pop();
            }
            _ => resolved.push(part),
        }
    }
    if resolved.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", resolved.join("/"))
    }
}

/// Resolve `target` against the cursor `cwd`.
///
/// A leading `/` is absolute from root; anything else is relative to
/// `cwd`.
pub fn resolve_path(cwd: &str, target: &str) -> String {
    if target.starts_with('/') {
        normalize_path(target)
    } else {
        normalize_path(&format!("{}/{}", cwd, target))
    }
}

/// Non-empty segments of a path.
pub fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|p| !p.is_empty()).collect()
}

/// Split a path into its parent segments and leaf name.
///
/// Returns `None` for the root, which has no leaf.
pub fn split_parent(path: &str) -> Option<(Vec<&str>, &str)> {
    let mut parts = segments(path);
    let leaf = parts.pop()?;
    Some((parts, leaf))
}

/// Last segment of a path, `/` for root.
pub fn basename(path: &str) -> &str {
    segments(path).last().copied().unwrap_or("/")
}

/// Join a directory path and a child name.
pub fn join(dir: &str, name: &str) -> String {
    if dir.ends_with('/') {
        format!("{}{}", dir, name)
    } else {
        format!("{}/{}", dir, name)
    }
}
