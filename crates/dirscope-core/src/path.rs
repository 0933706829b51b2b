//! Root-confined path resolution.
//!
//! The listing endpoint exchanges absolute paths with the browser, so every
//! client-supplied path must be pinned inside the served root before any
//! filesystem access. Resolution happens after canonicalisation, which also
//! closes the symlink-out-of-root hole.

use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};

/// Resolves a requested path against the served root.
///
/// `root` must already be canonical (the server canonicalises it at
/// startup). A `None` or empty request resolves to the root itself.
///
/// # Errors
///
/// - [`CoreError::NotFound`] — the requested path does not exist.
/// - [`CoreError::PermissionDenied`] — a component is not traversable.
/// - [`CoreError::OutsideRoot`] — the canonical path escapes `root`.
pub fn resolve_within(root: &Path, requested: Option<&Path>) -> CoreResult<PathBuf> {
    let target = match requested {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => root.to_path_buf(),
    };

    let canonical = target.canonicalize().map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => CoreError::NotFound(target.clone()),
        std::io::ErrorKind::PermissionDenied => CoreError::PermissionDenied(target.clone()),
        _ => CoreError::Io(e),
    })?;

    if !canonical.starts_with(root) {
        return Err(CoreError::OutsideRoot(target));
    }

    Ok(canonical)
}

/// Derives the parent of `path`, clamped to the served root.
///
/// Returns `None` when `path` is the root itself or when the parent would
/// fall outside the root. This drives the list view's `..` row: the row
/// disappears exactly when there is nowhere left to go up.
pub fn parent_within(path: &Path, root: &Path) -> Option<PathBuf> {
    if path == root {
        return None;
    }
    path.parent()
        .filter(|p| p.starts_with(root))
        .map(Path::to_path_buf)
}

/// Joins a single child name onto a directory path.
///
/// # Errors
///
/// [`CoreError::InvalidName`] when `name` is empty, `.`/`..`, or contains a
/// path separator or NUL. This keeps a joined path inside its directory by
/// construction.
pub fn join_name(dir: &Path, name: &str) -> CoreResult<PathBuf> {
    let has_separator = name.chars().any(|c| matches!(c, '/' | '\\' | '\0'));
    if name.is_empty() || name == "." || name == ".." || has_separator {
        return Err(CoreError::InvalidName(name.to_string()));
    }
    Ok(dir.join(name))
}
