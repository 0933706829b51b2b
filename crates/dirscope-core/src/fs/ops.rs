//! Directory reading operations.

use std::path::Path;

use crate::error::{CoreError, CoreResult};
use crate::fs::entry::FileEntry;

/// Reads the immediate contents of a directory and returns them as [`FileEntry`] values.
///
/// The returned entries are **unsorted**. Use [`crate::sort::sort_entries`]
/// to apply sorting after reading. Entries that disappear or become
/// unreadable mid-read are skipped rather than failing the whole listing.
///
/// # Errors
///
/// - [`CoreError::NotFound`] — the path does not exist.
/// - [`CoreError::NotADirectory`] — the path is not a directory.
/// - [`CoreError::PermissionDenied`] — read access is denied.
/// - [`CoreError::Io`] — any other I/O error.
///
/// # Examples
///
/// ```no_run
/// use dirscope_core::read_directory;
/// use std::path::Path;
///
/// let entries = read_directory(Path::new("/home/user")).unwrap();
/// for entry in &entries {
///     println!("{}", entry.name());
/// }
/// ```
pub fn read_directory(path: &Path) -> CoreResult<Vec<FileEntry>> {
    if !path.exists() {
        return Err(CoreError::NotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(CoreError::NotADirectory(path.to_path_buf()));
    }

    let read_dir = std::fs::read_dir(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::PermissionDenied {
            CoreError::PermissionDenied(path.to_path_buf())
        } else {
            CoreError::Io(e)
        }
    })?;

    let mut entries = Vec::new();

    for dir_entry in read_dir {
        let dir_entry = match dir_entry {
            Ok(e) => e,
            Err(e) => {
                tracing::debug!("skipping unreadable entry in {}: {e}", path.display());
                continue;
            }
        };
        // DirEntry::metadata does not follow symlinks, so links show up as links
        let metadata = match dir_entry.metadata() {
            Ok(m) => m,
            Err(e) => {
                tracing::debug!("skipping {}: {e}", dir_entry.path().display());
                continue;
            }
        };
        entries.push(FileEntry::new(dir_entry.path(), &metadata));
    }

    Ok(entries)
}
