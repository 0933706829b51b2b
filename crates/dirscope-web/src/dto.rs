use std::time::UNIX_EPOCH;

use serde::{Deserialize, Serialize};

use dirscope_core::{FileEntry, SortDirection, SortField};

#[derive(Debug, Serialize)]
pub struct FileEntryDto {
    pub name: String,
    pub path: String,
    pub is_dir: bool,
    pub is_hidden: bool,
    pub is_symlink: bool,
    /// `null` for directories.
    pub size: Option<u64>,
    /// Unix seconds; `null` when the filesystem doesn't report it.
    pub modified: Option<u64>,
}

impl From<&FileEntry> for FileEntryDto {
    fn from(entry: &FileEntry) -> Self {
        Self {
            name: entry.name().to_string(),
            path: entry.path().to_string_lossy().to_string(),
            is_dir: entry.is_dir(),
            is_hidden: entry.is_hidden(),
            is_symlink: entry.is_symlink(),
            size: if entry.is_dir() {
                None
            } else {
                Some(entry.size())
            },
            modified: entry
                .modified()
                .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
                .map(|d| d.as_secs()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListDirQuery {
    pub path: Option<String>,
    /// Include dot-entries when `true`.
    #[serde(default)]
    pub hidden: bool,
    pub sort: Option<SortField>,
    pub order: Option<SortDirection>,
}

#[derive(Debug, Serialize)]
pub struct ListDirResponse {
    pub entries: Vec<FileEntryDto>,
    pub current_path: String,
    /// `null` when `current_path` is the served root.
    pub parent: Option<String>,
}
