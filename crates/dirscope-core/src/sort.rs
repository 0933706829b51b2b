//! Sorting and filtering for file entries.

use serde::Deserialize;

use crate::fs::entry::FileEntry;

/// The field by which entries are compared.
///
/// Deserialises from the lowercase strings the listing endpoint accepts
/// in its `sort` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    /// Sort alphabetically by name (case-insensitive).
    Name,
    /// Sort by file size in bytes.
    Size,
    /// Sort by last-modified time.
    Date,
    /// Sort by file extension (case-insensitive).
    Type,
}

/// Sort order, deserialisable from `asc`/`desc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum SortDirection {
    /// Smallest / earliest / A–Z first.
    #[serde(rename = "asc")]
    Ascending,
    /// Largest / latest / Z–A first.
    #[serde(rename = "desc")]
    Descending,
}

/// Sorts a list of file entries by the given field and direction.
///
/// When `dirs_first` is `true`, directories always appear before files
/// regardless of the sort field. Returns a **new** sorted `Vec<FileEntry>`
/// — the input slice is never mutated.
pub fn sort_entries(
    entries: &[FileEntry],
    field: SortField,
    direction: SortDirection,
    dirs_first: bool,
) -> Vec<FileEntry> {
    let mut sorted: Vec<FileEntry> = entries.to_vec();

    sorted.sort_by(|a, b| {
        if dirs_first {
            let dir_cmp = b.is_dir().cmp(&a.is_dir());
            if dir_cmp != std::cmp::Ordering::Equal {
                return dir_cmp;
            }
        }

        let ord = compare_by_field(a, b, field);

        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });

    sorted
}

fn compare_by_field(a: &FileEntry, b: &FileEntry, field: SortField) -> std::cmp::Ordering {
    match field {
        SortField::Name => a.name().to_lowercase().cmp(&b.name().to_lowercase()),
        SortField::Size => a.size().cmp(&b.size()),
        SortField::Date => a.modified().cmp(&b.modified()),
        SortField::Type => {
            let ext_a = extension_lower(a);
            let ext_b = extension_lower(b);
            ext_a.cmp(&ext_b)
        }
    }
}

fn extension_lower(entry: &FileEntry) -> String {
    entry
        .path()
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

/// Removes hidden (dot-prefixed) entries from a listing.
pub fn filter_hidden(entries: &[FileEntry]) -> Vec<FileEntry> {
    entries
        .iter()
        .filter(|e| !e.is_hidden())
        .cloned()
        .collect()
}
