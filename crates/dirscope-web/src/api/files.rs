use std::path::Path;

use axum::extract::{Query, State};
use axum::Json;

use dirscope_core::{
    filter_hidden, format_size, parent_within, read_directory, resolve_within, sort_entries,
    CoreError, SortDirection, SortField,
};

use crate::dto::{FileEntryDto, ListDirQuery, ListDirResponse};
use crate::error::AppError;
use crate::state::AppState;

/// `GET /api/files` — list the immediate children of a directory.
///
/// Both panes of the frontend are fed by this one endpoint: the list view
/// requests the current path, the tree view requests each expanded folder.
pub async fn list_directory(
    State(state): State<AppState>,
    Query(query): Query<ListDirQuery>,
) -> Result<Json<ListDirResponse>, AppError> {
    let root = &state.config.filesystem.root;

    let requested = query.path.as_deref().map(Path::new);
    let canonical = resolve_within(root, requested)?;

    if !canonical.is_dir() {
        return Err(CoreError::NotADirectory(canonical).into());
    }

    let mut entries = read_directory(&canonical)?;
    if !query.hidden {
        entries = filter_hidden(&entries);
    }

    let field = query.sort.unwrap_or(SortField::Name);
    let order = query.order.unwrap_or(SortDirection::Ascending);
    let sorted = sort_entries(&entries, field, order, true);

    let total: u64 = sorted.iter().map(|e| e.size()).sum();
    tracing::debug!(
        "listed {} ({} entries, {})",
        canonical.display(),
        sorted.len(),
        format_size(total)
    );

    let parent = parent_within(&canonical, root).map(|p| p.to_string_lossy().to_string());

    Ok(Json(ListDirResponse {
        entries: sorted.iter().map(FileEntryDto::from).collect(),
        current_path: canonical.to_string_lossy().to_string(),
        parent,
    }))
}
