//! dirscope core library — UI-agnostic file explorer logic.
//!
//! `dirscope-core` provides the types and operations behind the dirscope
//! web explorer. It knows nothing about HTTP or the browser frontend, so
//! the same logic could back another frontend without changes.
//!
//! # Modules
//!
//! - [`fs`] — File system abstractions: [`FileEntry`] and directory reading.
//! - [`path`] — Root-confined path resolution and safe child-name joining.
//! - [`sort`] — Listing order: sorting and hidden-entry filtering.
//! - [`fmt`] — Pure formatting helpers (human-readable byte sizes).
//! - [`error`] — Unified error type ([`CoreError`]) and result alias ([`CoreResult`]).

pub mod error;
pub mod fmt;
pub mod fs;
pub mod path;
pub mod sort;

pub use error::{CoreError, CoreResult};
pub use fmt::format_size;
pub use fs::entry::FileEntry;
pub use fs::ops::read_directory;
pub use path::{join_name, parent_within, resolve_within};
pub use sort::{filter_hidden, sort_entries, SortDirection, SortField};
