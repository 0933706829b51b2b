//! File system abstractions for dirscope.
//!
//! This module provides the type for representing file entries
//! ([`entry::FileEntry`]) and the directory read behind the listing
//! endpoint ([`ops::read_directory`]).

pub mod entry;
pub mod ops;
