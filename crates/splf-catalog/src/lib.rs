//! # splf-catalog
//!
//! Spooled file catalog helpers for the spooled file toolkit.
//!
//! This crate provides:
//! - Local path names built from a configurable name pattern, and back
//! - Free-text filtering and sorting of spooled file lists
//! - Search result parsing and local text search
//!
//! ## Architecture
//!
//! This is Layer 2 in the architecture - it depends on splf-core and
//! splf-printer (search runs over rendered text).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod filter;
pub mod naming;
pub mod search;

// Re-export commonly used types
pub use filter::{filter_spooled_files, sort_spooled_files};
pub use naming::{break_up_path, build_file_path, build_path, NameParts};
pub use search::{
    parse_search_output, sanitize_search_term, search_spooled_file, search_text, SearchLine,
    SearchResult,
};
