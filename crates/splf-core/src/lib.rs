//! # splf-core
//!
//! Core types for the spooled file toolkit.
//!
//! This crate contains all fundamental types with **no internal dependencies**
//! on other splf crates. It provides:
//!
//! - Spooled file metadata (SpooledFile, SortOptions)
//! - Open options (OpenMode, OpenOptions, page length resolution)
//! - Tool configuration loaded from YAML
//! - Error types
//!
//! ## Architecture
//!
//! This is Layer 0 in the architecture - all other crates depend on this one,
//! but this crate has no dependencies on other splf crates.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod options;
pub mod spooled_file;

// Re-export commonly used types
pub use config::{
    LoggingSettings, NamingSettings, PrinterSettings, ToolConfig, DEFAULT_NAME_PATTERN,
};
pub use error::{Error, Result};
pub use options::{resolve_page_length, OpenMode, OpenOptions, DEFAULT_PAGE_LENGTH};
pub use spooled_file::{
    split_name_pattern, FilterType, SortOptions, SortOrder, SpooledFile, PATTERN_FIELDS,
};
