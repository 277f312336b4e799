//! Spooled File Tool Library
//!
//! This library contains the command line layer: argument types and the
//! command implementations. The binary entry point is in main.rs.

pub mod cli;
pub mod commands;

// Re-export commonly used types
pub use cli::{Cli, Command, ListArgs, ReformatArgs, RenderArgs, SearchArgs, SortKey};
pub use commands::{list, output_path, output_paths, reformat, render_files, run, search, RenderedFile};
