//! # splf-printer
//!
//! Print-stream reformatting engine for the spooled file toolkit.
//!
//! This crate provides:
//! - Carriage-control directive parsing for raw print records
//! - The carriage-control interpreter (line spacing, page turns, overlays)
//! - The line overlay merger used for overstrike records
//! - The open pipeline choosing between raw and reformatted text
//!
//! ## Architecture
//!
//! This is Layer 1 in the architecture - it depends on splf-core and
//! performs no I/O.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod directive;
pub mod interpreter;
pub mod lines;
pub mod overlay;
pub mod render;

// Re-export commonly used types
pub use directive::{Directive, RawPrintRecord};
pub use interpreter::{reformat, reformat_with_report, Interpreter, InterpreterState, ReformatReport};
pub use lines::{join_lines, split_records, LINE_SEPARATOR};
pub use overlay::{is_alpha_or_space, overlay};
pub use render::{decode_text, render_bytes, render_content};
