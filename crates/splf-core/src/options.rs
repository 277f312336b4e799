//! Options controlling how a downloaded spooled file is opened.

use serde::{Deserialize, Serialize};

/// Lines per page assumed when the catalog does not report one.
pub const DEFAULT_PAGE_LENGTH: usize = 68;

/// Resolve the page length of a spooled file.
///
/// A missing or zero page length falls back to [`DEFAULT_PAGE_LENGTH`].
pub fn resolve_page_length(page_length: Option<usize>) -> usize {
    match page_length {
        Some(len) if len > 0 => len,
        _ => DEFAULT_PAGE_LENGTH,
    }
}

/// How print data is turned into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OpenMode {
    /// Replay carriage control into line and page spacing
    WithSpaces,
    /// Keep the extracted text as-is
    #[default]
    WithoutSpaces,
}

/// Options for opening a spooled file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OpenOptions {
    /// Open without write access
    pub readonly: bool,
    /// Text rendering mode
    pub open_mode: OpenMode,
    /// Lines per page (None = catalog value unavailable)
    pub page_length: Option<usize>,
    /// Local file extension
    pub file_extension: String,
    /// Name pattern used to build the local file name
    pub name_pattern: Option<String>,
}

impl Default for OpenOptions {
    fn default() -> Self {
        Self {
            readonly: false,
            open_mode: OpenMode::default(),
            page_length: None,
            file_extension: "splf".to_string(),
            name_pattern: None,
        }
    }
}

impl OpenOptions {
    /// Options that replay carriage control with the given page length.
    pub fn with_spaces(page_length: Option<usize>) -> Self {
        Self {
            open_mode: OpenMode::WithSpaces,
            page_length,
            ..Self::default()
        }
    }

    /// Effective page length for these options.
    pub fn page_length(&self) -> usize {
        resolve_page_length(self.page_length)
    }
}
