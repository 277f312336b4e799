//! Open pipeline: turn extracted spooled file text into what the user sees.

use tracing::debug;

use splf_core::{Error, OpenMode, OpenOptions, Result};

use crate::interpreter::reformat_with_report;

/// Render extracted print-stream text according to the open options.
///
/// [`OpenMode::WithSpaces`] replays carriage control; otherwise the text is
/// returned unchanged.
pub fn render_content(raw_text: &str, options: &OpenOptions) -> String {
    match options.open_mode {
        OpenMode::WithSpaces => {
            let page_length = options.page_length();
            debug!(
                "Adding line spacing to spooled file: {} bytes, page length {}",
                raw_text.len(),
                page_length
            );
            let report = reformat_with_report(raw_text, Some(page_length));
            debug!(
                "Reformatted {} records into {} lines ({} page turns, {} overlays)",
                report.records, report.lines, report.page_turns, report.overlays
            );
            report.text
        }
        OpenMode::WithoutSpaces => raw_text.to_string(),
    }
}

/// Decode the raw bytes of an extracted spooled file as text.
///
/// Returns [`Error::InvalidInput`] when the bytes are not UTF-8.
pub fn decode_text(raw: &[u8]) -> Result<&str> {
    std::str::from_utf8(raw).map_err(|e| {
        Error::InvalidInput(format!("spooled file data is not UTF-8 text: {e}"))
    })
}

/// Render raw bytes of an extracted spooled file.
///
/// Returns [`Error::InvalidInput`] when the bytes are not UTF-8 text; nothing
/// is rendered in that case.
pub fn render_bytes(raw: &[u8], options: &OpenOptions) -> Result<String> {
    Ok(render_content(decode_text(raw)?, options))
}
