//! Spooled file text search.
//!
//! Remote searches come back as `path:line:content` records; local searches
//! run over downloaded text after it has been rendered.

use serde::{Deserialize, Serialize};
use tracing::debug;

use splf_core::OpenOptions;
use splf_printer::{render_content, split_records};

/// One matching line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchLine {
    /// 1-based line number
    pub number: usize,
    /// Line text
    pub content: String,
}

/// All matches within one spooled file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Spooled file path
    pub path: String,
    /// Matching lines in order
    pub lines: Vec<SearchLine>,
    /// Whether the file should be opened read-only
    pub readonly: bool,
}

impl SearchResult {
    fn new(path: &str, readonly: bool) -> Self {
        Self {
            path: path.to_string(),
            lines: Vec::new(),
            readonly,
        }
    }
}

/// Escape backslashes and double quotes in a search term.
pub fn sanitize_search_term(term: &str) -> String {
    term.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Parse `path:line:content` search output into results grouped by path.
///
/// Groups keep the order in which their path first appears. Lines starting
/// with `Binary`, blank lines and lines without a numeric line field are
/// skipped. The content is everything after the second `:`.
pub fn parse_search_output(output: &str, readonly: bool) -> Vec<SearchResult> {
    let mut results: Vec<SearchResult> = Vec::new();

    for line in output.lines() {
        if line.trim().is_empty() || line.starts_with("Binary") {
            continue;
        }

        let mut fields = line.splitn(3, ':');
        let (Some(path), Some(number), Some(content)) = (fields.next(), fields.next(), fields.next())
        else {
            debug!("Skipping malformed search output line: {}", line);
            continue;
        };
        let Ok(number) = number.trim().parse::<usize>() else {
            debug!("Skipping search output line without line number: {}", line);
            continue;
        };

        let index = match results.iter().position(|r| r.path == path) {
            Some(index) => index,
            None => {
                results.push(SearchResult::new(path, readonly));
                results.len() - 1
            }
        };
        results[index].lines.push(SearchLine {
            number,
            content: content.to_string(),
        });
    }

    results
}

/// Search text for a term, ignoring case.
///
/// Lines end at `\r\n`, `\r` or `\n`, as print records do.
/// Returns `None` when no line matches.
pub fn search_text(path: &str, text: &str, term: &str, readonly: bool) -> Option<SearchResult> {
    let needle = term.to_uppercase();
    let lines: Vec<SearchLine> = split_records(text)
        .into_iter()
        .enumerate()
        .filter(|(_, line)| line.to_uppercase().contains(&needle))
        .map(|(i, line)| SearchLine {
            number: i + 1,
            content: line.to_string(),
        })
        .collect();

    if lines.is_empty() {
        None
    } else {
        Some(SearchResult {
            path: path.to_string(),
            lines,
            readonly,
        })
    }
}

/// Render a downloaded spooled file with the open options, then search it.
///
/// Line numbers refer to the rendered text.
pub fn search_spooled_file(
    path: &str,
    raw_text: &str,
    term: &str,
    options: &OpenOptions,
) -> Option<SearchResult> {
    let text = render_content(raw_text, options);
    let result = search_text(path, &text, term, options.readonly);
    debug!(
        "Searched {} for '{}': {} matching lines",
        path,
        term,
        result.as_ref().map_or(0, |r| r.lines.len())
    );
    result
}
