//! Carriage-control interpreter.
//!
//! Replays the positioning directives of a raw print stream into plain text
//! lines: blank lines for line spacing and skips, padding at page turns, and
//! overstrike records merged onto the line they were printed over.

use serde::Serialize;
use splf_core::resolve_page_length;

use crate::directive::{Directive, RawPrintRecord};
use crate::lines::{join_lines, split_records};
use crate::overlay::overlay;

/// Blank lines emitted at a page turn when the page was not full.
const PAGE_BOTTOM_PADDING: usize = 3;

/// Cursor and output of one reformat pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpreterState {
    /// Lines printed on the current page
    pub line_count: usize,
    /// Page turns seen so far
    pub page_count: usize,
    /// Lines per page
    pub page_length: usize,
    /// Output lines
    pub lines: Vec<String>,
    /// Overstrike records merged onto a previous line
    pub overlays: usize,
}

impl InterpreterState {
    /// Create an empty state for the given page length.
    pub fn new(page_length: usize) -> Self {
        Self {
            line_count: 0,
            page_count: 0,
            page_length,
            lines: Vec::new(),
            overlays: 0,
        }
    }

    /// Emit `count` blank lines without moving the page cursor.
    fn push_blank_lines(&mut self, count: usize) {
        self.lines
            .extend(std::iter::repeat_with(String::new).take(count));
    }

    /// Emit `count` blank lines, advancing the page cursor for each.
    fn advance_blank_lines(&mut self, count: usize) {
        self.push_blank_lines(count);
        self.line_count += count;
    }
}

/// Summary of a finished reformat pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReformatReport {
    /// Reformatted text, lines separated by `\r\n`
    #[serde(skip)]
    pub text: String,
    /// Raw records consumed
    pub records: usize,
    /// Output lines produced
    pub lines: usize,
    /// Page turns
    pub page_turns: usize,
    /// Overstrike records merged
    pub overlays: usize,
}

/// Carriage-control interpreter over a single print stream.
#[derive(Debug)]
pub struct Interpreter {
    state: InterpreterState,
    records: usize,
}

impl Interpreter {
    /// Create an interpreter for pages of `page_length` lines.
    pub fn new(page_length: usize) -> Self {
        Self {
            state: InterpreterState::new(page_length),
            records: 0,
        }
    }

    /// Get a reference to the interpreter state.
    pub fn state(&self) -> &InterpreterState {
        &self.state
    }

    /// Position and print one record.
    pub fn process_record(&mut self, record: &RawPrintRecord<'_>) {
        self.records += 1;
        let state = &mut self.state;

        match record.directive {
            Directive::SkipToLine(target) if target < state.line_count => {
                // Skipping backwards means the next page has started.
                if state.page_length > state.line_count {
                    state.push_blank_lines(PAGE_BOTTOM_PADDING);
                }
                state.push_blank_lines(target);
                state.line_count = 0;
                state.page_count += 1;
            }
            Directive::SkipToLine(target) => {
                let gap = target - state.line_count;
                state.advance_blank_lines(gap);
            }
            Directive::OverlayPrevious if state.line_count > 0 => {
                if let Some(previous) = state.lines.last_mut() {
                    *previous = overlay(previous, record.content);
                    state.overlays += 1;
                    return;
                }
            }
            Directive::SpaceTo(blank_lines) => state.advance_blank_lines(blank_lines),
            Directive::OverlayPrevious | Directive::NoOp => {}
        }

        state.lines.push(record.content.to_string());
        state.line_count += 1;
    }

    /// Process every record of a raw print stream.
    pub fn process(&mut self, raw_text: &str) {
        for record in split_records(raw_text) {
            self.process_record(&RawPrintRecord::parse(record));
        }
    }

    /// Consume the interpreter and return the reformatted text with counters.
    pub fn finish(self) -> ReformatReport {
        let state = self.state;
        ReformatReport {
            text: join_lines(&state.lines),
            records: self.records,
            lines: state.lines.len(),
            page_turns: state.page_count,
            overlays: state.overlays,
        }
    }
}

/// Reformat a raw print stream and report what was done.
///
/// `page_length` of `None` or `Some(0)` uses the default of 68 lines.
pub fn reformat_with_report(raw_text: &str, page_length: Option<usize>) -> ReformatReport {
    let mut interpreter = Interpreter::new(resolve_page_length(page_length));
    interpreter.process(raw_text);
    interpreter.finish()
}

/// Reformat a raw print stream into human-readable text.
///
/// Lines of the result are always separated by `\r\n`.
pub fn reformat(raw_text: &str, page_length: Option<usize>) -> String {
    reformat_with_report(raw_text, page_length).text
}
