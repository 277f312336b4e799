//! Record splitting and output line joining.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref RECORD_BREAK: Regex = Regex::new(r"\r\n|\r|\n").unwrap();
}

/// Separator placed between output lines.
pub const LINE_SEPARATOR: &str = "\r\n";

/// Split a raw print stream into records.
///
/// `\r\n`, `\r` and `\n` all end a record. A trailing separator yields a
/// final empty record.
pub fn split_records(text: &str) -> Vec<&str> {
    RECORD_BREAK.split(text).collect()
}

/// Join output lines with [`LINE_SEPARATOR`].
pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let mut text = String::new();
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            text.push_str(LINE_SEPARATOR);
        }
        text.push_str(line.as_ref());
    }
    text
}
