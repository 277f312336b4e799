//! Carriage-control directives carried in the prefix of each print record.
//!
//! Every record starts with a 4 column control prefix:
//!
//! ```text
//! columns 0-2  skip-to-line   blank, or 1-based line within the page
//! column  3    space-to-line  blank, '0' (print on the same line) or N (N-1 blank lines)
//! ```
//!
//! The remainder of the record is print data.

/// Width of the control prefix in characters.
pub const PREFIX_WIDTH: usize = 4;

/// Width of the skip-to-line field.
const SKIP_FIELD_WIDTH: usize = 3;

/// Positioning instruction for one print record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// Print on the next line
    NoOp,
    /// Move to the given zero-based line of the page before printing
    SkipToLine(usize),
    /// Emit this many blank lines before printing
    SpaceTo(usize),
    /// Print onto the previously emitted line without advancing
    OverlayPrevious,
}

impl Directive {
    /// Parse a 4 column control prefix.
    ///
    /// Malformed fields are treated as absent. Skip-to-line wins over
    /// space-to-line when both are present.
    pub fn parse(prefix: &str) -> Self {
        let skip_field: String = prefix.chars().take(SKIP_FIELD_WIDTH).collect();
        if let Some(target) = parse_skip_field(&skip_field) {
            return Directive::SkipToLine(target);
        }

        match prefix.chars().nth(SKIP_FIELD_WIDTH) {
            Some('0') => Directive::OverlayPrevious,
            Some(c) => match c.to_digit(10) {
                Some(lines) => Directive::SpaceTo(lines as usize - 1),
                None => Directive::NoOp,
            },
            None => Directive::NoOp,
        }
    }
}

/// Parse the skip-to-line columns into a zero-based target line.
///
/// Blank, non-numeric and zero values mean "no skip".
fn parse_skip_field(field: &str) -> Option<usize> {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<usize>().ok()?.checked_sub(1)
}

/// One physical record of a raw print stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPrintRecord<'a> {
    /// Positioning instruction from the control prefix
    pub directive: Directive,
    /// Print data following the control prefix
    pub content: &'a str,
}

impl<'a> RawPrintRecord<'a> {
    /// Split a record into its directive and print data.
    ///
    /// Records shorter than the control prefix carry no directive; the whole
    /// record is print data.
    pub fn parse(record: &'a str) -> Self {
        match record.char_indices().nth(PREFIX_WIDTH) {
            Some((offset, _)) => Self {
                directive: Directive::parse(&record[..offset]),
                content: &record[offset..],
            },
            None if record.chars().count() == PREFIX_WIDTH => Self {
                directive: Directive::parse(record),
                content: "",
            },
            None => Self {
                directive: Directive::NoOp,
                content: record,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_prefix_is_noop() {
        assert_eq!(Directive::parse("    "), Directive::NoOp);
    }

    #[test]
    fn test_skip_to_line() {
        assert_eq!(Directive::parse("  1 "), Directive::SkipToLine(0));
        assert_eq!(Directive::parse(" 12 "), Directive::SkipToLine(11));
        assert_eq!(Directive::parse("066 "), Directive::SkipToLine(65));
    }

    #[test]
    fn test_skip_wins_over_space() {
        assert_eq!(Directive::parse("  52"), Directive::SkipToLine(4));
        assert_eq!(Directive::parse("  50"), Directive::SkipToLine(4));
    }

    #[test]
    fn test_space_to() {
        assert_eq!(Directive::parse("   1"), Directive::SpaceTo(0));
        assert_eq!(Directive::parse("   2"), Directive::SpaceTo(1));
        assert_eq!(Directive::parse("   3"), Directive::SpaceTo(2));
    }

    #[test]
    fn test_overlay_marker() {
        assert_eq!(Directive::parse("   0"), Directive::OverlayPrevious);
    }

    #[test]
    fn test_malformed_skip_falls_back_to_space() {
        assert_eq!(Directive::parse("ABC2"), Directive::SpaceTo(1));
        assert_eq!(Directive::parse("-1 0"), Directive::OverlayPrevious);
        assert_eq!(Directive::parse("000 "), Directive::NoOp);
    }

    #[test]
    fn test_malformed_space_is_noop() {
        assert_eq!(Directive::parse("   X"), Directive::NoOp);
        assert_eq!(Directive::parse("   +"), Directive::NoOp);
    }

    #[test]
    fn test_record_parse() {
        let record = RawPrintRecord::parse("   1HELLO");
        assert_eq!(record.directive, Directive::SpaceTo(0));
        assert_eq!(record.content, "HELLO");

        let record = RawPrintRecord::parse("  3 TOTAL");
        assert_eq!(record.directive, Directive::SkipToLine(2));
        assert_eq!(record.content, "TOTAL");
    }

    #[test]
    fn test_record_prefix_only() {
        let record = RawPrintRecord::parse("   2");
        assert_eq!(record.directive, Directive::SpaceTo(1));
        assert_eq!(record.content, "");
    }

    #[test]
    fn test_short_record_is_all_content() {
        let record = RawPrintRecord::parse("AB");
        assert_eq!(record.directive, Directive::NoOp);
        assert_eq!(record.content, "AB");

        let record = RawPrintRecord::parse("");
        assert_eq!(record.directive, Directive::NoOp);
        assert_eq!(record.content, "");
    }

    #[test]
    fn test_record_multibyte_content() {
        let record = RawPrintRecord::parse("    Zürich ÄÖÜ");
        assert_eq!(record.directive, Directive::NoOp);
        assert_eq!(record.content, "Zürich ÄÖÜ");
    }
}
