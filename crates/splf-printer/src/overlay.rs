//! Same-line overlay (overstrike) merging.

/// ASCII letter or space.
///
/// Characters of an already printed line matching this predicate are never
/// replaced by an overstrike.
pub fn is_alpha_or_space(c: char) -> bool {
    c.is_ascii_alphabetic() || c == ' '
}

/// Merge `new_line` onto `base_line` as a second print pass on the same line.
///
/// A column takes the overstrike character only when that character is not a
/// space and the base character is neither an ASCII letter nor a space.
/// Columns past the end of `new_line` keep the base character. The result
/// always has the same number of characters as `base_line`.
pub fn overlay(base_line: &str, new_line: &str) -> String {
    let mut overstrike = new_line.chars();
    base_line
        .chars()
        .map(|base| match overstrike.next() {
            Some(new) if new != ' ' && !is_alpha_or_space(base) => new,
            _ => base,
        })
        .collect()
}
