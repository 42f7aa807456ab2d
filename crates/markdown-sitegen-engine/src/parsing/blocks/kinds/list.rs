/// Unordered list: each line starts with `-`.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKER: char = '-';

    /// Item text with the bullet and surrounding whitespace removed.
    pub fn item_text(line: &str) -> &str {
        let line = line.trim();
        line.strip_prefix(Self::MARKER).unwrap_or(line).trim()
    }
}

/// Ordered list: lines start with `1.`, `2.`, ...
///
/// Classification only checks for the literal first marker `1.`.
pub struct OrderedList;

impl OrderedList {
    pub const FIRST_MARKER: &'static str = "1.";
    pub const ORDINAL_TERMINATOR: char = '.';

    /// Item text with the `<digits>.` prefix and surrounding whitespace
    /// removed. Lines without an ordinal prefix are returned trimmed.
    pub fn item_text(line: &str) -> &str {
        let line = line.trim();
        let digits = line.len() - line.trim_start_matches(|c: char| c.is_ascii_digit()).len();
        if digits == 0 {
            return line;
        }
        line[digits..]
            .strip_prefix(Self::ORDINAL_TERMINATOR)
            .map_or(line, str::trim)
    }
}
