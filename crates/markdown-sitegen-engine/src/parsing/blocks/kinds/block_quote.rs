/// Blockquote block (`>` prefix on each line).
pub struct BlockQuote;

impl BlockQuote {
    pub const PREFIX: char = '>';

    /// Strips one `>` prefix and surrounding whitespace from a line.
    ///
    /// Lazy continuation lines without a prefix are returned trimmed.
    pub fn strip_prefix(line: &str) -> &str {
        let line = line.trim_start();
        line.strip_prefix(Self::PREFIX).unwrap_or(line).trim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_quote_prefix() {
        assert_eq!(BlockQuote::strip_prefix("> hello"), "hello");
        assert_eq!(BlockQuote::strip_prefix(">hello"), "hello");
    }

    #[test]
    fn lazy_continuation_is_kept() {
        assert_eq!(BlockQuote::strip_prefix("continued "), "continued");
    }

    #[test]
    fn only_one_prefix_is_removed() {
        assert_eq!(BlockQuote::strip_prefix(">> nested"), "> nested");
    }
}
