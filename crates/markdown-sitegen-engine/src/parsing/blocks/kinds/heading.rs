/// ATX heading (`#` through `######`).
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 6;

    /// Number of leading markers, clamped to `1..=MAX_LEVEL`.
    pub fn level(line: &str) -> usize {
        let markers = line.chars().take_while(|&c| c == Self::MARKER).count();
        markers.clamp(1, Self::MAX_LEVEL)
    }

    /// Heading text with the leading markers and surrounding whitespace removed.
    pub fn text(line: &str) -> &str {
        line.trim_start_matches(Self::MARKER).trim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Title", 1)]
    #[case("## Section", 2)]
    #[case("###### Deep", 6)]
    #[case("######## Too deep", 6)]
    #[case("#NoSpace", 1)]
    fn heading_level(#[case] line: &str, #[case] expected: usize) {
        assert_eq!(Heading::level(line), expected);
    }

    #[test]
    fn heading_text_strips_markers_and_whitespace() {
        assert_eq!(Heading::text("###   Spaced out  "), "Spaced out");
        assert_eq!(Heading::text("#"), "");
    }
}
