use std::sync::OnceLock;

use regex::Regex;

use super::SpanMatch;

/// Inline image span: `![alt](url)`.
///
/// Alt text excludes `[` and `]`; the url excludes `(` and `)`.
pub struct Image;

impl Image {
    pub const MARKER: char = '!';

    fn pattern() -> &'static Regex {
        static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
        IMAGE_REGEX.get_or_init(|| {
            Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("Invalid image regex")
        })
    }

    /// All image spans in `text`, in source order.
    pub fn find_all(text: &str) -> Vec<SpanMatch<'_>> {
        Self::pattern()
            .captures_iter(text)
            .filter_map(|caps| SpanMatch::from_captures(&caps))
            .collect()
    }
}
