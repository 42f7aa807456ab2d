use std::sync::OnceLock;

use regex::Regex;

use super::{Image, SpanMatch};

/// Inline link span: `[text](url)` not preceded by `!`.
pub struct Link;

impl Link {
    fn pattern() -> &'static Regex {
        static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
        LINK_REGEX.get_or_init(|| {
            Regex::new(r"\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("Invalid link regex")
        })
    }

    /// All link spans in `text`, in source order.
    ///
    /// The `regex` crate has no lookbehind, so candidates directly after an
    /// image marker are filtered out here instead.
    pub fn find_all(text: &str) -> Vec<SpanMatch<'_>> {
        Self::pattern()
            .captures_iter(text)
            .filter(|caps| {
                caps.get(0)
                    .is_some_and(|m| !text[..m.start()].ends_with(Image::MARKER))
            })
            .filter_map(|caps| SpanMatch::from_captures(&caps))
            .collect()
    }
}
