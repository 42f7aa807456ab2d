//! Tag and attribute names emitted by the document assembler.

pub const DIV: &str = "div";
pub const P: &str = "p";
pub const BLOCKQUOTE: &str = "blockquote";
pub const PRE: &str = "pre";
pub const CODE: &str = "code";
pub const UL: &str = "ul";
pub const OL: &str = "ol";
pub const LI: &str = "li";
pub const B: &str = "b";
pub const I: &str = "i";
pub const A: &str = "a";
pub const IMG: &str = "img";

pub const HEADINGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

pub const HREF: &str = "href";
pub const SRC: &str = "src";
pub const ALT: &str = "alt";

/// Heading tag for `level`, clamped to `h1..=h6`.
pub fn heading(level: usize) -> &'static str {
    HEADINGS[level.clamp(1, HEADINGS.len()) - 1]
}
