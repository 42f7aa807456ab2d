//! # Inline Kinds
//!
//! Inline span types that own their syntax, so the tokenizer never hardcodes
//! a marker string.
//!
//! ## Types
//!
//! - **`Image`**: `![alt](url)` spans, extracted first
//! - **`Link`**: `[text](url)` spans not preceded by `!`
//! - **`Delimiter`**: paired markers (`**`, `_`, `` ` ``) and the fragment kind
//!   each one produces, in splitting order

pub mod delimiter;
pub mod image;
pub mod link;

pub use delimiter::{DELIMITERS, Delimiter};
pub use image::Image;
pub use link::Link;

/// A `[text](target)` shaped span located in some source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanMatch<'a> {
    /// The full matched source, e.g. `![alt](url)`.
    pub literal: &'a str,
    /// Text between the brackets.
    pub text: &'a str,
    /// Destination between the parentheses.
    pub target: &'a str,
}

impl<'a> SpanMatch<'a> {
    fn from_captures(caps: &regex::Captures<'a>) -> Option<Self> {
        Some(Self {
            literal: caps.get(0)?.as_str(),
            text: caps.get(1)?.as_str(),
            target: caps.get(2)?.as_str(),
        })
    }
}
