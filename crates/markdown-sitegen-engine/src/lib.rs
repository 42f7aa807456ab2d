//! # markdown-sitegen-engine
//!
//! Converts a markdown document into a tree of HTML nodes and renders it.
//!
//! ```text
//! document ─▶ blocks::to_blocks ─▶ blocks::classify ─┐
//!                                                    ├─▶ document ─▶ HtmlNode ─▶ HTML
//!             inline::tokenize ─▶ TextFragment ──────┘
//! ```
//!
//! The conversion is pure: no IO, no shared state. [`io`] and [`page`] are the
//! thin layers the site generator uses around it.

pub mod document;
pub mod html;
pub mod io;
pub mod page;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use document::{ConvertError, extract_title, markdown_to_html, markdown_to_html_node};
pub use html::{Attributes, HtmlNode, LeafNode, NodeError, ParentNode};
pub use page::{PageError, render_page};
pub use parsing::{BlockType, FragmentKind, InlineError, TextFragment};
