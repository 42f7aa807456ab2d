//! # HTML Node Tree
//!
//! The generic output tree produced by the document assembler.
//!
//! ## Shapes
//!
//! An [`HtmlNode`] is either a [`LeafNode`] (literal content, no children) or a
//! [`ParentNode`] (a tag wrapping one or more owned children). The shape
//! invariants are checked when a node is constructed, so a malformed tree can
//! never exist and rendering is infallible:
//!
//! - A leaf carries a non-empty value (image leaves are the single exception,
//!   their visible text lives in the `alt` attribute)
//! - A parent carries a tag and at least one child
//!
//! ## Modules
//!
//! - **`node`**: `HtmlNode`, `LeafNode`, `ParentNode` and `NodeError`
//! - **`attributes`**: insertion-ordered attribute mapping
//! - **`tags`**: tag and attribute name constants
//!
//! ## Rendering
//!
//! Values are written verbatim. Markdown content is trusted, so callers supply
//! text that is already safe to embed.

pub mod attributes;
pub mod node;
pub mod tags;

pub use attributes::Attributes;
pub use node::{HtmlNode, LeafNode, NodeError, ParentNode};
