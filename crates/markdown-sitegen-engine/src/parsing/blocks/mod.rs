//! # Block Parsing
//!
//! Two steps, both working on borrowed slices of the document:
//!
//! 1. **Segmentation** (`segment`): split on blank lines into trimmed blocks
//! 2. **Classification** (`classify`): assign each block a [`BlockType`] from
//!    its leading characters
//!
//! ## Modules
//!
//! - **`segment`**: `to_blocks()`
//! - **`classify`**: `BlockType` and `classify()`
//! - **`kinds`**: block types with owned markers (Heading, CodeFence,
//!   BlockQuote, UnorderedList, OrderedList)

pub mod classify;
pub mod kinds;
pub mod segment;

pub use classify::{BlockType, classify};
pub use segment::to_blocks;

/// A segmented block together with its classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    pub text: &'a str,
    pub kind: BlockType,
}

/// Segments and classifies a whole document.
pub fn parse_blocks(document: &str) -> Vec<Block<'_>> {
    to_blocks(document)
        .into_iter()
        .map(|text| Block {
            text,
            kind: classify(text),
        })
        .collect()
}
