pub mod blocks;
pub mod inline;

pub use blocks::{Block, BlockType, classify, parse_blocks, to_blocks};
pub use inline::{FragmentKind, InlineError, TextFragment, tokenize};
