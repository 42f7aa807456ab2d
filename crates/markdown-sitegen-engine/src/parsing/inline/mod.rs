//! # Inline Tokenizing
//!
//! Turns the flat text of a block into an ordered list of [`TextFragment`]s.
//!
//! ## Pass Order
//!
//! 1. Images (`![alt](url)`) - image syntax is `!` followed by link syntax,
//!    so images are taken out before links are looked for
//! 2. Links (`[text](url)` not preceded by `!`)
//! 3. Paired delimiters, `**` then `_` then `` ` ``
//!
//! Each pass only looks at fragments that are still plain. Unbalanced markers
//! fail with [`InlineError`] rather than being rendered as literal text.
//!
//! ## Modules
//!
//! - **`types`**: `TextFragment`, `FragmentKind` and their leaf conversion
//! - **`kinds`**: span patterns and delimiter constants
//! - **`tokenizer`**: `tokenize()` and the individual split passes

pub mod kinds;
pub mod tokenizer;
pub mod types;

pub use tokenizer::{InlineError, tokenize};
pub use types::{FragmentKind, TextFragment};
