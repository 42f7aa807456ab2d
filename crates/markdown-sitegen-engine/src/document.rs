//! # Document Assembly
//!
//! Drives block parsing and inline tokenizing to build one [`HtmlNode`] tree
//! per document:
//!
//! ```text
//! <div>
//!   <p>..</p> | <hN>..</hN> | <pre><code>..</code></pre>
//!   | <blockquote>..</blockquote> | <ul><li>..</li></ul> | <ol><li>..</li></ol>
//! </div>
//! ```
//!
//! Paragraph, heading and quote text has its line breaks collapsed to single
//! spaces before tokenizing. List items are tokenized line by line and code
//! blocks are never tokenized.
//!
//! Any construction or inline error aborts the whole conversion; no partial
//! tree is returned.

use crate::{
    html::{HtmlNode, NodeError, tags},
    parsing::{
        Block, BlockType, InlineError, TextFragment,
        blocks::kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
        parse_blocks, to_blocks, tokenize,
    },
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("invalid node: {0}")]
    Node(#[from] NodeError),
    #[error("malformed inline markup: {0}")]
    Inline(#[from] InlineError),
}

/// Converts a markdown document into a `<div>` rooted node tree.
///
/// A document without any blocks fails, since the root must have children.
pub fn markdown_to_html_node(document: &str) -> Result<HtmlNode, ConvertError> {
    let children = parse_blocks(document)
        .into_iter()
        .map(block_to_node)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HtmlNode::parent(tags::DIV, children)?)
}

/// Converts a markdown document straight to HTML text.
pub fn markdown_to_html(document: &str) -> Result<String, ConvertError> {
    markdown_to_html_node(document).map(|node| node.to_html())
}

/// Returns the text of the first block whose first line starts with `#`.
///
/// Any heading level counts, not just `#`.
pub fn extract_title(document: &str) -> Option<&str> {
    to_blocks(document)
        .into_iter()
        .filter_map(|block| block.lines().next())
        .find(|line| line.starts_with(Heading::MARKER))
        .map(Heading::text)
}

fn block_to_node(block: Block<'_>) -> Result<HtmlNode, ConvertError> {
    match block.kind {
        BlockType::Paragraph => paragraph_to_node(block.text),
        BlockType::Heading => heading_to_node(block.text),
        BlockType::Code => code_to_node(block.text),
        BlockType::Quote => quote_to_node(block.text),
        BlockType::UnorderedList => list_to_node(block.text, tags::UL, UnorderedList::item_text),
        BlockType::OrderedList => list_to_node(block.text, tags::OL, OrderedList::item_text),
    }
}

fn paragraph_to_node(text: &str) -> Result<HtmlNode, ConvertError> {
    let text = collapse_lines(text.lines());
    Ok(HtmlNode::parent(tags::P, text_to_children(&text)?)?)
}

fn heading_to_node(text: &str) -> Result<HtmlNode, ConvertError> {
    let level = Heading::level(text);
    let text = collapse_lines(text.lines());
    let children = text_to_children(Heading::text(&text))?;
    Ok(HtmlNode::parent(tags::heading(level), children)?)
}

fn code_to_node(text: &str) -> Result<HtmlNode, ConvertError> {
    let code = TextFragment::code(CodeFence::content(text)).into_node()?;
    Ok(HtmlNode::parent(tags::PRE, vec![code])?)
}

fn quote_to_node(text: &str) -> Result<HtmlNode, ConvertError> {
    let text = collapse_lines(text.lines().map(BlockQuote::strip_prefix));
    Ok(HtmlNode::parent(tags::BLOCKQUOTE, text_to_children(&text)?)?)
}

fn list_to_node(
    text: &str,
    tag: &str,
    item_text: fn(&str) -> &str,
) -> Result<HtmlNode, ConvertError> {
    let items = text
        .lines()
        .map(item_text)
        .filter(|item| !item.is_empty())
        .map(|item| -> Result<HtmlNode, ConvertError> {
            Ok(HtmlNode::parent(tags::LI, text_to_children(item)?)?)
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HtmlNode::parent(tag, items)?)
}

fn text_to_children(text: &str) -> Result<Vec<HtmlNode>, ConvertError> {
    tokenize(text)?
        .into_iter()
        .map(|fragment| fragment.into_node().map_err(ConvertError::from))
        .collect()
}

/// Joins trimmed, non-empty lines with single spaces.
fn collapse_lines<'a>(lines: impl Iterator<Item = &'a str>) -> String {
    lines
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
