use std::fmt;

use super::{Attributes, tags};

/// A node was asked to take a shape that violates its invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NodeError {
    #[error("leaf node <{}> must have a value", .tag.as_deref().unwrap_or("text"))]
    EmptyValue { tag: Option<String> },
    #[error("node tag must not be empty")]
    MissingTag,
    #[error("parent node <{tag}> must have at least one child")]
    NoChildren { tag: String },
}

/// A node in the output tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf(LeafNode),
    Parent(ParentNode),
}

/// Literal content with an optional tag and no children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafNode {
    tag: Option<String>,
    value: String,
    attributes: Attributes,
}

/// A tag wrapping an ordered, non-empty list of owned children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentNode {
    tag: String,
    children: Vec<HtmlNode>,
    attributes: Attributes,
}

impl LeafNode {
    /// Creates a leaf. A `None` tag renders the value as raw text.
    ///
    /// Fails when the value is empty or the tag is present but empty.
    pub fn new(
        tag: Option<&str>,
        value: impl Into<String>,
        attributes: Attributes,
    ) -> Result<Self, NodeError> {
        let value = value.into();
        if tag.is_some_and(str::is_empty) {
            return Err(NodeError::MissingTag);
        }
        if value.is_empty() {
            return Err(NodeError::EmptyValue {
                tag: tag.map(str::to_string),
            });
        }
        Ok(Self {
            tag: tag.map(str::to_string),
            value,
            attributes,
        })
    }

    /// An untagged leaf rendered as raw text.
    pub fn text(value: impl Into<String>) -> Result<Self, NodeError> {
        Self::new(None, value, Attributes::new())
    }

    /// An `<img>` leaf. Its value is always empty; the visible text is `alt`.
    pub fn image(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            tag: Some(tags::IMG.to_string()),
            value: String::new(),
            attributes: Attributes::new()
                .with(tags::SRC, src)
                .with(tags::ALT, alt),
        }
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

impl ParentNode {
    /// Creates a parent node. Fails on an empty tag or an empty child list.
    pub fn new(
        tag: &str,
        children: Vec<HtmlNode>,
        attributes: Attributes,
    ) -> Result<Self, NodeError> {
        if tag.is_empty() {
            return Err(NodeError::MissingTag);
        }
        if children.is_empty() {
            return Err(NodeError::NoChildren {
                tag: tag.to_string(),
            });
        }
        Ok(Self {
            tag: tag.to_string(),
            children,
            attributes,
        })
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn children(&self) -> &[HtmlNode] {
        &self.children
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

impl HtmlNode {
    /// Shorthand for a parent node with no attributes.
    pub fn parent(tag: &str, children: Vec<HtmlNode>) -> Result<Self, NodeError> {
        ParentNode::new(tag, children, Attributes::new()).map(Self::Parent)
    }

    /// Shorthand for a tagged leaf with no attributes.
    pub fn leaf(tag: &str, value: impl Into<String>) -> Result<Self, NodeError> {
        LeafNode::new(Some(tag), value, Attributes::new()).map(Self::Leaf)
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.tag(),
            HtmlNode::Parent(parent) => Some(parent.tag()),
        }
    }

    /// Children of a parent; always empty for a leaf.
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Leaf(_) => &[],
            HtmlNode::Parent(parent) => parent.children(),
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            HtmlNode::Leaf(leaf) => leaf.attributes(),
            HtmlNode::Parent(parent) => parent.attributes(),
        }
    }

    /// Serializes the subtree to HTML text.
    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

impl From<LeafNode> for HtmlNode {
    fn from(leaf: LeafNode) -> Self {
        HtmlNode::Leaf(leaf)
    }
}

impl From<ParentNode> for HtmlNode {
    fn from(parent: ParentNode) -> Self {
        HtmlNode::Parent(parent)
    }
}

impl fmt::Display for LeafNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.tag {
            None => f.write_str(&self.value),
            Some(tag) => write!(f, "<{tag}{}>{}</{tag}>", self.attributes, self.value),
        }
    }
}

impl fmt::Display for ParentNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}{}>", self.tag, self.attributes)?;
        for child in &self.children {
            write!(f, "{child}")?;
        }
        write!(f, "</{}>", self.tag)
    }
}

impl fmt::Display for HtmlNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HtmlNode::Leaf(leaf) => fmt::Display::fmt(leaf, f),
            HtmlNode::Parent(parent) => fmt::Display::fmt(parent, f),
        }
    }
}
