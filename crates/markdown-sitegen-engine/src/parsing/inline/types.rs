use crate::html::{HtmlNode, LeafNode, NodeError, tags};

/// The kind of an inline [`TextFragment`].
///
/// Links and images own their destination, so a target can only exist for
/// the kinds that render it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FragmentKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link { target: String },
    Image { target: String },
}

impl FragmentKind {
    /// Short name used in error messages and test output.
    pub fn name(&self) -> &'static str {
        match self {
            FragmentKind::Plain => "plain",
            FragmentKind::Bold => "bold",
            FragmentKind::Italic => "italic",
            FragmentKind::Code => "code",
            FragmentKind::Link { .. } => "link",
            FragmentKind::Image { .. } => "image",
        }
    }
}

/// One typed piece of inline text produced by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFragment {
    pub content: String,
    pub kind: FragmentKind,
}

impl TextFragment {
    pub fn new(content: impl Into<String>, kind: FragmentKind) -> Self {
        Self {
            content: content.into(),
            kind,
        }
    }

    pub fn plain(content: impl Into<String>) -> Self {
        Self::new(content, FragmentKind::Plain)
    }

    pub fn bold(content: impl Into<String>) -> Self {
        Self::new(content, FragmentKind::Bold)
    }

    pub fn italic(content: impl Into<String>) -> Self {
        Self::new(content, FragmentKind::Italic)
    }

    pub fn code(content: impl Into<String>) -> Self {
        Self::new(content, FragmentKind::Code)
    }

    pub fn link(content: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(
            content,
            FragmentKind::Link {
                target: target.into(),
            },
        )
    }

    pub fn image(alt: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(
            alt,
            FragmentKind::Image {
                target: target.into(),
            },
        )
    }

    pub fn is_plain(&self) -> bool {
        self.kind == FragmentKind::Plain
    }

    /// Destination URL for links and images.
    pub fn target(&self) -> Option<&str> {
        match &self.kind {
            FragmentKind::Link { target } | FragmentKind::Image { target } => Some(target),
            _ => None,
        }
    }

    /// Converts the fragment into its leaf node.
    ///
    /// | kind   | tag    | value   | attributes       |
    /// |--------|--------|---------|------------------|
    /// | Plain  | none   | content |                  |
    /// | Bold   | `b`    | content |                  |
    /// | Italic | `i`    | content |                  |
    /// | Code   | `code` | content |                  |
    /// | Link   | `a`    | content | `href`           |
    /// | Image  | `img`  | empty   | `src`, `alt`     |
    pub fn into_node(self) -> Result<HtmlNode, NodeError> {
        let leaf = match self.kind {
            FragmentKind::Plain => LeafNode::text(self.content)?,
            FragmentKind::Bold => LeafNode::new(Some(tags::B), self.content, Default::default())?,
            FragmentKind::Italic => {
                LeafNode::new(Some(tags::I), self.content, Default::default())?
            }
            FragmentKind::Code => {
                LeafNode::new(Some(tags::CODE), self.content, Default::default())?
            }
            FragmentKind::Link { target } => LeafNode::new(
                Some(tags::A),
                self.content,
                [(tags::HREF, target)].into_iter().collect(),
            )?,
            FragmentKind::Image { target } => LeafNode::image(target, self.content),
        };
        Ok(leaf.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragments_compare_structurally() {
        assert_eq!(
            TextFragment::bold("This is a text node"),
            TextFragment::bold("This is a text node")
        );
        assert_ne!(
            TextFragment::bold("This is a text node"),
            TextFragment::plain("This is a different text node")
        );
        assert_ne!(
            TextFragment::link("x", "https://a"),
            TextFragment::link("x", "https://b")
        );
    }

    #[test]
    fn target_only_for_links_and_images() {
        assert_eq!(TextFragment::plain("x").target(), None);
        assert_eq!(TextFragment::link("x", "u").target(), Some("u"));
        assert_eq!(TextFragment::image("x", "u").target(), Some("u"));
    }

    #[test]
    fn plain_becomes_raw_text_leaf() {
        let node = TextFragment::plain("This is a text node").into_node().unwrap();
        assert_eq!(node.tag(), None);
        assert_eq!(node.to_html(), "This is a text node");
    }

    #[test]
    fn styled_fragments_become_tagged_leaves() {
        assert_eq!(
            TextFragment::bold("b").into_node().unwrap().to_html(),
            "<b>b</b>"
        );
        assert_eq!(
            TextFragment::italic("i").into_node().unwrap().to_html(),
            "<i>i</i>"
        );
        assert_eq!(
            TextFragment::code("c").into_node().unwrap().to_html(),
            "<code>c</code>"
        );
    }

    #[test]
    fn link_becomes_anchor() {
        let node = TextFragment::link("link", "https://example.com")
            .into_node()
            .unwrap();
        assert_eq!(node.to_html(), "<a href=\"https://example.com\">link</a>");
    }

    #[test]
    fn image_becomes_empty_img_leaf() {
        let node = TextFragment::image("alt text", "https://x/y.png")
            .into_node()
            .unwrap();
        assert_eq!(node.attributes().get("src"), Some("https://x/y.png"));
        assert_eq!(node.attributes().get("alt"), Some("alt text"));
        assert_eq!(
            node.to_html(),
            "<img src=\"https://x/y.png\" alt=\"alt text\"></img>"
        );
    }

    #[test]
    fn image_with_empty_alt_is_allowed() {
        let node = TextFragment::image("", "a.png").into_node().unwrap();
        assert_eq!(node.to_html(), "<img src=\"a.png\" alt=\"\"></img>");
    }

    #[test]
    fn empty_link_text_is_a_construction_error() {
        assert_eq!(
            TextFragment::link("", "https://example.com").into_node(),
            Err(NodeError::EmptyValue {
                tag: Some("a".to_string())
            })
        );
    }
}
