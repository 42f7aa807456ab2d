//! Page template substitution.

use crate::document::{ConvertError, extract_title, markdown_to_html};

pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    #[error("document has no `#` heading to use as the page title")]
    MissingTitle,
    #[error(transparent)]
    Convert(#[from] ConvertError),
}

/// Renders `markdown` into `template`.
///
/// Every `{{ Title }}` is replaced with the extracted title and every
/// `{{ Content }}` with the rendered HTML. The whole page is built in memory,
/// so a failure never leaves partial output behind.
pub fn render_page(template: &str, markdown: &str) -> Result<String, PageError> {
    let content = markdown_to_html(markdown)?;
    let title = extract_title(markdown).ok_or(PageError::MissingTitle)?;
    Ok(template
        .replace(TITLE_PLACEHOLDER, title)
        .replace(CONTENT_PLACEHOLDER, &content))
}
