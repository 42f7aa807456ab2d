use super::{
    kinds::{DELIMITERS, Delimiter, Image, Link, SpanMatch},
    types::{FragmentKind, TextFragment},
};

/// Inline markup that cannot be tokenized consistently.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InlineError {
    #[error("unterminated `{delimiter}` delimiter in {text:?}")]
    UnbalancedDelimiter {
        delimiter: &'static str,
        text: String,
    },
    #[error("could not locate {kind} {span:?} in the remaining text")]
    UnlocatedSpan { kind: &'static str, span: String },
}

/// Tokenizes one flat string into typed fragments.
///
/// The passes run in a fixed order: images, then links, then the paired
/// delimiters of [`DELIMITERS`]. Each pass only splits fragments that are
/// still plain, so a link's text is never re-split as emphasis.
pub fn tokenize(text: &str) -> Result<Vec<TextFragment>, InlineError> {
    let mut fragments = vec![TextFragment::plain(text)];
    fragments = split_images(fragments)?;
    fragments = split_links(fragments)?;
    for delimiter in &DELIMITERS {
        fragments = split_delimiter(fragments, delimiter)?;
    }
    Ok(fragments)
}

/// Splits `![alt](url)` spans out of plain fragments.
pub fn split_images(fragments: Vec<TextFragment>) -> Result<Vec<TextFragment>, InlineError> {
    split_spans(fragments, Image::find_all, |m| {
        TextFragment::image(m.text, m.target)
    })
}

/// Splits `[text](url)` spans out of plain fragments.
pub fn split_links(fragments: Vec<TextFragment>) -> Result<Vec<TextFragment>, InlineError> {
    split_spans(fragments, Link::find_all, |m| {
        TextFragment::link(m.text, m.target)
    })
}

/// Splits plain fragments on `delimiter`.
///
/// Pieces alternate plain and delimited, so an even piece count means a
/// marker was left open. Empty pieces are dropped.
pub fn split_delimiter(
    fragments: Vec<TextFragment>,
    delimiter: &Delimiter,
) -> Result<Vec<TextFragment>, InlineError> {
    let mut out = Vec::with_capacity(fragments.len());
    for fragment in fragments {
        if !fragment.is_plain() {
            out.push(fragment);
            continue;
        }

        let pieces: Vec<&str> = fragment.content.split(delimiter.marker).collect();
        if pieces.len() % 2 == 0 {
            return Err(InlineError::UnbalancedDelimiter {
                delimiter: delimiter.marker,
                text: fragment.content.clone(),
            });
        }

        for (i, piece) in pieces.into_iter().enumerate() {
            if piece.is_empty() {
                continue;
            }
            let kind = if i % 2 == 0 {
                FragmentKind::Plain
            } else {
                delimiter.kind.clone()
            };
            out.push(TextFragment::new(piece, kind));
        }
    }
    Ok(out)
}

/// Shared image/link pass.
///
/// For each match found in a fragment's original text, the unprocessed
/// remainder is split on the exact matched literal. Text before the literal
/// becomes a plain fragment and the span itself becomes `build(match)`.
fn split_spans(
    fragments: Vec<TextFragment>,
    find: fn(&str) -> Vec<SpanMatch<'_>>,
    build: fn(&SpanMatch<'_>) -> TextFragment,
) -> Result<Vec<TextFragment>, InlineError> {
    let mut out = Vec::with_capacity(fragments.len());
    for fragment in fragments {
        if !fragment.is_plain() {
            out.push(fragment);
            continue;
        }

        let matches = find(&fragment.content);
        if matches.is_empty() {
            out.push(fragment);
            continue;
        }

        let mut rest = fragment.content.as_str();
        for m in &matches {
            let span = build(m);
            let Some((before, after)) = rest.split_once(m.literal) else {
                return Err(InlineError::UnlocatedSpan {
                    kind: span.kind.name(),
                    span: m.literal.to_string(),
                });
            };
            if !before.is_empty() {
                out.push(TextFragment::plain(before));
            }
            out.push(span);
            rest = after;
        }
        if !rest.is_empty() {
            out.push(TextFragment::plain(rest));
        }
    }
    Ok(out)
}
