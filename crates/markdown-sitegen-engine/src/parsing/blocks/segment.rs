/// Splits a document into blocks on blank-line boundaries.
///
/// A block is a maximal run of non-empty lines. Only a line with nothing
/// before its line ending separates blocks; a line of spaces stays inside
/// the block it sits in. Each block is trimmed and borrowed from `document`;
/// internal line breaks are kept as written.
pub fn to_blocks(document: &str) -> Vec<&str> {
    let mut blocks = Vec::new();
    let mut start: Option<usize> = None;
    let mut offset = 0usize;

    for line in document.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();

        if line.trim_end_matches(['\r', '\n']).is_empty() {
            if let Some(s) = start.take() {
                push_trimmed(&mut blocks, &document[s..line_start]);
            }
        } else if start.is_none() {
            start = Some(line_start);
        }
    }

    if let Some(s) = start {
        push_trimmed(&mut blocks, &document[s..]);
    }
    blocks
}

fn push_trimmed<'a>(blocks: &mut Vec<&'a str>, raw: &'a str) {
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
        blocks.push(trimmed);
    }
}
