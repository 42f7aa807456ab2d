use super::kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList};

/// The structural type of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    Paragraph,
    Heading,
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

/// Classifies a trimmed block by its leading characters.
///
/// The first matching test wins, checked in this order: heading, code fence,
/// quote, unordered list, ordered list. Anything else is a paragraph.
pub fn classify(block: &str) -> BlockType {
    if block.starts_with(Heading::MARKER) {
        BlockType::Heading
    } else if block.starts_with(CodeFence::FENCE) {
        BlockType::Code
    } else if block.starts_with(BlockQuote::PREFIX) {
        BlockType::Quote
    } else if block.starts_with(UnorderedList::MARKER) {
        BlockType::UnorderedList
    } else if block.starts_with(OrderedList::FIRST_MARKER) {
        BlockType::OrderedList
    } else {
        BlockType::Paragraph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# heading", BlockType::Heading)]
    #[case("###### h6", BlockType::Heading)]
    #[case("```\ncode\n```", BlockType::Code)]
    #[case("> quote\n> more quote", BlockType::Quote)]
    #[case("- list\n- items", BlockType::UnorderedList)]
    #[case("1. list\n2. items", BlockType::OrderedList)]
    #[case("paragraph", BlockType::Paragraph)]
    fn classifies_each_type(#[case] block: &str, #[case] expected: BlockType) {
        assert_eq!(classify(block), expected);
    }

    #[rstest]
    #[case("# heading\n> not a quote")]
    #[case("#- not a list")]
    #[case("#> still a heading")]
    fn heading_takes_precedence(#[case] block: &str) {
        assert_eq!(classify(block), BlockType::Heading);
    }

    #[test]
    fn quote_takes_precedence_over_list() {
        assert_eq!(classify(">- quoted dash"), BlockType::Quote);
    }

    #[rstest]
    #[case("2. starts at two")]
    #[case("10. ten")]
    #[case("1 no dot")]
    fn only_literal_first_ordinal_is_an_ordered_list(#[case] block: &str) {
        assert_eq!(classify(block), BlockType::Paragraph);
    }

    #[test]
    fn backticks_inside_paragraph_do_not_make_code() {
        assert_eq!(classify("text with ``` later"), BlockType::Paragraph);
        assert_eq!(classify("`` two ticks"), BlockType::Paragraph);
    }
}
