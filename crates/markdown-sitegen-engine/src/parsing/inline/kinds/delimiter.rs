use crate::parsing::inline::FragmentKind;

/// A paired inline marker and the fragment kind it produces.
#[derive(Debug)]
pub struct Delimiter {
    pub marker: &'static str,
    pub kind: FragmentKind,
}

impl Delimiter {
    pub const BOLD: Delimiter = Delimiter {
        marker: "**",
        kind: FragmentKind::Bold,
    };
    pub const ITALIC: Delimiter = Delimiter {
        marker: "_",
        kind: FragmentKind::Italic,
    };
    pub const CODE: Delimiter = Delimiter {
        marker: "`",
        kind: FragmentKind::Code,
    };
}

/// Delimiters in the order they are split: bold, italic, code.
pub static DELIMITERS: [Delimiter; 3] = [Delimiter::BOLD, Delimiter::ITALIC, Delimiter::CODE];
