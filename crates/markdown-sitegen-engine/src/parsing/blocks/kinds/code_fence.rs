/// Fenced code block delimited by triple backticks.
pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";

    pub fn is_fence(line: &str) -> bool {
        line.trim_start().starts_with(Self::FENCE)
    }

    /// Literal content between the opening and closing fence lines.
    ///
    /// The opening line (including any info string) is dropped, as is the
    /// last line when it is a fence. Every remaining line keeps its
    /// terminating newline. A single-line block such as ```` ```x``` ````
    /// yields the text between the fences.
    pub fn content(block: &str) -> String {
        let lines: Vec<&str> = block.lines().collect();
        let Some((_, rest)) = lines.split_first() else {
            return String::new();
        };

        if rest.is_empty() {
            let inner = block.trim();
            let inner = inner.strip_prefix(Self::FENCE).unwrap_or(inner);
            let inner = inner.strip_suffix(Self::FENCE).unwrap_or(inner);
            return inner.to_string();
        }

        let body = match rest.split_last() {
            Some((last, body)) if Self::is_fence(last) => body,
            _ => rest,
        };

        let mut content = String::new();
        for line in body {
            content.push_str(line);
            content.push('\n');
        }
        content
    }
}
