use regex::Regex;
use std::sync::OnceLock;

/// Bare HTML block lines: a tag alone on a line, e.g. `<details>`.
pub struct HtmlBlock;

impl HtmlBlock {
    pub fn matches(line: &str) -> bool {
        static RE: OnceLock<Regex> = OnceLock::new();
        let re = RE.get_or_init(|| {
            Regex::new(r"^\s{0,3}<[/a-zA-Z][^>]*>\s*$").expect("Invalid HTML block regex")
        });
        re.is_match(line)
    }
}

/// HTML comments, possibly spanning multiple lines.
pub struct HtmlComment;

impl HtmlComment {
    pub const OPEN: &'static str = "<!--";
    pub const CLOSE: &'static str = "-->";

    /// True when the line opens a comment (only whitespace before `<!--`).
    pub fn opens(line: &str) -> bool {
        line.trim_start().starts_with(Self::OPEN)
    }

    /// True when the line carries the comment terminator.
    pub fn closes(line: &str) -> bool {
        line.contains(Self::CLOSE)
    }
}
