use regex::Regex;
use std::sync::OnceLock;

/// Inline code spans.
///
/// A line containing a span marker is never reflowed: wrapping could
/// tear the span apart, so the whole line is copied verbatim.
pub struct InlineCode;

impl InlineCode {
    /// The backtick character that delimits code spans.
    pub const TICK: char = '`';

    pub fn present(line: &str) -> bool {
        line.contains(Self::TICK)
    }
}

/// Bare and angle-bracket URLs.
///
/// URLs must not be split across lines, so lines carrying one are copied
/// verbatim.
pub struct AutoUrl;

impl AutoUrl {
    pub fn present(line: &str) -> bool {
        static RE: OnceLock<Regex> = OnceLock::new();
        let re = RE.get_or_init(|| {
            Regex::new(r"https?://\S+|<https?://[^>]+>").expect("Invalid URL regex")
        });
        re.is_match(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_span_detection() {
        assert!(InlineCode::present("use the `foo` flag"));
        assert!(!InlineCode::present("no spans here"));
    }

    #[test]
    fn url_detection() {
        assert!(AutoUrl::present("see https://example.com/page"));
        assert!(AutoUrl::present("see <https://example.com> too"));
        assert!(AutoUrl::present("insecure http://example.com"));
        assert!(!AutoUrl::present("no links here"));
        assert!(!AutoUrl::present("https is a protocol"));
    }
}
