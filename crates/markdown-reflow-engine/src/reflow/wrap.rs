use textwrap::{Options, WordSplitter, wrap};

/// Greedy word wrap with distinct first-line and continuation prefixes.
///
/// Tokens are never split and hyphens are not break points, so emphasis
/// markers and compound words survive re-wrapping. A single token wider
/// than `max_width` is emitted on its own line, uncut: an over-width
/// line is better than a corrupted token.
pub fn reflow(
    text: &str,
    max_width: usize,
    initial_prefix: &str,
    continuation_prefix: &str,
) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    let options = Options::new(max_width)
        .initial_indent(initial_prefix)
        .subsequent_indent(continuation_prefix)
        .break_words(false)
        .word_splitter(WordSplitter::NoHyphenation);
    wrap(text, options)
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicode_width::UnicodeWidthStr;

    #[test]
    fn short_text_stays_on_one_line() {
        let lines = reflow("short text", 80, "", "");
        assert_eq!(lines, vec!["short text"]);
    }

    #[test]
    fn wraps_at_word_boundaries() {
        let text = "alpha beta gamma delta";
        let lines = reflow(text, 11, "", "");
        assert_eq!(lines, vec!["alpha beta", "gamma delta"]);
    }

    #[test]
    fn prefixes_first_and_continuation_lines() {
        let text = "one two three four five six seven eight";
        let lines = reflow(text, 16, "- ", "  ");
        assert!(lines[0].starts_with("- "));
        for line in &lines[1..] {
            assert!(line.starts_with("  "));
            assert!(!line.starts_with("- "));
        }
        for line in &lines {
            assert!(line.width() <= 16);
        }
    }

    #[test]
    fn never_splits_a_token() {
        let token = "a".repeat(50);
        let lines = reflow(&format!("pre {token} post"), 20, "", "");
        assert!(lines.iter().any(|l| l.contains(token.as_str())));
    }

    #[test]
    fn does_not_break_on_hyphens() {
        let lines = reflow("a well-known-compound word", 12, "", "");
        for line in &lines {
            assert!(!line.ends_with('-') || line.contains("well-known-compound"));
        }
        assert!(lines.iter().any(|l| l.contains("well-known-compound")));
    }

    #[test]
    fn blockquote_prefix_on_every_line() {
        let text = "quoted words repeat again and again and again";
        let lines = reflow(text, 20, "> ", "> ");
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.starts_with("> "));
        }
    }

    #[test]
    fn empty_text_yields_nothing() {
        assert!(reflow("", 80, "- ", "  ").is_empty());
    }
}
