use super::kinds::{
    Admonition, AutoUrl, BlockQuote, CodeFence, FenceSig, FrontMatter, Heading, HtmlBlock,
    HtmlComment, IndentedCode, InlineCode, LinkRefDef, ListItem, ListMarker, Table,
};

/// Why a line must never be reflowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protected {
    Heading,
    LinkRefDef,
    HtmlBlock,
    Admonition,
    InlineCode,
    Url,
    QuotedTable,
}

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of processing: each line is classified independently
/// without reference to surrounding context. The builder combines these
/// facts with tracked state to decide copy/collect/reflow.
#[derive(Debug, Clone)]
pub struct LineClass<'a> {
    /// The raw line text, no trailing newline.
    pub raw: &'a str,
    /// Whether the line is whitespace only.
    pub is_blank: bool,
    /// Number of blockquote `>` prefixes found.
    pub quote_depth: usize,
    /// Line content after stripping chevrons (the whole line at depth 0).
    pub remainder: &'a str,
    /// Fence delimiter signature, matched on the raw line.
    pub fence_sig: Option<FenceSig>,
    /// The raw line is a front-matter `---` delimiter.
    pub front_matter_delimiter: bool,
    /// The raw line opens an HTML comment.
    pub html_comment_open: bool,
    /// The raw line has table-row shape.
    pub table_row: bool,
    /// The raw line has table-separator shape.
    pub table_sep: bool,
    /// List-item head parsed from the chevron-stripped remainder.
    pub list: Option<ListMarker<'a>>,
    /// First protection reason that applies, if any.
    pub protected: Option<Protected>,
    /// Remainder is indented-code shaped and not a list item.
    pub indented_code: bool,
}

/// Classifies individual lines for the reflow pipeline.
pub struct LineClassifier;

impl LineClassifier {
    /// Classifies a line into a [`LineClass`] of local facts.
    ///
    /// Protected-pattern checks run against the chevron-stripped
    /// remainder so the same protections hold inside blockquotes; the
    /// inline-code and URL exemptions cover the whole raw line.
    pub fn classify<'a>(&self, raw: &'a str) -> LineClass<'a> {
        let is_blank = raw.trim().is_empty();
        let (quote_depth, idx) = BlockQuote::strip_prefixes(raw);
        let remainder = &raw[idx..];
        let list = ListItem::parse(remainder);
        let indented_code = list.is_none() && IndentedCode::matches(remainder);

        LineClass {
            raw,
            is_blank,
            quote_depth,
            remainder,
            fence_sig: CodeFence::sig(raw),
            front_matter_delimiter: FrontMatter::is_delimiter(raw),
            html_comment_open: HtmlComment::opens(raw),
            table_row: Table::is_row(raw),
            table_sep: Table::is_separator(raw),
            list,
            protected: Self::protection(raw, remainder, quote_depth),
            indented_code,
        }
    }

    /// Protection reasons in precedence order (first match wins).
    fn protection(raw: &str, remainder: &str, quote_depth: usize) -> Option<Protected> {
        if Admonition::matches(raw) {
            return Some(Protected::Admonition);
        }
        if Heading::matches(remainder) {
            return Some(Protected::Heading);
        }
        if LinkRefDef::matches(remainder) {
            return Some(Protected::LinkRefDef);
        }
        if HtmlBlock::matches(remainder) {
            return Some(Protected::HtmlBlock);
        }
        if InlineCode::present(raw) {
            return Some(Protected::InlineCode);
        }
        if AutoUrl::present(raw) {
            return Some(Protected::Url);
        }
        // Table machinery only runs on raw lines; a pipe row inside a
        // blockquote gets no separator lookahead, so copy it verbatim.
        if quote_depth > 0 && Table::is_row(remainder) {
            return Some(Protected::QuotedTable);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(line: &str) -> LineClass<'_> {
        LineClassifier.classify(line)
    }

    #[test]
    fn blank_line() {
        let c = classify("   ");
        assert!(c.is_blank);
        assert_eq!(c.quote_depth, 0);
    }

    #[test]
    fn plain_paragraph_line() {
        let c = classify("just some text");
        assert!(!c.is_blank);
        assert!(c.protected.is_none());
        assert!(c.list.is_none());
        assert!(c.fence_sig.is_none());
    }

    #[test]
    fn quoted_line_remainder() {
        let c = classify("> > quoted text");
        assert_eq!(c.quote_depth, 2);
        assert_eq!(c.remainder, "quoted text");
    }

    #[test]
    fn heading_inside_blockquote_is_protected() {
        let c = classify("> # Title");
        assert_eq!(c.protected, Some(Protected::Heading));
    }

    #[test]
    fn quoted_list_item_parses() {
        let c = classify(">   - item text");
        assert_eq!(c.quote_depth, 1);
        let m = c.list.unwrap();
        assert_eq!(m.indent_len, 2);
        assert_eq!(m.text, "item text");
    }

    #[test]
    fn inline_code_wins_over_paragraph() {
        let c = classify("text with `code` span");
        assert_eq!(c.protected, Some(Protected::InlineCode));
    }

    #[test]
    fn url_line_is_protected() {
        let c = classify("see https://example.com for details");
        assert_eq!(c.protected, Some(Protected::Url));
    }

    #[test]
    fn admonition_header() {
        let c = classify("> [!NOTE]");
        assert_eq!(c.protected, Some(Protected::Admonition));
    }

    #[test]
    fn quoted_table_row_is_protected() {
        let c = classify("> | a | b |");
        assert_eq!(c.protected, Some(Protected::QuotedTable));
        let c = classify("| a | b |");
        assert!(c.protected.is_none());
        assert!(c.table_row);
    }

    #[test]
    fn indented_code_excludes_list_items() {
        assert!(classify("    plain code").indented_code);
        assert!(!classify("    - deep list item").indented_code);
        assert!(classify("    - deep list item").list.is_some());
    }

    #[test]
    fn fence_and_delimiter_facts() {
        assert!(classify("```rust").fence_sig.is_some());
        assert!(classify("---").front_matter_delimiter);
        assert!(classify("<!-- note").html_comment_open);
    }
}
