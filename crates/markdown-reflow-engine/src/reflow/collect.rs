use super::classify::{LineClass, Protected};
use super::state::ListContext;

/// Outcome of collecting one list item and its continuation lines.
#[derive(Debug, PartialEq, Eq)]
pub enum ItemUnit {
    /// Safe to reflow: the flattened payload text of item and
    /// continuations.
    Reflow { end: usize, text: String },
    /// A continuation carried an inline-code span or URL; the whole
    /// collected block is copied verbatim instead of reflowed.
    Verbatim { end: usize },
}

/// Collects a list item starting at `start` together with its
/// continuation lines.
///
/// A continuation must sit at the item's quote depth, be indented at
/// least as far as the full marker prefix, and not itself open a list
/// item or any structural block. The first blank line always ends the
/// item: multi-paragraph items are not supported.
pub fn collect_list_item(
    classes: &[LineClass<'_>],
    start: usize,
    ctx: &ListContext,
    quote_depth: usize,
) -> ItemUnit {
    let mut parts: Vec<&str> = Vec::new();
    if let Some(m) = &classes[start].list {
        let t = m.text.trim();
        if !t.is_empty() {
            parts.push(t);
        }
    }

    let mut tainted = false;
    let mut i = start + 1;
    while i < classes.len() {
        let c = &classes[i];
        if c.is_blank || c.fence_sig.is_some() || c.front_matter_delimiter || c.html_comment_open {
            break;
        }
        if is_table_start(classes, i) {
            break;
        }
        if matches!(
            c.protected,
            Some(
                Protected::Heading
                    | Protected::LinkRefDef
                    | Protected::HtmlBlock
                    | Protected::Admonition
                    | Protected::QuotedTable
            )
        ) {
            break;
        }
        if c.quote_depth != quote_depth {
            break;
        }
        if c.list.is_some() {
            break;
        }
        if leading_spaces(c.remainder) < ctx.continuation_indent() {
            break;
        }
        if matches!(c.protected, Some(Protected::InlineCode | Protected::Url)) {
            tainted = true;
        }
        parts.push(c.remainder.trim());
        i += 1;
    }

    if tainted {
        ItemUnit::Verbatim { end: i }
    } else {
        ItemUnit::Reflow {
            end: i,
            text: parts.join(" "),
        }
    }
}

/// Collects a run of reflow-eligible paragraph lines starting at
/// `start`, returning the index one past the unit.
///
/// The unit closes on a blank line, any protected or structural line, a
/// list item, or a change of blockquote depth.
pub fn collect_paragraph(classes: &[LineClass<'_>], start: usize) -> usize {
    let depth = classes[start].quote_depth;
    let mut i = start + 1;
    while i < classes.len() {
        let c = &classes[i];
        if c.is_blank
            || c.protected.is_some()
            || c.list.is_some()
            || c.indented_code
            || c.fence_sig.is_some()
            || c.front_matter_delimiter
            || c.html_comment_open
        {
            break;
        }
        if is_table_start(classes, i) {
            break;
        }
        if c.quote_depth != depth {
            break;
        }
        i += 1;
    }
    i
}

/// A table opens where a row line is directly followed by a separator
/// line.
pub fn is_table_start(classes: &[LineClass<'_>], i: usize) -> bool {
    classes[i].table_row && classes.get(i + 1).is_some_and(|n| n.table_sep)
}

fn leading_spaces(s: &str) -> usize {
    s.len() - s.trim_start_matches(' ').len()
}
