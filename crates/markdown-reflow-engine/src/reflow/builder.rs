use unicode_width::UnicodeWidthStr;

use super::classify::LineClass;
use super::collect::{self, ItemUnit};
use super::kinds::{BlockQuote, CodeFence, HtmlComment};
use super::state::{ListContext, Mode, ProcessorState};
use super::wrap::reflow;

/// File-level state machine.
///
/// Walks classified lines in order, copies protected content verbatim
/// and flushes reflow-eligible units through the wrap engine. There is
/// no error path: malformed structure always degrades to copying the
/// smallest safe span unchanged.
pub struct ReflowBuilder {
    max_width: usize,
    state: ProcessorState,
    out: Vec<String>,
}

impl ReflowBuilder {
    pub fn new(max_width: usize) -> Self {
        Self {
            max_width,
            state: ProcessorState::new(),
            out: Vec::new(),
        }
    }

    pub fn run(mut self, classes: &[LineClass<'_>]) -> Vec<String> {
        let mut i = 0;
        while i < classes.len() {
            i = self.step(classes, i);
        }
        self.out
    }

    /// Processes the line at `i`, returning the index of the next
    /// unprocessed line.
    fn step(&mut self, classes: &[LineClass<'_>], i: usize) -> usize {
        let c = &classes[i];

        match self.state.mode {
            Mode::FrontMatter => {
                self.copy(c.raw);
                if c.front_matter_delimiter {
                    self.state.on_front_matter_delimiter();
                }
                return i + 1;
            }
            Mode::HtmlComment => {
                self.copy(c.raw);
                if HtmlComment::closes(c.raw) {
                    self.state.mode = Mode::Normal;
                }
                return i + 1;
            }
            Mode::Fence(open) => {
                self.copy(c.raw);
                if CodeFence::closes(open, c.fence_sig) {
                    self.state.mode = Mode::Normal;
                }
                return i + 1;
            }
            Mode::Table => {
                if c.table_row {
                    self.copy(c.raw);
                    return i + 1;
                }
                // Table ended; this line is reprocessed in normal mode.
                self.state.mode = Mode::Normal;
            }
            Mode::Normal => {}
        }

        if c.front_matter_delimiter {
            self.copy(c.raw);
            self.state.on_front_matter_delimiter();
            return i + 1;
        }

        if c.html_comment_open {
            self.copy(c.raw);
            if !HtmlComment::closes(c.raw) {
                self.state.mode = Mode::HtmlComment;
            }
            return i + 1;
        }

        if let Some(sig) = c.fence_sig {
            self.copy(c.raw);
            self.state.mode = Mode::Fence(sig);
            return i + 1;
        }

        if collect::is_table_start(classes, i) {
            self.copy(c.raw);
            self.copy(classes[i + 1].raw);
            self.state.mode = Mode::Table;
            return i + 2;
        }

        if c.is_blank {
            self.copy(c.raw);
            self.state.clear_lists();
            return i + 1;
        }

        self.state.quote_depth = c.quote_depth;

        if c.protected.is_some() {
            self.copy(c.raw);
            return i + 1;
        }

        if c.list.is_some() {
            return self.flush_list_item(classes, i);
        }

        if c.indented_code {
            self.copy(c.raw);
            return i + 1;
        }

        self.flush_paragraph(classes, i)
    }

    fn flush_list_item(&mut self, classes: &[LineClass<'_>], i: usize) -> usize {
        let Some(marker) = &classes[i].list else {
            return i + 1;
        };

        self.state.enter_item(ListContext {
            indent_len: marker.indent_len,
            marker_text: marker.marker_text(),
        });
        let Some(ctx) = self.state.current_item().cloned() else {
            return i + 1;
        };

        match collect::collect_list_item(classes, i, &ctx, self.state.quote_depth) {
            ItemUnit::Verbatim { end } => {
                for lc in &classes[i..end] {
                    self.copy(lc.raw);
                }
                end
            }
            ItemUnit::Reflow { end, text } => {
                let bq = BlockQuote::prefix(self.state.quote_depth);
                let initial = format!("{}{}", " ".repeat(ctx.indent_len), ctx.marker_text);
                let violating = classes[i..end]
                    .iter()
                    .any(|lc| lc.raw.width() > self.max_width);

                if violating && !text.is_empty() {
                    let continuation = " ".repeat(initial.width());
                    let first = format!("{bq}{initial}");
                    let rest = format!("{bq}{continuation}");
                    self.out.extend(reflow(&text, self.max_width, &first, &rest));
                } else if end == i + 1 {
                    // Single compliant line: prefix normalization only.
                    self.out
                        .push(format!("{bq}{initial}{text}").trim_end().to_string());
                } else {
                    for lc in &classes[i..end] {
                        self.copy(lc.raw);
                    }
                }
                end
            }
        }
    }

    fn flush_paragraph(&mut self, classes: &[LineClass<'_>], i: usize) -> usize {
        let end = collect::collect_paragraph(classes, i);
        let violating = classes[i..end]
            .iter()
            .any(|lc| lc.raw.width() > self.max_width);
        if !violating {
            for lc in &classes[i..end] {
                self.copy(lc.raw);
            }
            return end;
        }

        let text = classes[i..end]
            .iter()
            .map(|lc| lc.remainder.trim())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if text.is_empty() {
            for lc in &classes[i..end] {
                self.copy(lc.raw);
            }
            return end;
        }

        let bq = BlockQuote::prefix(self.state.quote_depth);
        self.out.extend(reflow(&text, self.max_width, &bq, &bq));
        end
    }

    fn copy(&mut self, raw: &str) {
        self.out.push(raw.to_string());
    }
}
