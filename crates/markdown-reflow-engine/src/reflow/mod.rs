//! # Structure-Aware Reflow
//!
//! Two-phase processing of a markdown document against a maximum line
//! width.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into
//!    a `LineClass` of local facts (blank status, blockquote depth,
//!    chevron-stripped remainder, fence signature, table shape, list
//!    marker, protection reasons)
//!
//! 2. **Building** (`builder`): a `ReflowBuilder` walks the classified
//!    lines with a `ProcessorState` tracking the active block mode, the
//!    list-context stack and the blockquote depth, copying protected
//!    content verbatim and re-wrapping eligible paragraph and list-item
//!    units
//!
//! ## Modules
//!
//! - **`kinds`**: per-construct syntax knowledge (fences, blockquotes,
//!   lists, tables, front-matter, HTML, headings, inline exemptions)
//! - **`classify`**: `LineClassifier` produces a `LineClass` per line
//! - **`state`**: `ProcessorState` with the tagged block `Mode`, the
//!   `ListContext` stack and blockquote depth
//! - **`collect`**: grouping of consecutive lines into paragraph and
//!   list-item units
//! - **`wrap`**: greedy word wrap with first-line/continuation prefixes
//! - **`builder`**: the file-level state machine
//!
//! ## Key Invariants
//!
//! - Content inside fences, tables, front-matter and HTML comments is
//!   copied byte-identical
//! - A wrapped line never exceeds the width unless a single unbreakable
//!   token already does
//! - Malformed structure falls back to verbatim copying; the engine has
//!   no error path

pub mod builder;
pub mod classify;
pub mod collect;
pub mod kinds;
pub mod state;
pub mod wrap;

pub use builder::ReflowBuilder;
pub use classify::{LineClass, LineClassifier, Protected};
pub use state::{ListContext, Mode, ProcessorState};

/// Default maximum line width, matching the repository lint policy.
pub const DEFAULT_MAX_WIDTH: usize = 120;

/// Reflows `text` so that no eligible line exceeds `max_width`.
///
/// Structure-sensitive content (code, tables, front-matter, comments,
/// headings, reference definitions, lines carrying inline code or URLs)
/// is preserved byte-identical, and the input's trailing-newline
/// convention carries over to the output.
pub fn process(text: &str, max_width: usize) -> String {
    let classifier = LineClassifier;
    let lines: Vec<&str> = text.lines().collect();
    let classes: Vec<LineClass<'_>> = lines.iter().map(|l| classifier.classify(l)).collect();

    let out = ReflowBuilder::new(max_width).run(&classes);

    let mut result = out.join("\n");
    if text.ends_with('\n') {
        result.push('\n');
    }
    result
}
