use regex::Regex;
use std::sync::OnceLock;

/// A parsed list-item head: indentation, marker, optional checkbox and
/// the text payload after them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListMarker<'a> {
    /// Number of whitespace characters before the marker.
    pub indent_len: usize,
    /// The marker itself: `-`, `*`, `+`, or `1.`-style.
    pub marker: &'a str,
    /// Checkbox including its trailing spacing (`"[ ] "`), or empty.
    pub checkbox: &'a str,
    /// Payload text after marker and checkbox.
    pub text: &'a str,
}

impl ListMarker<'_> {
    /// Marker text as emitted at the head of the item: marker, one space,
    /// then the checkbox (when present) with its spacing.
    pub fn marker_text(&self) -> String {
        format!("{} {}", self.marker, self.checkbox)
    }
}

/// List-item syntax: bullet (`-`, `*`, `+`) or numbered (`1.`) markers
/// with an optional task checkbox.
pub struct ListItem;

impl ListItem {
    /// Parses a list-item head at any indentation depth. Returns `None`
    /// when the line does not open a list item.
    pub fn parse(line: &str) -> Option<ListMarker<'_>> {
        static RE: OnceLock<Regex> = OnceLock::new();
        let re = RE.get_or_init(|| {
            Regex::new(
                r"^(?P<indent>\s*)(?P<marker>[-*+]|[0-9]{1,4}\.)\s+(?P<checkbox>\[[ xX]\]\s+)?(?P<rest>.*)$",
            )
            .expect("Invalid list item regex")
        });
        let caps = re.captures(line)?;
        Some(ListMarker {
            indent_len: caps.name("indent").map_or(0, |m| m.as_str().len()),
            marker: caps.name("marker").map_or("", |m| m.as_str()),
            checkbox: caps.name("checkbox").map_or("", |m| m.as_str()),
            text: caps.name("rest").map_or("", |m| m.as_str()),
        })
    }
}
