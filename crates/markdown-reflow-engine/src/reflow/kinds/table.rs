use regex::Regex;
use std::sync::OnceLock;

/// Table rows and separator rows.
///
/// A table opens when a row line is followed by a separator line; the
/// whole block is copied verbatim, never reflowed.
pub struct Table;

impl Table {
    /// A pipe-delimited row: `| a | b |`.
    pub fn is_row(line: &str) -> bool {
        static RE: OnceLock<Regex> = OnceLock::new();
        let re =
            RE.get_or_init(|| Regex::new(r"^\s{0,3}\|.*\|\s*$").expect("Invalid table row regex"));
        re.is_match(line)
    }

    /// The header separator row: `| --- | :---: |` and variants.
    pub fn is_separator(line: &str) -> bool {
        static RE: OnceLock<Regex> = OnceLock::new();
        let re = RE.get_or_init(|| {
            Regex::new(r"^\s{0,3}\|?\s*:?-{3,}:?\s*(?:\|\s*:?-{3,}:?\s*)+\|?\s*$")
                .expect("Invalid table separator regex")
        });
        re.is_match(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows() {
        assert!(Table::is_row("| a | b |"));
        assert!(Table::is_row("  | single |"));
        assert!(!Table::is_row("a | b"));
        assert!(!Table::is_row("| unterminated"));
    }

    #[test]
    fn separators() {
        assert!(Table::is_separator("| --- | --- |"));
        assert!(Table::is_separator("|:---|---:|"));
        assert!(Table::is_separator("--- | ---"));
        assert!(!Table::is_separator("| -- | -- |"));
        assert!(!Table::is_separator("| a | b |"));
    }
}
