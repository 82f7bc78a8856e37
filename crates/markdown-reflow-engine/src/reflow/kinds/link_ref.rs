use regex::Regex;
use std::sync::OnceLock;

/// Link reference definitions (`[id]: https://example.com`).
///
/// These are layout-sensitive: the label and target must stay on one
/// line, so they are always copied verbatim.
pub struct LinkRefDef;

impl LinkRefDef {
    pub fn matches(line: &str) -> bool {
        static RE: OnceLock<Regex> = OnceLock::new();
        let re = RE.get_or_init(|| {
            Regex::new(r"^\s{0,3}\[[^\]]+\]:\s+\S+").expect("Invalid link reference regex")
        });
        re.is_match(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_definitions() {
        assert!(LinkRefDef::matches("[id]: https://example.com"));
        assert!(LinkRefDef::matches("  [long label]: ./relative/path"));
    }

    #[test]
    fn not_reference_definitions() {
        assert!(!LinkRefDef::matches("[link](https://example.com)"));
        assert!(!LinkRefDef::matches("[id]:"));
        assert!(!LinkRefDef::matches("plain text"));
    }
}
