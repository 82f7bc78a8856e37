use regex::Regex;
use std::sync::OnceLock;

/// GitHub-style admonition headers: `> [!NOTE]`, `> [!WARNING]`, etc.
///
/// Only the header line is protected; the quoted body reflows as
/// ordinary blockquote text.
pub struct Admonition;

impl Admonition {
    pub fn matches(line: &str) -> bool {
        static RE: OnceLock<Regex> = OnceLock::new();
        let re = RE.get_or_init(|| {
            Regex::new(r"^>\s*\[!(?:NOTE|WARNING|TIP|IMPORTANT|CAUTION)\]")
                .expect("Invalid admonition regex")
        });
        re.is_match(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admonition_headers() {
        assert!(Admonition::matches("> [!NOTE]"));
        assert!(Admonition::matches(">[!WARNING]"));
        assert!(Admonition::matches("> [!CAUTION] beware"));
    }

    #[test]
    fn not_admonition_headers() {
        assert!(!Admonition::matches("> [!UNKNOWN]"));
        assert!(!Admonition::matches("> note"));
        assert!(!Admonition::matches("[!NOTE]"));
    }
}
