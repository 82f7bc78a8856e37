use regex::Regex;
use std::sync::OnceLock;

/// ATX headings (`#` through `######`).
pub struct Heading;

impl Heading {
    pub fn matches(line: &str) -> bool {
        static RE: OnceLock<Regex> = OnceLock::new();
        let re = RE.get_or_init(|| Regex::new(r"^\s{0,3}#{1,6}\s").expect("Invalid heading regex"));
        re.is_match(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atx_headings() {
        assert!(Heading::matches("# Title"));
        assert!(Heading::matches("###### Deep"));
        assert!(Heading::matches("   ## Indented"));
    }

    #[test]
    fn not_headings() {
        assert!(!Heading::matches("####### Too deep"));
        assert!(!Heading::matches("#NoSpace"));
        assert!(!Heading::matches("plain text"));
    }
}
