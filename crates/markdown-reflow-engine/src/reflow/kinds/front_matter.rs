/// YAML front-matter delimiter lines.
pub struct FrontMatter;

impl FrontMatter {
    /// The delimiter: exactly three dashes alone on a line.
    pub const DELIMITER: &'static str = "---";

    /// A delimiter line is `---` with nothing but trailing whitespace.
    pub fn is_delimiter(line: &str) -> bool {
        line.trim_end() == Self::DELIMITER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_delimiter() {
        assert!(FrontMatter::is_delimiter("---"));
        assert!(FrontMatter::is_delimiter("---  "));
    }

    #[test]
    fn not_a_delimiter() {
        assert!(!FrontMatter::is_delimiter("----"));
        assert!(!FrontMatter::is_delimiter(" ---"));
        assert!(!FrontMatter::is_delimiter("--- text"));
    }
}
