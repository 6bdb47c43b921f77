//! Documentation attached to an element.

use refract_types::Location;
use serde::Serialize;

/// A `/** ... */` comment attached to an element.
///
/// The comment is kept verbatim; interpreting tags is left to a dedicated
/// docblock parser.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocBlock {
    text: String,
    location: Location,
}

impl DocBlock {
    pub fn new(text: impl Into<String>, location: Location) -> Self {
        Self {
            text: text.into(),
            location,
        }
    }

    /// The raw comment text including delimiters.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn location(&self) -> Location {
        self.location
    }

    /// First line of prose, stripped of comment delimiters. Empty when the
    /// comment only holds tags.
    pub fn summary(&self) -> &str {
        self.text
            .lines()
            .map(|line| {
                let line = line.trim();
                let line = line.strip_prefix("/**").unwrap_or(line);
                let line = line.strip_suffix("*/").unwrap_or(line);
                line.trim().trim_start_matches('*').trim()
            })
            .find(|line| !line.is_empty())
            .filter(|line| !line.starts_with('@'))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_single_line() {
        let doc = DocBlock::new("/** Adds two numbers. */", Location::unknown());
        assert_eq!(doc.summary(), "Adds two numbers.");
    }

    #[test]
    fn test_summary_multi_line() {
        let doc = DocBlock::new(
            "/**\n * Sends the request.\n *\n * @param Request $r\n */",
            Location::new(10),
        );
        assert_eq!(doc.summary(), "Sends the request.");
        assert_eq!(doc.location().line(), 10);
    }

    #[test]
    fn test_summary_tags_only() {
        let doc = DocBlock::new("/**\n * @return int\n */", Location::unknown());
        assert_eq!(doc.summary(), "");
    }
}
