//! Declaration positions.

use serde::Serialize;
use std::fmt;

/// Where an element was declared. Line and column are 1-based; `-1`
/// marks a position the parser did not report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Location {
    line: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    column: Option<i32>,
}

impl Location {
    pub fn new(line: i32) -> Self {
        Self {
            line: line.max(-1),
            column: None,
        }
    }

    pub fn with_column(line: i32, column: i32) -> Self {
        Self {
            line: line.max(-1),
            column: Some(column.max(-1)),
        }
    }

    pub fn unknown() -> Self {
        Self::new(-1)
    }

    pub fn line(&self) -> i32 {
        self.line
    }

    pub fn column(&self) -> Option<i32> {
        self.column
    }

    pub fn is_known(&self) -> bool {
        self.line >= 0
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::unknown()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_known() {
            return f.write_str("<unknown>");
        }
        match self.column {
            Some(column) => write!(f, "{}:{}", self.line, column),
            None => write!(f, "{}", self.line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unknown() {
        let location = Location::default();
        assert_eq!(location.line(), -1);
        assert_eq!(location.column(), None);
        assert!(!location.is_known());
        assert_eq!(location.to_string(), "<unknown>");
    }

    #[test]
    fn test_clamps_below_unknown() {
        assert_eq!(Location::new(-7).line(), -1);
        assert_eq!(Location::with_column(3, -4).column(), Some(-1));
    }

    #[test]
    fn test_display() {
        assert_eq!(Location::new(12).to_string(), "12");
        assert_eq!(Location::with_column(12, 5).to_string(), "12:5");
    }
}
