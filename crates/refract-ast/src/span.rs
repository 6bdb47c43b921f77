//! Source location tracking for syntax tree nodes.

/// A byte range in the source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: u32,
    /// End byte offset (exclusive)
    pub end: u32,
}

impl Span {
    /// Create a new span from start and end offsets.
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }
}

/// A node with an associated source span.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spanned<T> {
    pub node: T,
    #[cfg_attr(feature = "serde", serde(default))]
    pub span: Span,
}

impl<T> Spanned<T> {
    /// Create a new spanned node.
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }

    /// Wrap a node that carries no position information.
    pub fn detached(node: T) -> Self {
        Self {
            node,
            span: Span::default(),
        }
    }
}

impl<T> std::ops::Deref for Spanned<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.node
    }
}

/// Maps byte offsets of a source text to 1-based line and column numbers.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Byte offset at which every line starts.
    line_starts: Vec<u32>,
    len: u32,
}

impl LineIndex {
    /// Index the line starts of `source`.
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        for (i, b) in source.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push(i as u32 + 1);
            }
        }
        Self {
            line_starts,
            len: source.len() as u32,
        }
    }

    /// Line and column (both 1-based) of a byte offset.
    ///
    /// Returns `None` when the offset lies past the end of the source.
    pub fn line_col(&self, offset: u32) -> Option<(u32, u32)> {
        if offset > self.len {
            return None;
        }
        let line = match self.line_starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(next) => next - 1,
        };
        let col = offset - self.line_starts[line];
        Some((line as u32 + 1, col + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_col_first_line() {
        let index = LineIndex::new("<?php\nfunction a() {}\n");
        assert_eq!(index.line_col(0), Some((1, 1)));
        assert_eq!(index.line_col(3), Some((1, 4)));
    }

    #[test]
    fn test_line_col_after_newline() {
        let index = LineIndex::new("<?php\nfunction a() {}\n");
        assert_eq!(index.line_col(6), Some((2, 1)));
        assert_eq!(index.line_col(15), Some((2, 10)));
        assert_eq!(index.line_col(22), Some((3, 1)));
    }

    #[test]
    fn test_line_col_out_of_range() {
        let index = LineIndex::new("abc");
        assert_eq!(index.line_col(3), Some((1, 4)));
        assert_eq!(index.line_col(4), None);
    }

    #[test]
    fn test_detached_has_default_span() {
        let node = Spanned::detached("main");
        assert_eq!(node.span, Span::default());
        assert_eq!(*node, "main");
    }
}
