//! Byte ranges into prompt source text.

use std::ops::Range;

/// A half-open byte range `start..end` in the source text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Create a span from a byte range.
    pub fn new(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end.max(range.start),
        }
    }

    /// First byte covered by the span.
    pub fn start(&self) -> usize {
        self.start
    }

    /// One past the last byte covered by the span.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Length of the span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the span covers no bytes.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The span as a byte range, suitable for slicing the source.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}
