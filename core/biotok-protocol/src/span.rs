use core::ops::Range;

use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// Read-only view of a token's position, as consumed by downstream stages.
pub trait TokenResult {
    fn start_index(&self) -> usize;

    fn end_index(&self) -> usize;
}

/// Half-open `[start, end)` byte range of one token in the source text.
///
/// Ordering is lexicographic on `(start, end)`, which for spans produced from a
/// single input is the order they were emitted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct TokenSpan {
    pub start: usize,
    pub end: usize,
}

impl TokenSpan {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The token's text within `source`, the string the span was produced from.
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }
}

impl TokenResult for TokenSpan {
    fn start_index(&self) -> usize {
        self.start
    }

    fn end_index(&self) -> usize {
        self.end
    }
}

impl<T: TokenResult + ?Sized> TokenResult for &T {
    fn start_index(&self) -> usize {
        (**self).start_index()
    }

    fn end_index(&self) -> usize {
        (**self).end_index()
    }
}

impl From<TokenSpan> for Range<usize> {
    fn from(span: TokenSpan) -> Range<usize> {
        span.range()
    }
}

impl From<Range<usize>> for TokenSpan {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_is_start_then_end() {
        assert!(TokenSpan::new(0, 4) < TokenSpan::new(5, 9));
        assert!(TokenSpan::new(5, 9) < TokenSpan::new(5, 10));
    }

    #[test]
    fn test_slice_and_result_view() {
        let text = "test's";
        let span = TokenSpan::new(4, 6);

        assert_eq!(span.slice(text), "'s");
        assert_eq!(span.len(), 2);
        assert_eq!((&span).start_index(), 4);
        assert_eq!(span.end_index(), 6);
        assert_eq!(Range::from(span), 4..6);
    }

    #[test]
    fn test_reversed_range_is_empty() {
        #[allow(clippy::reversed_empty_ranges)]
        let span = TokenSpan::from(6..4);

        assert!(span.is_empty());
        assert_eq!(span.len(), 0);
        assert!(!TokenSpan::new(4, 6).is_empty());
    }
}
