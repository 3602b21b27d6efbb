//! Match spans and raw match results

use std::fmt;

/// Inclusive `[start, end]` range over the scanned symbol sequence
///
/// Positions count Unicode scalar values, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    /// Index of the first symbol
    pub start: usize,
    /// Index of the last symbol (inclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {start} exceeds end {end}");
        Self { start, end }
    }

    /// Number of symbols covered
    pub fn size(&self) -> usize {
        self.end - self.start + 1
    }

    /// Whether the two spans share at least one index
    pub fn overlaps_with(&self, other: &Span) -> bool {
        self.start <= other.end && self.end >= other.start
    }

    /// Whether `point` lies inside the span
    pub fn contains_point(&self, point: usize) -> bool {
        self.start <= point && point <= self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start, self.end)
    }
}

/// A keyword occurrence found in the scanned text
///
/// Borrows the keyword text and payload from the [`Trie`](crate::Trie)
/// that produced it.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Match<'a, T> {
    #[cfg_attr(feature = "serde", serde(flatten))]
    span: Span,
    keyword: &'a str,
    payload: &'a T,
}

impl<'a, T> Match<'a, T> {
    pub(crate) fn new(span: Span, keyword: &'a str, payload: &'a T) -> Self {
        Self {
            span,
            keyword,
            payload,
        }
    }

    /// The matched range
    pub fn span(&self) -> Span {
        self.span
    }

    /// First matched symbol index
    pub fn start(&self) -> usize {
        self.span.start
    }

    /// Last matched symbol index (inclusive)
    pub fn end(&self) -> usize {
        self.span.end
    }

    /// Number of matched symbols
    pub fn size(&self) -> usize {
        self.span.size()
    }

    /// The keyword as it was registered
    pub fn keyword(&self) -> &'a str {
        self.keyword
    }

    /// The payload registered with the keyword
    pub fn payload(&self) -> &'a T {
        self.payload
    }
}

// Only references inside: Copy for every T
impl<T> Clone for Match<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Match<'_, T> {}

impl<T: PartialEq> PartialEq for Match<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.span == other.span && self.keyword == other.keyword && self.payload == other.payload
    }
}

impl<T: Eq> Eq for Match<'_, T> {}

impl<T> fmt::Display for Match<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.span, self.keyword)
    }
}
