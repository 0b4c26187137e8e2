//! Span value type and closed-interval predicates.
//!
//! All matching in this crate is interval arithmetic over character
//! offsets. The predicates use closed-interval semantics: two spans that
//! merely touch at a single offset count as overlapping. A detection
//! ending exactly where an annotation begins is diagnostic signal, not a
//! clean miss.

use serde::{Deserialize, Serialize};

/// A character-offset interval into a single text buffer.
///
/// Invariant: `start <= end`. Spans are immutable values; offsets count
/// characters, not bytes, matching the offset space PII analyzers report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Start offset.
    pub start: usize,
    /// End offset.
    pub end: usize,
}

impl Span {
    /// Create a new span.
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "degenerate span {start}..{end}");
        Self { start, end }
    }

    /// Number of characters covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// True if the span covers no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Closed-interval overlap check, including single-point touch.
    #[must_use]
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// True iff both spans cover exactly the same range.
    #[must_use]
    pub fn same_range(&self, other: &Span) -> bool {
        self.start == other.start && self.end == other.end
    }

    /// The shared range of two spans, if they overlap.
    #[must_use]
    pub fn intersection(&self, other: &Span) -> Option<Span> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (start <= end).then_some(Span { start, end })
    }

    /// If one span fully contains the other, returns the contained
    /// (smaller) range; otherwise `None`.
    #[must_use]
    pub fn nested_range(&self, other: &Span) -> Option<Span> {
        if self.start <= other.start && other.end <= self.end {
            Some(*other)
        } else if other.start <= self.start && self.end <= other.end {
            Some(*self)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}..{}]", self.start, self.end)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_span() -> impl Strategy<Value = Span> {
        (0usize..200, 0usize..50).prop_map(|(start, len)| Span::new(start, start + len))
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(a in arb_span(), b in arb_span()) {
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn intersection_exists_iff_overlap(a in arb_span(), b in arb_span()) {
            prop_assert_eq!(a.overlaps(&b), a.intersection(&b).is_some());
        }

        #[test]
        fn intersection_within_both_spans(a in arb_span(), b in arb_span()) {
            if let Some(i) = a.intersection(&b) {
                prop_assert!(i.start <= i.end);
                prop_assert!(i.start >= a.start && i.start >= b.start);
                prop_assert!(i.end <= a.end && i.end <= b.end);
            }
        }

        #[test]
        fn nested_range_is_smaller_of_the_two(a in arb_span(), b in arb_span()) {
            if let Some(n) = a.nested_range(&b) {
                prop_assert!(n.len() <= a.len());
                prop_assert!(n.len() <= b.len());
                prop_assert!(a.overlaps(&b));
            }
        }

        #[test]
        fn self_overlap_always_holds(a in arb_span()) {
            prop_assert!(a.overlaps(&a));
            prop_assert_eq!(a.nested_range(&a), Some(a));
        }
    }
}
