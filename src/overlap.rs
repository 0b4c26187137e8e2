//! Pairwise overlap scanning over a single span collection.
//!
//! Used for the expected-span precondition check before classification,
//! and exposed directly for raw self-overlap audits of analyzer output.

use crate::Span;
use serde::{Deserialize, Serialize};

/// One overlapping pair reported by [`scan_overlaps`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanOverlap {
    /// Index of the earlier span in the scanned collection.
    pub first: usize,
    /// Index of the later span.
    pub second: usize,
    /// The shared range.
    pub intersection: Span,
}

/// Report every pair `(i, j)` with `i < j` whose spans overlap, annotated
/// with the computed intersection, in lexicographic index order.
///
/// Quadratic in the collection size. Inputs here are evaluation fixtures
/// of at most tens of spans, so a scan over all pairs is both fast enough
/// and easy to audit; an interval index would be wasted machinery.
#[must_use]
pub fn scan_overlaps(spans: &[Span]) -> Vec<SpanOverlap> {
    let mut pairs = Vec::new();
    for (i, a) in spans.iter().enumerate() {
        for (j, b) in spans.iter().enumerate().skip(i + 1) {
            // Closed intervals: an intersection exists exactly when the
            // spans overlap.
            if let Some(intersection) = a.intersection(b) {
                pairs.push(SpanOverlap {
                    first: i,
                    second: j,
                    intersection,
                });
            }
        }
    }
    pairs
}
