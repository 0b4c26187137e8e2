//! Error types for pii-eval.

use crate::Span;
use thiserror::Error;

/// Result type for evaluation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for evaluation operations.
///
/// Every variant is a deterministic data or logic error: none of these
/// are transient, none are retried, and all abort the evaluation run.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Two ground-truth spans in one fixture share offsets. The matching
    /// algorithm consumes spans one-to-one, so overlapping expected spans
    /// would make its attribution ambiguous; this is a fatal configuration
    /// error in the test data.
    #[error(
        "expected spans at indices {first} and {second} overlap \
         (intersection {intersection}); fixture annotations must be \
         pairwise non-overlapping"
    )]
    OverlappingExpected {
        /// Index of the earlier offending span.
        first: usize,
        /// Index of the later offending span.
        second: usize,
        /// The shared range.
        intersection: Span,
    },

    /// A span arrived with `start > end`. Upstream data is broken; fail
    /// loudly instead of misclassifying.
    #[error("degenerate span in {collection} input at index {index}: start {start} > end {end}")]
    DegenerateSpan {
        /// Which input collection held the span (`"expected"` or `"found"`).
        collection: &'static str,
        /// Index within that collection.
        index: usize,
        /// Reported start offset.
        start: usize,
        /// Reported end offset.
        end: usize,
    },

    /// The classifier reached a state its own invariants rule out.
    #[error("internal classifier error: {0}")]
    Internal(String),
}
