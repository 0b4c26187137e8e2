//! # pii-eval
//!
//! Span-level correctness evaluation for PII detection services.
//!
//! Compares human-annotated ground-truth spans against the detections an
//! external analyzer returned for the same text, and partitions every
//! pairing into six disjoint outcome buckets (exact match, mismatched
//! entity type, nested, overlapping, missed, extra). From the partition
//! it derives the precision/recall/F1 numbers a detection-quality report
//! is built on.
//!
//! The crate is pure: no I/O, no HTTP, no JSON parsing of raw payloads.
//! Callers send the fixture text to their analyzer however they like and
//! hand the decoded results in; each call is independent, so evaluating
//! many fixtures in parallel is entirely the caller's choice.
//!
//! ## Quick start
//!
//! ```rust
//! use pii_eval::{build_fixture, classify, RecognizerResult, TemplatePart};
//!
//! // Ground truth comes from a template: no hand-counted offsets.
//! let fixture = build_fixture(&[
//!     TemplatePart::literal("Hi, I'm "),
//!     TemplatePart::pii("Kate", "PERSON"),
//!     TemplatePart::literal(" from "),
//!     TemplatePart::pii("Maine", "LOCATION"),
//! ]);
//!
//! // fixture.text goes to the analysis service; its decoded response
//! // comes back as RecognizerResults.
//! let found = vec![
//!     RecognizerResult::new("PERSON", 0.91, 8, 12),
//!     RecognizerResult::new("DATE_TIME", 0.40, 18, 23),
//! ];
//!
//! let result = classify(&fixture.expected_pii, &found)?;
//! assert_eq!(result.exact_matches.len(), 1);
//! assert_eq!(result.mismatched_entity_type.len(), 1);
//!
//! let counts = result.counts();
//! assert!((counts.precision() - 0.5).abs() < 1e-9);
//! # Ok::<(), pii_eval::Error>(())
//! ```
//!
//! ## Design notes
//!
//! - All interval predicates are closed: spans that touch at one offset
//!   count as overlapping. See [`Span`].
//! - Expected spans for one call must be pairwise non-overlapping; this
//!   is validated up front and violations abort with the offending
//!   indices. See [`classify`].
//! - Matching is asymmetric on purpose: a fragmented detector produces
//!   one diagnostic per fragment against the same ground-truth span,
//!   while each detection is attributed at most once.

#![warn(missing_docs)]

mod classify;
mod entity;
mod error;
mod fixture;
pub mod metrics;
mod overlap;
pub mod report;
mod span;

pub use classify::{
    classify, ClassificationResult, ExactMatch, MismatchedEntityType, OverlapDiagnostic,
};
pub use entity::{ExpectedPii, RecognizerResult};
pub use error::{Error, Result};
pub use fixture::{build_fixture, Fixture, TemplatePart};
pub use metrics::EvalCounts;
pub use overlap::{scan_overlaps, SpanOverlap};
pub use span::Span;
