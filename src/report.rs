//! Human-readable rendering of classification results.
//!
//! The reporting layer wants two things: a summary table for dashboards
//! and a per-record detail view that shows the actual text behind each
//! span. Spans are character offsets, so slicing goes through
//! [`slice_span`] rather than byte indexing.

use crate::{ClassificationResult, Span};
use std::fmt::Write as _;

/// Slice `text` by a span's character offsets (end exclusive).
///
/// Out-of-range offsets clamp to the end of the text rather than panic;
/// a diagnostic printout should never abort the run it is describing.
#[must_use]
pub fn slice_span(text: &str, span: Span) -> String {
    text.chars()
        .skip(span.start)
        .take(span.end.saturating_sub(span.start))
        .collect()
}

/// Format the bucket tallies and derived metrics as a markdown table.
#[must_use]
pub fn to_markdown(result: &ClassificationResult) -> String {
    let counts = result.counts();
    format!(
        "| Outcome | Count |\n\
         |---------|-------|\n\
         | Exact matches | {} |\n\
         | Mismatched entity type | {} |\n\
         | Nested | {} |\n\
         | Overlapping | {} |\n\
         | Missed | {} |\n\
         | Extra found | {} |\n\
         \n\
         precision {:.1}% / recall {:.1}% / F1 {:.1}%",
        counts.exact,
        counts.mismatched,
        counts.nested,
        counts.overlapping,
        counts.missed,
        counts.extra,
        counts.precision() * 100.0,
        counts.recall() * 100.0,
        counts.f1() * 100.0,
    )
}

/// Render every record in the partition, slicing `text` for each span so
/// a reader can inspect what was (or was not) detected.
#[must_use]
pub fn render_report(text: &str, result: &ClassificationResult) -> String {
    let mut out = String::new();

    for m in &result.exact_matches {
        let _ = writeln!(
            out,
            "exact: {:?} ({}, score {:.2})",
            m.value, m.entity_type, m.score
        );
    }
    for m in &result.mismatched_entity_type {
        let _ = writeln!(
            out,
            "mismatched type: {:?} at {} detected as {} (score {:.2})",
            m.value, m.span, m.entity_type, m.score
        );
    }
    for d in &result.nested_pii {
        let _ = writeln!(
            out,
            "nested: expected {:?} at {}, found {:?} at {} (overlap {})",
            d.expected.value,
            d.expected.span,
            slice_span(text, d.found.span),
            d.found.span,
            d.overlap
        );
    }
    for d in &result.overlapping_pii {
        let _ = writeln!(
            out,
            "overlapping: expected {:?} at {}, found {:?} at {} (overlap {})",
            d.expected.value,
            d.expected.span,
            slice_span(text, d.found.span),
            d.found.span,
            d.overlap
        );
    }
    for e in &result.missed_pii {
        let _ = writeln!(out, "missed: {:?} ({}) at {}", e.value, e.entity_type, e.span);
    }
    for f in &result.extra_found_pii {
        let _ = writeln!(
            out,
            "extra: {:?} at {} detected as {} (score {:.2})",
            slice_span(text, f.span),
            f.span,
            f.entity_type,
            f.score
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build_fixture, classify, RecognizerResult, TemplatePart};

    #[test]
    fn slice_span_counts_characters() {
        let text = "Café: Zoë";
        assert_eq!(slice_span(text, Span::new(6, 9)), "Zoë");
        assert_eq!(slice_span(text, Span::new(0, 4)), "Café");
    }

    #[test]
    fn slice_span_clamps_out_of_range() {
        assert_eq!(slice_span("abc", Span::new(1, 99)), "bc");
        assert_eq!(slice_span("abc", Span::new(50, 60)), "");
    }

    #[test]
    fn report_mentions_every_bucketed_span() {
        let fixture = build_fixture(&[
            TemplatePart::literal("Call "),
            TemplatePart::pii("Kate", "PERSON"),
            TemplatePart::literal(" in "),
            TemplatePart::pii("Maine", "LOCATION"),
        ]);
        let found = vec![
            RecognizerResult::new("PERSON", 0.9, 5, 9),
            RecognizerResult::new("URL", 0.2, 0, 4),
        ];
        let result = classify(&fixture.expected_pii, &found).unwrap();

        let report = render_report(&fixture.text, &result);
        assert!(report.contains("exact: \"Kate\""));
        assert!(report.contains("missed: \"Maine\""));
        assert!(report.contains("extra: \"Call\""));
    }

    #[test]
    fn markdown_table_includes_metrics_line() {
        let fixture = build_fixture(&[TemplatePart::pii("Kate", "PERSON")]);
        let found = vec![RecognizerResult::new("PERSON", 1.0, 0, 4)];
        let result = classify(&fixture.expected_pii, &found).unwrap();

        let md = to_markdown(&result);
        assert!(md.contains("| Exact matches | 1 |"));
        assert!(md.contains("precision 100.0%"));
    }
}
