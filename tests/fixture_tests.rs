//! End-to-end fixture tests: template -> text + ground truth ->
//! classification against simulated analyzer output.

use pii_eval::{build_fixture, classify, RecognizerResult, Span, TemplatePart};

#[test]
fn fixture_offsets_line_up_with_analyzer_offsets() {
    let fixture = build_fixture(&[
        TemplatePart::literal("My name is "),
        TemplatePart::pii("Kate Smith", "PERSON"),
        TemplatePart::literal(", I moved to "),
        TemplatePart::pii("Portland, Maine", "LOCATION"),
        TemplatePart::literal(" last year. Reach me at "),
        TemplatePart::pii("kate.smith@example.com", "EMAIL_ADDRESS"),
        TemplatePart::literal("."),
    ]);

    // A detector that agrees with the ground truth exactly.
    let found: Vec<RecognizerResult> = fixture
        .expected_pii
        .iter()
        .map(|e| RecognizerResult::new(e.entity_type.clone(), 0.99, e.span.start, e.span.end))
        .collect();

    let result = classify(&fixture.expected_pii, &found).unwrap();
    assert_eq!(result.exact_matches.len(), 3);
    assert!(result.missed_pii.is_empty());
    assert!(result.extra_found_pii.is_empty());

    let counts = result.counts();
    assert!((counts.precision() - 1.0).abs() < f64::EPSILON);
    assert!((counts.recall() - 1.0).abs() < f64::EPSILON);
}

#[test]
fn fixture_ground_truth_passes_its_own_precondition() {
    // Values separated by non-empty literals can never overlap.
    let fixture = build_fixture(&[
        TemplatePart::pii("Kate", "PERSON"),
        TemplatePart::literal(" and "),
        TemplatePart::pii("John", "PERSON"),
        TemplatePart::literal(" and "),
        TemplatePart::pii("Ana", "PERSON"),
    ]);
    assert!(classify(&fixture.expected_pii, &[]).is_ok());
}

#[test]
fn adjacent_values_without_separator_are_rejected_as_ground_truth() {
    // Back-to-back values touch at one offset, which closed-interval
    // semantics treat as an overlap; the classifier refuses the fixture.
    let fixture = build_fixture(&[
        TemplatePart::pii("Kate", "PERSON"),
        TemplatePart::pii("Smith", "PERSON"),
    ]);
    assert!(classify(&fixture.expected_pii, &[]).is_err());
}

#[test]
fn rebuilding_the_same_template_is_deterministic() {
    let parts = vec![
        TemplatePart::literal("Card "),
        TemplatePart::pii("4111 1111 1111 1111", "CREDIT_CARD"),
        TemplatePart::literal(" expires "),
        TemplatePart::pii("01/27", "DATE_TIME"),
    ];

    let a = build_fixture(&parts);
    let b = build_fixture(&parts);
    assert_eq!(a.text, b.text);
    assert_eq!(a.expected_pii, b.expected_pii);
}

#[test]
fn multibyte_text_keeps_character_offsets() {
    let fixture = build_fixture(&[
        TemplatePart::literal("Seit "),
        TemplatePart::pii("März", "DATE_TIME"),
        TemplatePart::literal(" wohnt "),
        TemplatePart::pii("Jürgen", "PERSON"),
        TemplatePart::literal(" in "),
        TemplatePart::pii("Köln", "LOCATION"),
    ]);

    assert_eq!(fixture.expected_pii[0].span, Span::new(5, 9));
    assert_eq!(fixture.expected_pii[1].span, Span::new(16, 22));
    assert_eq!(fixture.expected_pii[2].span, Span::new(26, 30));

    // An analyzer reporting character offsets matches exactly.
    let found = vec![
        RecognizerResult::new("DATE_TIME", 0.8, 5, 9),
        RecognizerResult::new("PERSON", 0.9, 16, 22),
        RecognizerResult::new("LOCATION", 0.9, 26, 30),
    ];
    let result = classify(&fixture.expected_pii, &found).unwrap();
    assert_eq!(result.exact_matches.len(), 3);
}

#[test]
fn consecutive_literals_and_values_concatenate_in_order() {
    let fixture = build_fixture(&[
        TemplatePart::literal("a"),
        TemplatePart::literal("b"),
        TemplatePart::pii("X", "PERSON"),
        TemplatePart::literal("c"),
    ]);
    assert_eq!(fixture.text, "abXc");
    assert_eq!(fixture.expected_pii[0].span, Span::new(2, 3));
}
