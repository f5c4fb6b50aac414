use super::*;
use pretty_assertions::assert_eq;

#[test]
fn builder_collects_labels_and_notes() {
    let diag = Diagnostic::error(ErrorCode::E2001)
        .with_message("label `start` is already declared")
        .with_label(Span::new(20, 25), "declared again here")
        .with_secondary_label(Span::new(6, 11), "first declared here")
        .with_note("each label may be declared once");

    assert_eq!(diag.code, ErrorCode::E2001);
    assert_eq!(diag.message, "label `start` is already declared");
    assert_eq!(
        diag.labels,
        vec![
            Label::primary(Span::new(20, 25), "declared again here"),
            Label::secondary(Span::new(6, 11), "first declared here"),
        ]
    );
    assert_eq!(diag.notes, vec!["each label may be declared once".to_string()]);
}

#[test]
fn labels_keep_insertion_order() {
    let diag = Diagnostic::error(ErrorCode::E2004)
        .with_secondary_label(Span::new(0, 1), "context")
        .with_label(Span::new(5, 9), "here");
    assert!(!diag.labels[0].is_primary);
    assert!(diag.labels[1].is_primary);
    assert_eq!(diag.labels[1].span, Span::new(5, 9));
}

#[test]
fn error_starts_empty() {
    let diag = Diagnostic::error(ErrorCode::E9001);
    assert_eq!(diag.message, "");
    assert!(diag.labels.is_empty());
    assert!(diag.notes.is_empty());
}
