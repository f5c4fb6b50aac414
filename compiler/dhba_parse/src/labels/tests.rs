#![allow(clippy::unwrap_used)]

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn empty_table_finalizes() {
    assert_eq!(LabelTable::new().finalize(), Ok(()));
}

#[test]
fn duplicate_declaration_reports_both_spans() {
    let mut labels = LabelTable::new();
    labels.declare("top", Span::new(6, 9)).unwrap();
    let err = labels.declare("top", Span::new(16, 19)).unwrap_err();
    assert_eq!(err.span, Span::new(16, 19));
    assert_eq!(
        err.kind,
        ParseErrorKind::DuplicateLabel {
            name: "top".to_string(),
            first: Span::new(6, 9),
        }
    );
}

#[test]
fn labels_are_case_sensitive() {
    let mut labels = LabelTable::new();
    labels.declare("top", Span::new(0, 3)).unwrap();
    labels.declare("Top", Span::new(4, 7)).unwrap();
    assert!(labels.declared.contains_key("Top"));
    assert!(!labels.declared.contains_key("TOP"));
}

#[test]
fn forward_reference_resolves() {
    let mut labels = LabelTable::new();
    labels.reference("end", Span::new(5, 8));
    labels.declare("end", Span::new(20, 23)).unwrap();
    assert_eq!(labels.finalize(), Ok(()));
}

#[test]
fn undeclared_targets_in_source_order() {
    let mut labels = LabelTable::new();
    labels.reference("b", Span::new(30, 31));
    labels.reference("a", Span::new(10, 11));
    labels.reference("ok", Span::new(20, 22));
    labels.reference("a", Span::new(40, 41));
    labels.declare("ok", Span::new(0, 2)).unwrap();

    assert_eq!(
        labels.undeclared(),
        vec![("a", Span::new(10, 11)), ("b", Span::new(30, 31))]
    );

    let err = labels.finalize().unwrap_err();
    assert_eq!(err.span, Span::new(10, 11));
    assert_eq!(
        err.kind,
        ParseErrorKind::UndeclaredLabel {
            name: "a".to_string()
        }
    );
}
