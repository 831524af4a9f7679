use crate::{ColorScheme, SpanRange, render_spans};

#[test]
fn line_col_test() {
    let source = b"(var x 1)\n(print\n  y)";

    assert_eq!(SpanRange::new(0, 1).line_col(source), (1, 1));
    assert_eq!(SpanRange::new(5, 6).line_col(source), (1, 6));
    assert_eq!(SpanRange::new(10, 11).line_col(source), (2, 1));
    assert_eq!(SpanRange::new(19, 20).line_col(source), (3, 3));
}

#[test]
fn render_test() {
    let source = b"(var x 1)\n(print\n  y)";
    let rendered = render_spans(source, &[SpanRange::new(19, 20)], ColorScheme::none());

    assert!(rendered.starts_with("at line 3, column 3"));
    assert!(rendered.contains("  y)"));
    assert!(rendered.contains("│   ^"));
    assert!(!rendered.contains("(var x 1)"));
}

#[test]
fn dummy_spans_are_not_rendered() {
    let rendered = render_spans(b"(print 1)", &[SpanRange::dummy(3)], ColorScheme::none());

    assert!(rendered.is_empty());
}

#[test]
fn span_helpers() {
    let span = SpanRange::new(3, 8);

    assert_eq!(span.first_char(), SpanRange::new(3, 4));
    assert_eq!(span.last_char(), SpanRange::new(7, 8));
    assert_eq!(span.merge(SpanRange::new(9, 12)), SpanRange::new(3, 12));
    assert!(SpanRange::dummy(0).is_dummy());
}
