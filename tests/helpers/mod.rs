//! Shared test helpers for integration tests.
//!
//! Note: We use `helpers/mod.rs` instead of the modern `helpers.rs` + `helpers/` pattern
//! because Cargo auto-discovers top-level `.rs` files in `tests/` as integration tests.
//! A `tests/helpers.rs` file would be compiled as a standalone test, which we don't want.

#![allow(dead_code)]

pub mod test_fixtures;

use semantic_highlight::HighlightSpanDto;

/// Assert spans are ordered by start and adjacent spans never overlap.
pub fn assert_ordered_and_disjoint(spans: &[HighlightSpanDto]) {
    for pair in spans.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            (a.start_line, a.start_column) <= (b.start_line, b.start_column),
            "spans out of order: {:?} then {:?}",
            a,
            b
        );
        assert!(
            a.end_line < b.start_line
                || (a.end_line == b.start_line && a.end_column <= b.start_column),
            "spans overlap: {:?} and {:?}",
            a,
            b
        );
    }
}

/// `(kind, text)` pairs for single-line spans, read back out of `source`.
pub fn kinds_and_text(source: &str, spans: &[HighlightSpanDto]) -> Vec<(String, String)> {
    let lines: Vec<&str> = source.split('\n').collect();
    spans
        .iter()
        .map(|span| {
            assert_eq!(span.start_line, span.end_line, "multi-line span: {:?}", span);
            // Fixtures are ASCII, so UTF-16 columns are byte columns
            let line = lines[span.start_line as usize];
            let text = &line[span.start_column as usize..span.end_column as usize];
            (span.kind.clone(), text.to_string())
        })
        .collect()
}
