//! Conversion of filtered spans into the response shape.

use crate::domain::{HighlightResponse, HighlightSpanDto};

use super::token_collector::HighlightSpan;

/// Turn the surviving spans into a [`HighlightResponse`].
///
/// Overlapping neighbours mean the front-end broke its ordering contract; they are
/// logged and passed through unchanged.
pub(super) fn finalize_spans(spans: &[HighlightSpan]) -> HighlightResponse {
    if let Some(pair) = spans.windows(2).find(|pair| pair[0].end() > pair[1].start()) {
        log::warn!(
            target: "semantic_highlight::finalize",
            "Overlapping highlight spans: {:?} and {:?}",
            pair[0],
            pair[1]
        );
    }

    HighlightResponse {
        highlights: spans.iter().map(HighlightSpanDto::from).collect(),
    }
}
