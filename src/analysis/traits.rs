use std::ops::Range;

use crate::analysis::highlight::RawToken;
use crate::document::Document;
use crate::error::HighlightResult;

/// Front-end that classifies the lexemes of a document.
///
/// Implementations return the roots of the classification forest in document order,
/// covering at least every lexeme that intersects `range` (absolute byte offsets).
/// Returning more than that is allowed; the caller filters by line afterwards.
pub trait ClassificationProvider: Send + Sync {
    fn classify(&self, document: &Document, range: Range<u32>) -> HighlightResult<Vec<RawToken>>;
}
