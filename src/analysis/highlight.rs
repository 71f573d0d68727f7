//! Highlight span building.
//!
//! A request flows through four stages:
//! 1. the classification provider yields a raw token forest for the document
//! 2. `token_collector` flattens the forest into spans, mapping each leaf's category
//! 3. `filter` applies the line and category filters
//! 4. `finalize` converts the survivors into the response shape

pub mod category;
mod filter;
mod finalize;
pub mod legend;
pub mod raw;
mod token_collector;

use std::ops::Range;

pub use category::{DEFAULT_DECLARED_NAMES, DeclaredNames, map_category};
pub use filter::{CategoryFilter, LineFilter, SpanFilter};
pub use legend::{DeclaredNameKind, ExcludeClassification, OutputCategory};
pub use raw::{ClassifiedToken, RawCategory, RawToken, SymbolKind};
pub use token_collector::{HighlightSpan, collect_spans};

use crate::analysis::traits::ClassificationProvider;
use crate::config::HighlightSettings;
use crate::document::{Document, DocumentStore};
use crate::domain::{HighlightRequest, HighlightResponse};
use crate::error::{HighlightError, HighlightResult};
use crate::text::PositionMapper;

use finalize::finalize_spans;

/// Handle a highlight request against the loaded documents.
///
/// # Errors
/// - [`HighlightError::FileNotFound`] when `request.file_name` has no loaded buffer
/// - [`HighlightError::UnmappedCategory`] when the front-end reports an unknown label
/// - [`HighlightError::TokenOutOfBounds`] when a classified range lies outside the buffer
pub fn handle_highlight(
    request: &HighlightRequest,
    documents: &DocumentStore,
    provider: &dyn ClassificationProvider,
    settings: &HighlightSettings,
) -> HighlightResult<HighlightResponse> {
    let document = documents
        .get(&request.file_name)
        .ok_or_else(|| HighlightError::file_not_found(&request.file_name))?;

    let spans = highlight_document(&document, request, provider, settings).inspect_err(|e| {
        log::error!(
            target: "semantic_highlight::highlight",
            "Highlight request for {} failed: {}",
            request.file_name,
            e
        );
    })?;

    log::debug!(
        target: "semantic_highlight::highlight",
        "{} highlight span(s) for {}",
        spans.len(),
        request.file_name
    );
    Ok(finalize_spans(&spans))
}

/// Classify, materialize and filter one document snapshot.
pub fn highlight_document(
    document: &Document,
    request: &HighlightRequest,
    provider: &dyn ClassificationProvider,
    settings: &HighlightSettings,
) -> HighlightResult<Vec<HighlightSpan>> {
    let mapper = document.position_mapper(settings.position_encoding);
    let filter = build_filter(request, settings, mapper.line_count());

    let Some(range) = classification_range(filter.lines(), &mapper) else {
        // Every requested line is past the end of the document
        return Ok(Vec::new());
    };

    let tokens = provider.classify(document, range)?;
    let mut spans = collect_spans(&tokens, &mapper, &settings.declared_names())?;
    filter.apply(&mut spans);
    Ok(spans)
}

fn build_filter(
    request: &HighlightRequest,
    settings: &HighlightSettings,
    line_count: u32,
) -> SpanFilter {
    let lines = request
        .lines
        .as_deref()
        .filter(|lines| !lines.is_empty())
        .map(|lines| LineFilter::new(lines, line_count));

    let excluded = settings
        .exclude_classifications
        .iter()
        .chain(request.exclude_classifications.iter().flatten())
        .copied();

    SpanFilter::new(lines, CategoryFilter::new(excluded))
}

/// Byte range the provider has to classify.
///
/// Without a line filter this is the whole buffer. With one it runs from the start
/// of the first requested line to the end of the last, which covers every token that
/// can touch a requested line. `None` means no requested line exists.
fn classification_range<M>(lines: Option<&LineFilter>, mapper: &M) -> Option<Range<u32>>
where
    M: PositionMapper + ?Sized,
{
    let Some(lines) = lines else {
        return Some(0..mapper.text_len());
    };
    let first = mapper.line_range(lines.first_line()?)?;
    let last = mapper.line_range(lines.last_line()?)?;
    Some(first.start..last.end)
}
