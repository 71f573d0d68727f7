//! Line and category filtering of materialized spans.
//!
//! Both filters only ever remove spans. They never reorder or merge survivors, so
//! applying them in either order yields the same sequence.

use std::collections::{BTreeSet, HashSet};

use super::legend::ExcludeClassification;
use super::token_collector::HighlightSpan;

/// Keeps spans touching at least one requested line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFilter {
    lines: BTreeSet<u32>,
}

impl LineFilter {
    /// Build a filter from requested lines, dropping lines past the end of the document.
    ///
    /// Editors may send stale line numbers while typing, so out-of-range lines are
    /// ignored instead of failing the request.
    pub fn new(requested: &[u32], line_count: u32) -> Self {
        let (lines, stale): (BTreeSet<u32>, BTreeSet<u32>) =
            requested.iter().partition(|line| **line < line_count);

        if !stale.is_empty() {
            log::debug!(
                target: "semantic_highlight::filter",
                "Ignoring {} requested line(s) beyond line count {}: {:?}",
                stale.len(),
                line_count,
                stale
            );
        }

        Self { lines }
    }

    /// True when no requested line exists in the document.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn first_line(&self) -> Option<u32> {
        self.lines.first().copied()
    }

    pub fn last_line(&self) -> Option<u32> {
        self.lines.last().copied()
    }

    pub fn matches(&self, span: &HighlightSpan) -> bool {
        self.lines
            .range(span.start_line..=span.end_line)
            .next()
            .is_some()
    }

    pub fn apply(&self, spans: &mut Vec<HighlightSpan>) {
        spans.retain(|span| self.matches(span));
    }
}

/// Drops spans whose category belongs to an excluded group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryFilter {
    excluded: HashSet<ExcludeClassification>,
}

impl CategoryFilter {
    pub fn new(excluded: impl IntoIterator<Item = ExcludeClassification>) -> Self {
        Self {
            excluded: excluded.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.excluded.is_empty()
    }

    pub fn matches(&self, span: &HighlightSpan) -> bool {
        !self
            .excluded
            .iter()
            .any(|group| group.contains(span.category))
    }

    pub fn apply(&self, spans: &mut Vec<HighlightSpan>) {
        if self.is_empty() {
            return;
        }
        spans.retain(|span| self.matches(span));
    }
}

/// Both filters of one request, applied in a single pass.
#[derive(Debug, Clone, Default)]
pub struct SpanFilter {
    lines: Option<LineFilter>,
    categories: CategoryFilter,
}

impl SpanFilter {
    pub fn new(lines: Option<LineFilter>, categories: CategoryFilter) -> Self {
        Self { lines, categories }
    }

    pub fn lines(&self) -> Option<&LineFilter> {
        self.lines.as_ref()
    }

    pub fn keeps(&self, span: &HighlightSpan) -> bool {
        self.lines.as_ref().is_none_or(|lines| lines.matches(span)) && self.categories.matches(span)
    }

    pub fn apply(&self, spans: &mut Vec<HighlightSpan>) {
        spans.retain(|span| self.keeps(span));
    }
}
