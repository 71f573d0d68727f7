//! Span materialization from a raw classification forest.
//!
//! This module walks the forest in document order and turns every leaf token into
//! one [`HighlightSpan`]. Composite tokens never produce a span of their own; their
//! children are emitted in their place, so an interpolated string becomes its
//! delimiters, braces and hole contents in left-to-right order.

use crate::error::{HighlightError, HighlightResult};
use crate::text::{Position, PositionMapper};

use super::category::{DeclaredNames, map_category};
use super::legend::OutputCategory;
use super::raw::RawToken;

/// A classified, end-exclusive line/column range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HighlightSpan {
    pub category: OutputCategory,
    pub start_line: u32,
    pub start_column: u32,
    pub end_line: u32,
    pub end_column: u32,
}

impl HighlightSpan {
    pub fn new(category: OutputCategory, start: Position, end: Position) -> Self {
        Self {
            category,
            start_line: start.line,
            start_column: start.column,
            end_line: end.line,
            end_column: end.column,
        }
    }

    pub fn start(&self) -> Position {
        Position::new(self.start_line, self.start_column)
    }

    pub fn end(&self) -> Position {
        Position::new(self.end_line, self.end_column)
    }

    /// Whether any line covered by the span is `line`.
    pub fn covers_line(&self, line: u32) -> bool {
        (self.start_line..=self.end_line).contains(&line)
    }
}

/// Convert a raw token forest into highlight spans in document order.
///
/// Siblings are visited by ascending start offset; for a stream that is already
/// in document order this keeps the front-end's order unchanged.
///
/// # Errors
/// Returns [`HighlightError::TokenOutOfBounds`] when a leaf token has an inverted
/// range or ends past the end of the text.
pub fn collect_spans<M>(
    tokens: &[RawToken],
    mapper: &M,
    declared: &DeclaredNames,
) -> HighlightResult<Vec<HighlightSpan>>
where
    M: PositionMapper + ?Sized,
{
    let mut spans = Vec::new();

    // Explicit stack instead of recursion; pushed in reverse so pops are in order.
    let mut stack: Vec<&RawToken> = in_document_order(tokens);
    stack.reverse();

    while let Some(token) = stack.pop() {
        if !token.is_leaf() {
            let mut children = in_document_order(&token.children);
            children.reverse();
            stack.extend(children);
            continue;
        }

        spans.push(leaf_span(token, mapper, declared)?);
    }

    Ok(spans)
}

fn leaf_span<M>(
    token: &RawToken,
    mapper: &M,
    declared: &DeclaredNames,
) -> HighlightResult<HighlightSpan>
where
    M: PositionMapper + ?Sized,
{
    let out_of_bounds =
        || HighlightError::token_out_of_bounds(token.start, token.end, mapper.text_len());

    if token.start > token.end {
        return Err(out_of_bounds());
    }
    let start = mapper
        .offset_to_position(token.start)
        .ok_or_else(out_of_bounds)?;
    let end = mapper
        .offset_to_position(token.end)
        .ok_or_else(out_of_bounds)?;

    Ok(HighlightSpan::new(map_category(token, declared), start, end))
}

fn in_document_order(siblings: &[RawToken]) -> Vec<&RawToken> {
    let mut ordered: Vec<&RawToken> = siblings.iter().collect();
    // Stable, so equal starts keep the front-end's order
    ordered.sort_by_key(|token| token.start);
    ordered
}
