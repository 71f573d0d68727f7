//! Text position utilities.
//!
//! This module maps absolute byte offsets in a source buffer to zero-based
//! line/column positions in a chosen encoding.

pub mod position;

pub use position::{
    IndexedText, Position, PositionEncoding, PositionMapper, PositionView, compute_line_starts,
};
