pub mod highlight;

pub use highlight::{HighlightRequest, HighlightResponse, HighlightSpanDto};
