pub mod analysis;
pub mod config;
pub mod document;
pub mod domain;
pub mod error;
pub mod events;
pub mod service;
pub mod text;

pub use analysis::highlight::{
    ExcludeClassification, HighlightSpan, OutputCategory, RawCategory, RawToken, SymbolKind,
};
pub use analysis::{ClassificationProvider, StaticClassifications, handle_highlight};
pub use config::HighlightSettings;
pub use domain::{HighlightRequest, HighlightResponse, HighlightSpanDto};
pub use error::{HighlightError, HighlightResult};
pub use service::HighlightService;
