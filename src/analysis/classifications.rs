//! Classification forests supplied ahead of time.
//!
//! [`StaticClassifications`] serves forests produced elsewhere, for instance by a
//! compiler front-end that wrote them out as JSON. It is what the CLI uses and what
//! the integration tests drive the request handler with.

use std::ops::Range;
use std::sync::Arc;

use dashmap::DashMap;

use crate::analysis::highlight::{ClassifiedToken, RawToken};
use crate::analysis::traits::ClassificationProvider;
use crate::document::Document;
use crate::error::HighlightResult;

/// Pre-computed classification forests keyed by file name
#[derive(Default)]
pub struct StaticClassifications {
    forests: DashMap<String, Arc<Vec<RawToken>>>,
}

impl StaticClassifications {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, file_name: impl Into<String>, tokens: Vec<RawToken>) {
        self.forests.insert(file_name.into(), Arc::new(tokens));
    }

    /// Decode a JSON array of classified tokens and store it for `file_name`.
    ///
    /// # Errors
    /// Fails with [`HighlightError::Json`] on malformed input and with
    /// [`HighlightError::UnmappedCategory`] on an unknown category label.
    pub fn insert_json(&self, file_name: impl Into<String>, json: &str) -> HighlightResult<()> {
        let wire: Vec<ClassifiedToken> = serde_json::from_str(json)?;
        let tokens = wire
            .into_iter()
            .map(RawToken::try_from)
            .collect::<HighlightResult<Vec<_>>>()?;
        self.insert(file_name, tokens);
        Ok(())
    }
}

impl ClassificationProvider for StaticClassifications {
    fn classify(&self, document: &Document, range: Range<u32>) -> HighlightResult<Vec<RawToken>> {
        let Some(forest) = self
            .forests
            .get(document.file_name())
            .map(|forest| Arc::clone(&forest))
        else {
            // A document with no classifications has nothing to highlight
            return Ok(Vec::new());
        };

        // Inclusive bounds so zero-width tokens at either edge are kept
        let tokens = forest
            .iter()
            .filter(|token| token.start <= range.end && token.end >= range.start)
            .cloned()
            .collect();
        Ok(tokens)
    }
}
