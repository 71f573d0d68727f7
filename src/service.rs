//! Entry point tying documents, classifications and settings together.

mod settings_manager;

use std::sync::Arc;

use rayon::prelude::*;

use crate::analysis::{ClassificationProvider, handle_highlight};
use crate::config::HighlightSettings;
use crate::document::DocumentStore;
use crate::domain::{HighlightRequest, HighlightResponse};
use crate::error::HighlightResult;

use settings_manager::SettingsManager;

/// Serves highlight requests for the loaded documents.
///
/// Requests share nothing mutable: each one takes a snapshot of its document and of
/// the settings, so independent requests may run concurrently from any thread.
pub struct HighlightService {
    documents: DocumentStore,
    provider: Arc<dyn ClassificationProvider>,
    settings: SettingsManager,
}

impl HighlightService {
    pub fn new(provider: Arc<dyn ClassificationProvider>) -> Self {
        Self::with_settings(provider, HighlightSettings::default())
    }

    pub fn with_settings(
        provider: Arc<dyn ClassificationProvider>,
        settings: HighlightSettings,
    ) -> Self {
        Self {
            documents: DocumentStore::new(),
            provider,
            settings: SettingsManager::new(settings),
        }
    }

    pub fn documents(&self) -> &DocumentStore {
        &self.documents
    }

    /// Load or replace the buffer for `file_name`.
    pub fn open_document(&self, file_name: impl Into<String>, text: String, version: Option<i32>) {
        self.documents.insert(file_name, text, version);
    }

    /// Drop the buffer for `file_name`; returns whether it was loaded.
    pub fn close_document(&self, file_name: &str) -> bool {
        self.documents.remove(file_name).is_some()
    }

    pub fn apply_settings(&self, settings: HighlightSettings) {
        self.settings.apply_settings(settings);
    }

    pub fn settings(&self) -> Arc<HighlightSettings> {
        self.settings.load_settings()
    }

    /// Handle one highlight request.
    pub fn highlight(&self, request: &HighlightRequest) -> HighlightResult<HighlightResponse> {
        let settings = self.settings.load_settings();
        handle_highlight(request, &self.documents, self.provider.as_ref(), &settings)
    }

    /// Handle independent requests in parallel; results keep the request order.
    pub fn handle_batch(
        &self,
        requests: &[HighlightRequest],
    ) -> Vec<HighlightResult<HighlightResponse>> {
        requests
            .par_iter()
            .map(|request| self.highlight(request))
            .collect()
    }
}
