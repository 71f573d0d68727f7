//! Settings management for the highlight service.
//!
//! `SettingsManager` holds the active [`HighlightSettings`] in an `ArcSwap`, so a
//! configuration reload never blocks requests: each request loads one snapshot and
//! keeps using it even if new settings are applied meanwhile.

use arc_swap::ArcSwap;
use std::sync::Arc;

use crate::config::HighlightSettings;

pub(crate) struct SettingsManager {
    settings: ArcSwap<HighlightSettings>,
}

impl std::fmt::Debug for SettingsManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsManager")
            .field("settings", &self.settings.load())
            .finish()
    }
}

impl Default for SettingsManager {
    fn default() -> Self {
        Self::new(HighlightSettings::default())
    }
}

impl SettingsManager {
    pub(crate) fn new(settings: HighlightSettings) -> Self {
        Self {
            settings: ArcSwap::new(Arc::new(settings)),
        }
    }

    /// Replace the active settings.
    pub(crate) fn apply_settings(&self, settings: HighlightSettings) {
        log::info!(
            target: "semantic_highlight::settings",
            "Applying settings: encoding {:?}, {} declared-name kind(s), {} default exclusion(s)",
            settings.position_encoding,
            settings.declared_names.len(),
            settings.exclude_classifications.len()
        );
        self.settings.store(Arc::new(settings));
    }

    /// Snapshot of the active settings.
    pub(crate) fn load_settings(&self) -> Arc<HighlightSettings> {
        self.settings.load_full()
    }
}
