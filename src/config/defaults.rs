//! Default configuration values for semantic-highlight.

use super::settings::HighlightSettings;
use crate::analysis::highlight::DEFAULT_DECLARED_NAMES;
use crate::text::PositionEncoding;

/// Returns the default HighlightSettings.
///
/// Type-like symbol kinds are promoted to declared names and no classification
/// is excluded unless a request asks for it.
pub fn default_settings() -> HighlightSettings {
    HighlightSettings {
        position_encoding: PositionEncoding::default(),
        declared_names: DEFAULT_DECLARED_NAMES.to_vec(),
        exclude_classifications: Vec::new(),
    }
}

/// Render the default settings as a TOML template.
pub fn default_settings_toml() -> String {
    toml::to_string_pretty(&default_settings()).unwrap_or_default()
}
