//! User configuration loading for semantic-highlight.
//!
//! User config location: $XDG_CONFIG_HOME/semantic-highlight/semantic-highlight.toml
//! Fallback: the platform config directory reported by `dirs::config_dir()`.

use std::path::PathBuf;

use super::settings::HighlightSettings;
use crate::error::HighlightResult;

const APP_DIR: &str = "semantic-highlight";
const CONFIG_FILE: &str = "semantic-highlight.toml";

/// Returns the path to the user configuration file.
///
/// The path is determined by:
/// 1. If $XDG_CONFIG_HOME is set: $XDG_CONFIG_HOME/semantic-highlight/semantic-highlight.toml
/// 2. Otherwise: <platform config dir>/semantic-highlight/semantic-highlight.toml
///
/// Returns None if no config directory can be determined.
pub fn user_config_path() -> Option<PathBuf> {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)?;
    Some(base.join(APP_DIR).join(CONFIG_FILE))
}

/// Load the user configuration, or `None` when no config file exists.
pub fn load_user_config() -> HighlightResult<Option<HighlightSettings>> {
    let Some(path) = user_config_path() else {
        return Ok(None);
    };
    if !path.is_file() {
        log::debug!(
            target: "semantic_highlight::config",
            "No user config at {}",
            path.display()
        );
        return Ok(None);
    }
    log::info!(
        target: "semantic_highlight::config",
        "Loading user config from {}",
        path.display()
    );
    HighlightSettings::load(&path).map(Some)
}
