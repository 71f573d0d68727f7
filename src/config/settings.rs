use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::analysis::highlight::{DeclaredNames, ExcludeClassification, SymbolKind};
use crate::error::{HighlightError, HighlightResult};
use crate::text::PositionEncoding;

use super::defaults;

/// Settings that shape every highlight request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HighlightSettings {
    /// Unit in which columns are reported
    pub position_encoding: PositionEncoding,
    /// Symbol kinds whose identifiers are highlighted as declared names
    pub declared_names: Vec<SymbolKind>,
    /// Exclusions merged into every request
    pub exclude_classifications: Vec<ExcludeClassification>,
}

impl Default for HighlightSettings {
    fn default() -> Self {
        defaults::default_settings()
    }
}

impl HighlightSettings {
    pub fn declared_names(&self) -> DeclaredNames {
        self.declared_names.iter().copied().collect()
    }

    /// Parse settings from TOML; missing keys take their defaults.
    pub fn from_toml_str(source: &str) -> HighlightResult<Self> {
        toml::from_str(source).map_err(|e| HighlightError::config(e.to_string()))
    }

    pub fn load(path: &Path) -> HighlightResult<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source).map_err(|e| match e {
            HighlightError::Config { message } => {
                HighlightError::config(format!("{}: {}", path.display(), message))
            }
            other => other,
        })
    }
}
