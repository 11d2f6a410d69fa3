use crate::error::ConfigError;
use crate::layout::LayoutConfig;
use serde::{Deserialize, Serialize};
use std::fs;

/// Editor-wide settings. Every field has a default, so a config file only
/// needs to name what it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub layout: LayoutConfig,
    pub labels: LabelConfig,
    /// Whether a fresh document starts with the seeded "Start Node" step.
    pub seed_start_step: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            labels: LabelConfig::default(),
            seed_start_step: true,
        }
    }
}

/// Default transition labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    /// Label for transitions drawn by hand.
    pub connect_label: String,
    /// Label for imported transitions without a condition.
    pub import_label: String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            connect_label: "New Transition".to_string(),
            import_label: "Transition".to_string(),
        }
    }
}

impl EditorConfig {
    /// Load a config from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
