use serde::{Deserialize, Serialize};

use super::scoring::ScoringConfig;

/// Root configuration structure for jimotode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct JimotodeConfig {
    /// Rating curve and undisclosed-data policy
    #[serde(default)]
    pub scoring: Option<ScoringConfig>,

    /// Preview rules for viewers without full access
    #[serde(default)]
    pub access: Option<AccessConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

impl JimotodeConfig {
    pub fn scoring(&self) -> ScoringConfig {
        self.scoring.clone().unwrap_or_default()
    }

    pub fn access(&self) -> AccessConfig {
        self.access.clone().unwrap_or_default()
    }

    pub fn output(&self) -> OutputConfig {
        self.output.clone().unwrap_or_default()
    }
}

/// Who sees full company cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessConfig {
    /// Leading cards shown in full to viewers without full access
    #[serde(default = "default_preview_count")]
    pub preview_count: usize,

    /// Full access also requires the viewer to have added the account as a friend
    #[serde(default = "default_require_friend")]
    pub require_friend: bool,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            preview_count: default_preview_count(),
            require_friend: default_require_friend(),
        }
    }
}

pub fn default_preview_count() -> usize {
    3
}
pub fn default_require_friend() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_format")]
    pub default_format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: default_output_format(),
        }
    }
}

pub fn default_output_format() -> String {
    "terminal".to_string()
}
