//! Render settings for shape descriptors
//!
//! Settings are read from JSON the same way application settings are: a
//! document that fails to parse, or carries unusable values, is logged and
//! replaced by defaults instead of failing the caller.

use serde::{Deserialize, Serialize};

/// Colors picked from when a shape has no explicit fill, in selection order
pub const FALLBACK_PALETTE: [&str; 5] = [
    "rgba(255,137,137,1)",
    "rgba(216,241,255,1)",
    "rgba(255,219,65,1)",
    "rgba(144,238,144,1)",
    "rgba(255,182,193,1)",
];

/// Settings that influence descriptor output
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RenderSettings {
    /// Palette for identifier-derived fallback fills
    #[serde(default = "default_palette")]
    pub fallback_palette: Vec<String>,
}

fn default_palette() -> Vec<String> {
    FALLBACK_PALETTE.iter().map(|c| c.to_string()).collect()
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            fallback_palette: default_palette(),
        }
    }
}

impl RenderSettings {
    /// Parse settings, falling back to defaults on any problem
    pub fn from_json_str(content: &str) -> Self {
        match serde_json::from_str::<RenderSettings>(content) {
            Ok(settings) if settings.fallback_palette.is_empty() => {
                tracing::warn!("Render settings have an empty fallback palette, using defaults");
                Self::default()
            }
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Failed to parse render settings, using defaults: {}", e);
                Self::default()
            }
        }
    }

    pub fn to_json_string(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
