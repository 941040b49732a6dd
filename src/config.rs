//! Engine tuning knobs, optionally loaded from a TOML file.
//!
//! Every field has a serde default, so a partial file overrides only the
//! sections it names and a missing file yields the builtin defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Root settings for the recommendation engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EngineSettings {
    #[serde(default)]
    pub composition: CompositionSettings,
    #[serde(default)]
    pub analytics: AnalyticsSettings,
}

/// Outfit composition knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompositionSettings {
    /// Maximum number of pieces the composer selects for one outfit.
    #[serde(default = "default_max_outfit_items")]
    pub max_outfit_items: u32,
}

impl Default for CompositionSettings {
    fn default() -> Self {
        Self {
            max_outfit_items: default_max_outfit_items(),
        }
    }
}

const fn default_max_outfit_items() -> u32 {
    4
}

/// Wardrobe analytics and insight thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsSettings {
    /// Window (days) within which a piece counts as recently worn.
    #[serde(default = "default_recency_window_days")]
    pub recency_window_days: i64,
    /// Days without wear after which a piece counts as forgotten.
    #[serde(default = "default_forgotten_after_days")]
    pub forgotten_after_days: i64,
    /// Item confidence at or above which a piece is a confidence booster.
    #[serde(default = "default_high_confidence_threshold")]
    pub high_confidence_threshold: f32,
}

impl Default for AnalyticsSettings {
    fn default() -> Self {
        Self {
            recency_window_days: default_recency_window_days(),
            forgotten_after_days: default_forgotten_after_days(),
            high_confidence_threshold: default_high_confidence_threshold(),
        }
    }
}

const fn default_recency_window_days() -> i64 {
    30
}

const fn default_forgotten_after_days() -> i64 {
    30
}

const fn default_high_confidence_threshold() -> f32 {
    8.0
}

impl EngineSettings {
    pub fn from_toml_str(data: &str) -> Result<Self> {
        toml::from_str(data).context("Failed to parse engine settings TOML")
    }

    /// Loads settings from disk, or the defaults when no file exists.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            let data = fs::read_to_string(path)
                .with_context(|| format!("Failed to read settings file {:?}", path))?;
            Self::from_toml_str(&data)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_knob() {
        let settings = EngineSettings::default();
        assert_eq!(settings.composition.max_outfit_items, 4);
        assert_eq!(settings.analytics.recency_window_days, 30);
        assert_eq!(settings.analytics.forgotten_after_days, 30);
        assert_eq!(settings.analytics.high_confidence_threshold, 8.0);
    }

    #[test]
    fn partial_toml_overrides_only_named_fields() {
        let settings = EngineSettings::from_toml_str(
            r#"
            [analytics]
            recency_window_days = 14
            "#,
        )
        .expect("partial settings should parse");
        assert_eq!(settings.analytics.recency_window_days, 14);
        assert_eq!(settings.analytics.forgotten_after_days, 30);
        assert_eq!(settings.composition.max_outfit_items, 4);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let settings = EngineSettings::load_or_default(Path::new("/nonexistent/settings.toml"))
            .expect("missing file should fall back to defaults");
        assert_eq!(settings.composition.max_outfit_items, 4);
    }

    #[test]
    fn settings_file_loads_from_disk() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("engine.toml");
        fs::write(&path, "[composition]\nmax_outfit_items = 3\n").unwrap();
        let settings = EngineSettings::load_or_default(&path).expect("file should load");
        assert_eq!(settings.composition.max_outfit_items, 3);
    }
}
