//! Page tunables. Every field has a default so partial JSON files work.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::locale::Language;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    /// Language selected when the page mounts.
    pub default_language: Language,
    /// Testimonial autoplay period.
    pub autoplay_interval_ms: u64,
    /// Viewports narrower than this get the mobile layout.
    pub mobile_breakpoint_px: f64,
    /// Scroll distance after which the navbar compacts.
    pub scrolled_threshold_px: f64,
    /// How far above a section's top edge it already counts as active.
    pub scroll_spy_offset_px: f64,
    /// Delay before the newsletter form clears its success state.
    pub newsletter_reset_ms: u64,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            default_language: Language::Fa,
            autoplay_interval_ms: 5_000,
            mobile_breakpoint_px: 768.0,
            scrolled_threshold_px: 50.0,
            scroll_spy_offset_px: 200.0,
            newsletter_reset_ms: 3_000,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("couldn't read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid landing config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid landing config: `{field}` {reason}")]
    OutOfRange {
        field: &'static str,
        reason: &'static str,
    },
}

/// Shortest autoplay period accepted from a config file.
pub const MIN_AUTOPLAY_INTERVAL_MS: u64 = 500;

impl LandingConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make the page misbehave rather than just
    /// look different.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let out_of_range = |field, reason| Err(ConfigError::OutOfRange { field, reason });
        if self.autoplay_interval_ms < MIN_AUTOPLAY_INTERVAL_MS {
            return out_of_range("autoplay_interval_ms", "must be at least 500");
        }
        if self.newsletter_reset_ms == 0 {
            return out_of_range("newsletter_reset_ms", "must be positive");
        }
        let lengths = [
            ("mobile_breakpoint_px", self.mobile_breakpoint_px),
            ("scrolled_threshold_px", self.scrolled_threshold_px),
        ];
        for (field, value) in lengths {
            if !(value.is_finite() && value > 0.0) {
                return out_of_range(field, "must be a positive number");
            }
        }
        if !(self.scroll_spy_offset_px.is_finite() && self.scroll_spy_offset_px >= 0.0) {
            return out_of_range("scroll_spy_offset_px", "must be zero or more");
        }
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    /// `landing.json` inside the platform config directory, if one exists.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("app", "Websaz", "websaz")
            .map(|dirs| dirs.config_dir().join("landing.json"))
    }
}
