//! Page configuration: selectors, offsets, and timings.
//!
//! Defaults match the portfolio markup. A page may override any subset by
//! putting a JSON object in the `data-page-config` attribute of `<body>`;
//! missing fields keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::PageError;

/// Gap left between the fixed header and a scrolled-to section.
pub const SCROLL_GAP_PX: f64 = 20.0;

/// How far ahead of a section's top the nav link turns active.
pub const ACTIVE_LOOKAHEAD_PX: f64 = 100.0;

/// Backup delay before hiding the video cover once the frame has loaded.
pub const COVER_FALLBACK_DELAY_MS: u32 = 1000;

/// `localStorage` key holding the theme name.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Body attribute carrying JSON overrides for [`PageConfig`].
pub const CONFIG_ATTRIBUTE: &str = "data-page-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub nav_bar_selector: String,
    pub section_selector: String,
    pub nav_link_selector: String,
    pub anchor_selector: String,
    pub theme_toggle_selector: String,
    pub theme_icon_selector: String,
    pub cv_link_selector: String,
    pub video_cover_selector: String,
    pub video_frame_selector: String,
    pub active_class: String,
    pub theme_storage_key: String,
    pub cv_path: String,
    pub cv_missing_message: String,
    pub scroll_gap_px: f64,
    pub active_lookahead_px: f64,
    pub cover_fallback_delay_ms: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            nav_bar_selector: ".navigation".into(),
            section_selector: ".section".into(),
            nav_link_selector: ".nav-list a".into(),
            anchor_selector: "a[href^=\"#\"]".into(),
            theme_toggle_selector: ".theme-toggle".into(),
            theme_icon_selector: ".theme-icon".into(),
            cv_link_selector: ".cv-download".into(),
            video_cover_selector: ".video-cover".into(),
            video_frame_selector: ".video-container iframe".into(),
            active_class: "active".into(),
            theme_storage_key: THEME_STORAGE_KEY.into(),
            cv_path: "cv.pdf".into(),
            cv_missing_message: "CV file not found. Please contact me directly for my CV.".into(),
            scroll_gap_px: SCROLL_GAP_PX,
            active_lookahead_px: ACTIVE_LOOKAHEAD_PX,
            cover_fallback_delay_ms: COVER_FALLBACK_DELAY_MS,
        }
    }
}

impl PageConfig {
    /// Parse a JSON override object on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Config`] when `raw` is not a JSON object with
    /// fields of the expected types.
    pub fn from_json(raw: &str) -> Result<Self, PageError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Resolve the effective config from an optional override string.
    ///
    /// Malformed overrides are logged and ignored.
    #[must_use]
    pub fn resolve(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("ignoring page config overrides: {err}");
                Self::default()
            }
        }
    }
}
