// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme
//! - `[lightbox]` - Overlay fade, image scale-in and swipe threshold
//! - `[filter]` - Staggered filter animation timings
//! - `[gallery]` - Entrance animation and preloading
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `ICED_GALLERY_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_gallery::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::gallery::filter::FilterTimings;
use crate::gallery::lightbox::LightboxTimings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeChoice {
    Light,
    #[default]
    Dark,
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme.
    #[serde(default)]
    pub theme: ThemeChoice,
}

/// Lightbox overlay settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LightboxConfig {
    /// Overlay fade duration in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fade_ms: Option<u64>,

    /// Delay before the fade-in starts, in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entrance_defer_ms: Option<u64>,

    /// Delay between image load completion and scale-in, in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale_in_delay_ms: Option<u64>,

    /// Horizontal distance a touch must travel to count as a swipe.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swipe_threshold: Option<f32>,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            fade_ms: Some(DEFAULT_FADE_MS),
            entrance_defer_ms: Some(DEFAULT_ENTRANCE_DEFER_MS),
            scale_in_delay_ms: Some(DEFAULT_SCALE_IN_DELAY_MS),
            swipe_threshold: Some(DEFAULT_SWIPE_THRESHOLD),
        }
    }
}

/// Filter animation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterConfig {
    /// Per-entry stagger in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stagger_ms: Option<u64>,

    /// Duration of each entry transition in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_transition_ms: Option<u64>,

    /// Minimum delay before the lightbox catalog is resynchronized.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resync_ms: Option<u64>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            stagger_ms: Some(DEFAULT_STAGGER_MS),
            item_transition_ms: Some(DEFAULT_ITEM_TRANSITION_MS),
            resync_ms: Some(DEFAULT_RESYNC_MS),
        }
    }
}

/// Gallery grid settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Per-entry delay of the initial fade-in, in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entrance_stagger_ms: Option<u64>,

    /// Whether full-size images are preloaded at startup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preload: Option<bool>,

    /// Number of decoded images kept in memory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preload_cache_images: Option<usize>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            entrance_stagger_ms: Some(DEFAULT_ENTRANCE_STAGGER_MS),
            preload: Some(true),
            preload_cache_images: Some(DEFAULT_PRELOAD_CACHE_IMAGES),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub lightbox: LightboxConfig,

    #[serde(default)]
    pub filter: FilterConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,
}

impl Config {
    /// Lightbox timings with every value clamped into its supported range.
    #[must_use]
    pub fn lightbox_timings(&self) -> LightboxTimings {
        let fade = self
            .lightbox
            .fade_ms
            .unwrap_or(DEFAULT_FADE_MS)
            .clamp(MIN_FADE_MS, MAX_FADE_MS);
        let swipe_threshold = self
            .lightbox
            .swipe_threshold
            .unwrap_or(DEFAULT_SWIPE_THRESHOLD);
        let swipe_threshold = if swipe_threshold.is_finite() {
            swipe_threshold.clamp(MIN_SWIPE_THRESHOLD, MAX_SWIPE_THRESHOLD)
        } else {
            DEFAULT_SWIPE_THRESHOLD
        };

        LightboxTimings {
            fade: Duration::from_millis(fade),
            entrance_defer: Duration::from_millis(
                self.lightbox
                    .entrance_defer_ms
                    .unwrap_or(DEFAULT_ENTRANCE_DEFER_MS)
                    .min(MAX_FADE_MS),
            ),
            scale_in_delay: Duration::from_millis(
                self.lightbox
                    .scale_in_delay_ms
                    .unwrap_or(DEFAULT_SCALE_IN_DELAY_MS)
                    .min(MAX_FADE_MS),
            ),
            scale_in: Duration::from_millis(DEFAULT_SCALE_IN_MS),
            swipe_threshold,
        }
    }

    /// Filter timings with every value clamped into its supported range.
    #[must_use]
    pub fn filter_timings(&self) -> FilterTimings {
        FilterTimings {
            stagger: Duration::from_millis(
                self.filter
                    .stagger_ms
                    .unwrap_or(DEFAULT_STAGGER_MS)
                    .min(MAX_STAGGER_MS),
            ),
            item_transition: Duration::from_millis(
                self.filter
                    .item_transition_ms
                    .unwrap_or(DEFAULT_ITEM_TRANSITION_MS)
                    .min(MAX_ITEM_TRANSITION_MS),
            ),
            resync: Duration::from_millis(
                self.filter
                    .resync_ms
                    .unwrap_or(DEFAULT_RESYNC_MS)
                    .min(MAX_ITEM_TRANSITION_MS * 4),
            ),
        }
    }

    /// Per-entry delay of the initial fade-in.
    #[must_use]
    pub fn entrance_stagger(&self) -> Duration {
        Duration::from_millis(
            self.gallery
                .entrance_stagger_ms
                .unwrap_or(DEFAULT_ENTRANCE_STAGGER_MS)
                .min(MAX_STAGGER_MS),
        )
    }

    /// Preload cache capacity clamped into its supported range.
    #[must_use]
    pub fn preload_cache_images(&self) -> usize {
        self.gallery
            .preload_cache_images
            .unwrap_or(DEFAULT_PRELOAD_CACHE_IMAGES)
            .clamp(MIN_PRELOAD_CACHE_IMAGES, MAX_PRELOAD_CACHE_IMAGES)
    }
}

fn default_config_path() -> Option<PathBuf> {
    paths::get_app_config_dir().map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default location.
///
/// Never fails: a missing file yields defaults, an unreadable or corrupt one
/// yields defaults plus a warning describing what went wrong.
pub fn load() -> (Config, Option<String>) {
    let Some(path) = default_config_path() else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => {
            let warning = format!("{}: {}", path.display(), err);
            (Config::default(), Some(warning))
        }
    }
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
