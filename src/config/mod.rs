// SPDX-License-Identifier: MPL-2.0
//! Toast preferences stored in a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[toast]` - Default type, position and auto-dismiss timing
//! - `[gestures]` - Which dismissal gestures are enabled
//! - `[overlay]` - Scrim painted behind the toast
//!
//! # Path Resolution
//!
//! See [`paths`]: explicit override, then `--config-dir`, then
//! `ICED_TOASTER_CONFIG_DIR`, then the platform config directory.
//!
//! # Examples
//!
//! ```no_run
//! use iced_toaster::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.toast.duration_secs = Some(8.0);
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::ui::design_tokens::palette;
use crate::ui::toaster::{Settings, ToasterData, ToasterPosition, ToasterType};
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Default appearance and timing for new toasts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToastConfig {
    /// Premade style used when none is given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ToasterType>,

    /// Edge the toast is anchored to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<ToasterPosition>,

    /// Whether toasts hide themselves after `duration_secs`.
    #[serde(default = "default_true", skip_serializing_if = "Option::is_none")]
    pub auto_dismiss: Option<bool>,

    /// Auto-dismiss delay in seconds.
    #[serde(default = "default_duration_secs", skip_serializing_if = "Option::is_none")]
    pub duration_secs: Option<f32>,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            kind: Some(ToasterType::default()),
            position: Some(ToasterPosition::default()),
            auto_dismiss: Some(true),
            duration_secs: Some(DEFAULT_TOAST_DURATION_SECS),
        }
    }
}

/// Dismissal gestures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GestureConfig {
    #[serde(default = "default_tap", skip_serializing_if = "Option::is_none")]
    pub tap_to_dismiss: Option<bool>,

    #[serde(default = "default_background_tap", skip_serializing_if = "Option::is_none")]
    pub background_tap_to_dismiss: Option<bool>,

    #[serde(default = "default_drag", skip_serializing_if = "Option::is_none")]
    pub drag_to_dismiss: Option<bool>,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            tap_to_dismiss: default_tap(),
            background_tap_to_dismiss: default_background_tap(),
            drag_to_dismiss: default_drag(),
        }
    }
}

/// Scrim behind the toast.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OverlayConfig {
    /// Opacity of the black scrim (0.0 to 1.0).
    #[serde(default = "default_overlay_opacity", skip_serializing_if = "Option::is_none")]
    pub background_opacity: Option<f32>,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            background_opacity: default_overlay_opacity(),
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub toast: ToastConfig,

    #[serde(default)]
    pub gestures: GestureConfig,

    #[serde(default)]
    pub overlay: OverlayConfig,
}

impl Config {
    /// Auto-dismiss delay, clamped to the supported range.
    #[must_use]
    pub fn toast_duration(&self) -> Duration {
        let secs = self
            .toast
            .duration_secs
            .unwrap_or(DEFAULT_TOAST_DURATION_SECS);
        let secs = if secs.is_finite() {
            secs.clamp(MIN_TOAST_DURATION_SECS, MAX_TOAST_DURATION_SECS)
        } else {
            DEFAULT_TOAST_DURATION_SECS
        };
        Duration::from_secs_f32(secs)
    }

    /// Scrim color, with opacity clamped to `0.0..=1.0`.
    #[must_use]
    pub fn overlay_color(&self) -> Color {
        let alpha = self
            .overlay
            .background_opacity
            .unwrap_or(DEFAULT_OVERLAY_OPACITY);
        let alpha = if alpha.is_finite() {
            alpha.clamp(MIN_OVERLAY_OPACITY, MAX_OVERLAY_OPACITY)
        } else {
            DEFAULT_OVERLAY_OPACITY
        };
        Color {
            a: alpha,
            ..palette::BLACK
        }
    }

    /// Overlay behavior described by this configuration.
    #[must_use]
    pub fn toaster_settings(&self) -> Settings {
        Settings::default()
            .position(self.toast.position.unwrap_or_default())
            .auto_dismiss(self.toast.auto_dismiss.unwrap_or(true))
            .duration(self.toast_duration())
            .tap_to_dismiss(self.gestures.tap_to_dismiss.unwrap_or(DEFAULT_TAP_TO_DISMISS))
            .background_tap_to_dismiss(
                self.gestures
                    .background_tap_to_dismiss
                    .unwrap_or(DEFAULT_BACKGROUND_TAP_TO_DISMISS),
            )
            .drag_detection(
                self.gestures
                    .drag_to_dismiss
                    .unwrap_or(DEFAULT_DRAG_TO_DISMISS),
            )
            .overlay_background(self.overlay_color())
    }

    /// Toast data of the configured type, position and timing.
    #[must_use]
    pub fn toaster_data(&self) -> ToasterData {
        ToasterData::new(self.toast.kind.unwrap_or_default())
            .position(self.toast.position.unwrap_or_default())
            .auto_dismiss(self.toast.auto_dismiss.unwrap_or(true))
            .duration(self.toast_duration())
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

#[allow(clippy::unnecessary_wraps)]
fn default_true() -> Option<bool> {
    Some(true)
}

#[allow(clippy::unnecessary_wraps)]
fn default_duration_secs() -> Option<f32> {
    Some(DEFAULT_TOAST_DURATION_SECS)
}

#[allow(clippy::unnecessary_wraps)]
fn default_tap() -> Option<bool> {
    Some(DEFAULT_TAP_TO_DISMISS)
}

#[allow(clippy::unnecessary_wraps)]
fn default_background_tap() -> Option<bool> {
    Some(DEFAULT_BACKGROUND_TAP_TO_DISMISS)
}

#[allow(clippy::unnecessary_wraps)]
fn default_drag() -> Option<bool> {
    Some(DEFAULT_DRAG_TO_DISMISS)
}

#[allow(clippy::unnecessary_wraps)]
fn default_overlay_opacity() -> Option<f32> {
    Some(DEFAULT_OVERLAY_OPACITY)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// the default config with a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "falling back to default config");
                    return (
                        Config::default(),
                        Some(format!("could not load {}: {err}", path.display())),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
