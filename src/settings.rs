//! Settings persistence
//!
//! Reads `settings.json` from the config directory. A broken file is
//! recovered field by field rather than discarded.

use crate::theme::ThemeMode;
use anyhow::Result;
use image_compare_core::ComparisonConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Overrides the settings file location.
pub const SETTINGS_PATH_ENV: &str = "IMAGE_COMPARE_SETTINGS";

/// Application settings
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// The comparison to show; the demo pair when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparison: Option<ComparisonConfig>,
}

impl AppSettings {
    /// The comparison to mount, falling back to the demo when the configured
    /// one is missing or cannot be rendered.
    pub fn comparison_or_demo(&self) -> ComparisonConfig {
        let Some(config) = &self.comparison else {
            return ComparisonConfig::demo();
        };
        match config.validate() {
            Ok(()) => config.clone(),
            Err(e) => {
                log::error!("Invalid comparison settings: {}, showing demo images", e);
                ComparisonConfig::demo()
            }
        }
    }
}

/// Get the config directory path
pub fn get_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("image-compare")
}

/// Get the settings file path
pub fn get_settings_path() -> PathBuf {
    match std::env::var_os(SETTINGS_PATH_ENV) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => get_config_dir().join("settings.json"),
    }
}

/// Load app settings from the default location
pub fn load_settings() -> AppSettings {
    load_settings_from(&get_settings_path())
}

/// Load app settings from disk. Relative image paths are taken relative to
/// the settings file.
pub fn load_settings_from(path: &Path) -> AppSettings {
    let mut settings = read_settings_file(path);
    if let (Some(comparison), Some(base)) = (settings.comparison.as_mut(), path.parent()) {
        comparison.resolve_relative_to(base);
    }
    settings
}

/// Read the settings file with robust error handling
fn read_settings_file(path: &Path) -> AppSettings {
    if !path.exists() {
        log::info!("Settings file not found at {}, using defaults", path.display());
        return AppSettings::default();
    }

    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            log::error!("Failed to read settings file {}: {}", path.display(), e);
            return AppSettings::default();
        }
    };

    // Fast path for valid settings
    match serde_json::from_str::<AppSettings>(&content) {
        Ok(settings) => return settings,
        Err(e) => {
            log::warn!("Failed to parse settings directly: {}, attempting partial recovery", e);
        }
    }

    match recover_settings_from_json(&content) {
        Ok(settings) => {
            log::info!("Successfully recovered settings with partial data");
            if let Err(e) = save_settings_to(path, &settings) {
                log::warn!("Failed to save recovered settings: {}", e);
            }
            settings
        }
        Err(e) => {
            log::error!("Failed to recover settings from {}: {}", path.display(), e);
            log::error!("Using default settings. Your old settings file has been preserved.");
            AppSettings::default()
        }
    }
}

/// Extract the valid fields of a malformed settings file, defaulting the rest
fn recover_settings_from_json(content: &str) -> Result<AppSettings> {
    use anyhow::Context;

    let value: serde_json::Value = serde_json::from_str(content)
        .context("Settings file is not valid JSON")?;

    let obj = value.as_object()
        .context("Settings file root is not a JSON object")?;

    let mut settings = AppSettings::default();

    if let Some(v) = obj.get("theme_mode") {
        if let Ok(theme) = serde_json::from_value::<ThemeMode>(v.clone()) {
            settings.theme_mode = theme;
        } else {
            log::warn!("Could not parse theme_mode, using default");
        }
    }

    if let Some(v) = obj.get("comparison") {
        match serde_json::from_value::<ComparisonConfig>(v.clone()) {
            Ok(comparison) => settings.comparison = Some(comparison),
            Err(e) => log::warn!("Could not parse comparison settings: {}, using demo", e),
        }
    }

    Ok(settings)
}

pub fn save_settings_to(path: &Path, settings: &AppSettings) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(settings)?;
    std::fs::write(path, content)?;
    Ok(())
}
