//! Application settings management
//!
//! Settings live in `settings.json` inside the app data directory. A missing
//! or unreadable-as-JSON file yields the defaults.

use crate::Result;
use edit_engine::EditMode;
use render_model::{LayoutStyle, RenderConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main application settings container
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    /// Table rendering options
    pub render: RenderSettings,
    /// Edit session options
    pub editing: EditingSettings,
}

/// Table rendering options
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderSettings {
    pub layout_style: LayoutStyle,
    /// Empty rows kept below the items to match the printed form
    pub padding_rows: usize,
    /// Digit grouping character for quantities
    pub thousands_separator: char,
}

impl Default for RenderSettings {
    fn default() -> Self {
        let config = RenderConfig::default();
        Self {
            layout_style: config.layout_style,
            padding_rows: config.padding_rows,
            thousands_separator: config.thousands_separator,
        }
    }
}

impl From<&RenderSettings> for RenderConfig {
    fn from(settings: &RenderSettings) -> Self {
        RenderConfig {
            layout_style: settings.layout_style,
            padding_rows: settings.padding_rows,
            thousands_separator: settings.thousands_separator,
        }
    }
}

/// Edit session options
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditingSettings {
    /// Open the table with inputs instead of static text
    pub start_in_edit_mode: bool,
}

impl EditingSettings {
    pub fn initial_mode(&self) -> EditMode {
        EditMode::from(self.start_in_edit_mode)
    }
}

/// Settings manager handles loading and saving settings
pub struct SettingsManager {
    settings_path: PathBuf,
    current: AppSettings,
}

impl SettingsManager {
    /// Create a new settings manager with the given app data directory
    pub fn new(app_data_dir: impl AsRef<Path>) -> Self {
        Self {
            settings_path: app_data_dir.as_ref().join("settings.json"),
            current: AppSettings::default(),
        }
    }

    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_sync(&mut self) -> Result<&AppSettings> {
        self.current = if self.settings_path.exists() {
            let content = std::fs::read_to_string(&self.settings_path)?;
            serde_json::from_str::<AppSettings>(&content).unwrap_or_else(|e| {
                tracing::warn!("Failed to parse settings file, using defaults: {}", e);
                AppSettings::default()
            })
        } else {
            AppSettings::default()
        };
        tracing::debug!(path = %self.settings_path.display(), "settings loaded");
        Ok(&self.current)
    }

    /// Save current settings to disk
    pub fn save_sync(&self) -> Result<()> {
        if let Some(parent) = self.settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(&self.current)?;
        std::fs::write(&self.settings_path, content)?;
        Ok(())
    }

    /// Get current settings
    pub fn current(&self) -> &AppSettings {
        &self.current
    }

    /// Replace the cached settings without touching disk
    pub fn update(&mut self, settings: AppSettings) {
        self.current = settings;
    }

    /// Replace the settings and save them
    pub fn update_sync(&mut self, settings: AppSettings) -> Result<()> {
        self.update(settings);
        self.save_sync()
    }
}
