// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! Enum-like settings (transition style, UI mode) are stored as plain strings
//! and parsed through fallback constructors, so an unrecognized value degrades
//! to the default variant instead of failing the load.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Marquee";

/// Access restriction level of the frontend UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Unrestricted.
    #[default]
    Full,
    /// Browsing only; configuration collections hidden by the host.
    Kiosk,
    /// Most restricted mode.
    Kid,
}

impl UiMode {
    /// Parses a mode name; anything unrecognized reads as [`UiMode::Full`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "kiosk" => UiMode::Kiosk,
            "kid" => UiMode::Kid,
            _ => UiMode::Full,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            UiMode::Full => "full",
            UiMode::Kiosk => "kiosk",
            UiMode::Kid => "kid",
        }
    }

    /// Whether this mode restricts what the catalog shows.
    #[must_use]
    pub fn is_restricted(self) -> bool {
        self != UiMode::Full
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// Transition style name: `instant`, `slide`, or `fade`.
    pub transition_style: Option<String>,
    /// Whether the logo band animates during transitions (`false` snaps).
    #[serde(default)]
    pub move_carousel: Option<bool>,
    /// UI mode name: `full`, `kiosk`, or `kid`.
    #[serde(default)]
    pub ui_mode: Option<String>,
    /// Directory containing one subdirectory per theme.
    #[serde(default)]
    pub theme_dir: Option<PathBuf>,
    /// Path to the catalog TOML file.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            transition_style: Some("instant".to_string()),
            move_carousel: Some(true),
            ui_mode: Some(UiMode::Full.name().to_string()),
            theme_dir: None,
            catalog: None,
        }
    }
}

impl Settings {
    #[must_use]
    pub fn move_carousel(&self) -> bool {
        self.move_carousel.unwrap_or(true)
    }

    #[must_use]
    pub fn ui_mode(&self) -> UiMode {
        self.ui_mode
            .as_deref()
            .map(UiMode::from_name)
            .unwrap_or_default()
    }

    pub fn set_ui_mode(&mut self, mode: UiMode) {
        self.ui_mode = Some(mode.name().to_string());
    }

    /// The configured transition style name (parsing happens in the engine).
    #[must_use]
    pub fn transition_style_name(&self) -> &str {
        self.transition_style.as_deref().unwrap_or("instant")
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Settings> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Settings::default())
}

pub fn save(settings: &Settings) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(settings, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Settings> {
    let contents = fs::read_to_string(path)?;
    let settings: Settings = toml::from_str(&contents)?;
    Ok(settings)
}

pub fn save_to_path(settings: &Settings, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(settings)?;
    fs::write(path, contents)?;
    Ok(())
}
