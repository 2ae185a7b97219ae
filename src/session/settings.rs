//! # Terminal Settings
//!
//! The three user-adjustable settings (animation, sound, zoom) and their
//! INI persistence:
//!
//! ```ini
//! [terminal]
//! animation=fallout
//! sound=true
//! zoom=3
//! ```

use std::path::{Path, PathBuf};

use ini::Ini;
use thiserror::Error;

use crate::config;
use crate::interpreter::AnimationMode;

const SECTION: &str = "terminal";

pub const MIN_ZOOM: u8 = 1;
pub const MAX_ZOOM: u8 = 5;
pub const DEFAULT_ZOOM: u8 = 3;

/// Colour scheme, derived from the active animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Green,
    Fallout,
}

impl Theme {
    pub fn name(&self) -> &'static str {
        match self {
            Theme::Green => "green",
            Theme::Fallout => "fallout",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub animation: AnimationMode,
    pub sound: bool,
    /// Always within `MIN_ZOOM..=MAX_ZOOM`
    pub zoom: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            animation: AnimationMode::Off,
            sound: true,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl Settings {
    pub fn theme(&self) -> Theme {
        match self.animation {
            AnimationMode::Fallout => Theme::Fallout,
            _ => Theme::Green,
        }
    }

    /// Build settings from stored strings. Unknown or out-of-range values
    /// keep their defaults.
    fn from_ini(ini: &Ini) -> Self {
        let defaults = Self::default();

        let animation = ini
            .get_from(Some(SECTION), "animation")
            .and_then(|value| match value {
                // earlier versions stored "none" for no animation
                "none" => Some(AnimationMode::Off),
                other => AnimationMode::parse(other),
            })
            .unwrap_or(defaults.animation);

        let sound = ini
            .get_from(Some(SECTION), "sound")
            .and_then(|value| value.parse::<bool>().ok())
            .unwrap_or(defaults.sound);

        let zoom = ini
            .get_from(Some(SECTION), "zoom")
            .and_then(|value| value.parse::<u8>().ok())
            .filter(|zoom| (MIN_ZOOM..=MAX_ZOOM).contains(zoom))
            .unwrap_or(defaults.zoom);

        Self {
            animation,
            sound,
            zoom,
        }
    }

    fn to_ini(self) -> Ini {
        let mut ini = Ini::new();
        ini.with_section(Some(SECTION))
            .set("animation", self.animation.as_str())
            .set("sound", self.sound.to_string())
            .set("zoom", self.zoom.to_string());
        ini
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: ini::Error,
    },

    #[error("failed to write settings to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// File-backed settings storage
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the configured location (`CINETERM_SETTINGS_PATH` or the
    /// default), with `~` expanded.
    pub fn from_config() -> Self {
        let path = config::get_settings_path();
        Self::new(shellexpand::tilde(&path).into_owned())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings. A missing file yields the defaults.
    pub fn load(&self) -> Result<Settings, SettingsError> {
        if !self.path.exists() {
            tracing::debug!("No settings file at {}, using defaults", self.path.display());
            return Ok(Settings::default());
        }

        let ini = Ini::load_from_file(&self.path).map_err(|source| SettingsError::Read {
            path: self.path.clone(),
            source,
        })?;
        Ok(Settings::from_ini(&ini))
    }

    /// Write settings, creating the parent directory if needed.
    pub fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        let write_error = |source| SettingsError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(write_error)?;
        }
        settings.to_ini().write_to_file(&self.path).map_err(write_error)?;

        tracing::debug!("Saved settings to {}", self.path.display());
        Ok(())
    }
}
