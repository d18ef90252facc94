//! Settings persistence
//!
//! Saves and loads [`BoardSettings`] to/from a JSON file in the user's config
//! directory. Command line flags are applied on top of whatever was loaded.
//!
//! # Error Handling
//!
//! [`load_settings`] never fails: a missing or unreadable file falls back to
//! defaults with a log line. The path-taking variants return [`CoreResult`]
//! so callers (and tests) can see what went wrong.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::assets::MAX_TILE_SIZE;
use crate::core::error::{CoreError, CoreResult};
use crate::rendering::board::board_theme::{DEFAULT_DARK_HEX, DEFAULT_LIGHT_HEX};

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Default tile edge in pixels
pub const DEFAULT_TILE_SIZE: u32 = 60;

/// Board appearance and asset location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardSettings {
    /// Directory holding `pieces/<code>.png`
    pub asset_dir: PathBuf,
    /// Edge length of one tile in pixels
    pub tile_size: u32,
    /// Start with Black at the bottom
    pub start_flipped: bool,
    pub light_hex: String,
    pub dark_hex: String,
    /// Where finished games are written as PGN
    pub saves_dir: PathBuf,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from("assets"),
            tile_size: DEFAULT_TILE_SIZE,
            start_flipped: false,
            light_hex: DEFAULT_LIGHT_HEX.to_string(),
            dark_hex: DEFAULT_DARK_HEX.to_string(),
            saves_dir: PathBuf::from(crate::core::SAVES_DIR),
        }
    }
}

impl BoardSettings {
    pub fn validate(&self) -> CoreResult<()> {
        if !(1..=MAX_TILE_SIZE).contains(&self.tile_size) {
            return Err(CoreError::InvalidSetting {
                name: "tile_size",
                message: format!("must be between 1 and {MAX_TILE_SIZE} pixels"),
            });
        }
        Ok(())
    }
}

/// Resolves the settings file path
///
/// Uses the platform config directory, e.g. `~/.config/chessdesk/settings.json`.
/// Falls back to a local `settings.json` if no config dir can be found.
pub fn settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "chessdesk", "ChessDesk") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Loads settings from the default location, using defaults on any failure
pub fn load_settings() -> BoardSettings {
    let path = settings_path();
    if !path.exists() {
        info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
        return BoardSettings::default();
    }
    match load_settings_from(&path) {
        Ok(settings) => {
            info!("[SETTINGS] Loaded settings from {:?}", path);
            settings
        }
        Err(e) => {
            warn!(
                "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
                path, e
            );
            BoardSettings::default()
        }
    }
}

pub fn load_settings_from(path: &Path) -> CoreResult<BoardSettings> {
    let contents = fs::read_to_string(path)?;
    let settings: BoardSettings = serde_json::from_str(&contents)?;
    settings.validate()?;
    Ok(settings)
}

/// Saves settings to the default location
pub fn save_settings(settings: &BoardSettings) -> CoreResult<PathBuf> {
    let path = settings_path();
    save_settings_to(&path, settings)?;
    Ok(path)
}

pub fn save_settings_to(path: &Path, settings: &BoardSettings) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    info!("[SETTINGS] Saved settings to {:?}", path);
    Ok(())
}
