// engine_core/src/storage/engine_config.rs
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use directories_next::ProjectDirs;
use once_cell::sync::Lazy;
use ron::from_str;
use serde::{Deserialize, Serialize};
use crate::constants::*;

pub static ENGINE_CONFIG: Lazy<RwLock<EngineConfig>> =
    Lazy::new(|| RwLock::new(load_config_from(&config_path())));

/// Settings shared by the game and the editor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Folder holding the numbered map files.
    pub maps_dir: PathBuf,
    /// Folder holding one sub-folder of tile images per category.
    pub images_dir: PathBuf,
    /// Tile size for freshly created maps.
    pub tile_size: u32,
    /// Screen pixels per display pixel.
    pub render_scale: f32,
    pub log_level: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            maps_dir: PathBuf::from(DEFAULT_MAPS_DIR),
            images_dir: PathBuf::from(DEFAULT_IMAGES_DIR),
            tile_size: DEFAULT_TILE_SIZE,
            render_scale: DEFAULT_RENDER_SCALE,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Returns a copy of the active config.
pub fn engine_config() -> EngineConfig {
    ENGINE_CONFIG
        .read()
        .map(|cfg| cfg.clone())
        .unwrap_or_default()
}

/// Returns the app_dir for the program.
pub fn app_dir() -> PathBuf {
    match ProjectDirs::from("com", "eclipse", "enemy_eclipse") {
        Some(project_dir) => project_dir.config_dir().to_path_buf(),
        // No home directory, keep everything next to the executable
        None => PathBuf::from("."),
    }
}

fn config_path() -> PathBuf {
    app_dir().join(CONFIG_RON)
}

/// Reads a config file, falling back to defaults if it is absent or invalid.
pub fn load_config_from(path: &Path) -> EngineConfig {
    match fs::read_to_string(path) {
        Ok(txt) => match from_str(&txt) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Invalid config {}: {e}. Using defaults.", path.display());
                EngineConfig::default()
            }
        },
        Err(_) => EngineConfig::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_config_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = load_config_from(&dir.path().join("nope.ron"));
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_RON);
        fs::write(&path, "(tile_size: 32, maps_dir: \"levels\")").unwrap();

        let config = load_config_from(&path);
        assert_eq!(config.tile_size, 32);
        assert_eq!(config.maps_dir, PathBuf::from("levels"));
        assert_eq!(config.render_scale, DEFAULT_RENDER_SCALE);
    }

    #[test]
    fn garbage_config_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_RON);
        fs::write(&path, "tile_size = [").unwrap();
        assert_eq!(load_config_from(&path), EngineConfig::default());
    }
}
