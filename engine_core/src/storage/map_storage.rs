// engine_core/src/storage/map_storage.rs
use std::collections::HashMap;
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};
use thiserror::Error;
use crate::onscreen_warn;
use crate::tiles::tile::{GridPos, OffgridTile, Tile};
use crate::tiles::tilemap::TileStore;

/// Why a map file could not be read or written.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("map file '{0}' does not exist")]
    Missing(PathBuf),
    #[error("map file '{path}' is malformed: {reason}")]
    Malformed { path: PathBuf, reason: String },
    #[error("could not access map file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not encode map: {0}")]
    Encode(#[from] serde_json::Error),
}

impl MapError {
    pub fn is_missing(&self) -> bool {
        matches!(self, MapError::Missing(_))
    }
}

/// On-disk layout of a map.
#[serde_as]
#[derive(Serialize, Deserialize, Debug)]
struct MapFile {
    tile_size: u32,
    #[serde_as(as = "HashMap<DisplayFromStr, _>")]
    tilemap: HashMap<GridPos, Tile>,
    #[serde(default)]
    offgrid: Vec<OffgridTile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    spawn_point: Option<[i32; 2]>,
}

impl MapFile {
    fn from_store(store: &TileStore) -> Self {
        Self {
            tile_size: store.tile_size(),
            tilemap: store.tiles.clone(),
            offgrid: store.offgrid.clone(),
            spawn_point: store.spawn_point.map(Into::into),
        }
    }

    fn into_store(self, path: &Path) -> Result<TileStore, MapError> {
        let malformed = |reason: String| MapError::Malformed {
            path: path.to_path_buf(),
            reason,
        };

        if self.tile_size == 0 {
            return Err(malformed("tile_size must be positive".into()));
        }

        if let Some((key, tile)) = self
            .tilemap
            .iter()
            .find(|(key, tile)| **key != tile.grid_position)
        {
            return Err(malformed(format!(
                "tile under key '{key}' claims position '{}'",
                tile.grid_position
            )));
        }

        Ok(TileStore::from_parts(
            self.tile_size,
            self.tilemap,
            self.offgrid,
            self.spawn_point.map(GridPos::from),
        ))
    }
}

impl TileStore {
    /// Writes the map to `path`, creating parent folders as needed.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), MapError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(&MapFile::from_store(self))?;

        let io_err = |source| MapError::Io { path: path.to_path_buf(), source };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(path, json).map_err(io_err)
    }

    /// Reads a map from `path`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, MapError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => MapError::Missing(path.to_path_buf()),
            _ => MapError::Io { path: path.to_path_buf(), source },
        })?;

        let file: MapFile = serde_json::from_str(&json).map_err(|e| MapError::Malformed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        file.into_store(path)
    }

    /// Replaces the whole store with the map at `path`.
    /// On error the store is left untouched.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<(), MapError> {
        *self = Self::from_file(path)?;
        Ok(())
    }

    /// Like [`TileStore::load`], but a missing file leaves an empty map with
    /// the current tile size instead of failing.
    pub fn load_or_empty<P: AsRef<Path>>(&mut self, path: P) -> Result<(), MapError> {
        match self.load(path) {
            Err(MapError::Missing(path)) => {
                onscreen_warn!("Map {} not found. Starting from an empty map.", path.display());
                self.clear();
                Ok(())
            }
            other => other,
        }
    }
}
