// engine_core/src/storage/path_utils.rs
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use crate::constants::MAP_EXTENSION;

/// Path of the map file with the given number.
pub fn map_path(maps_dir: &Path, number: usize) -> PathBuf {
    maps_dir.join(format!("{number}.{MAP_EXTENSION}"))
}

/// Every map file in `maps_dir`, sorted by name.
pub fn list_maps(maps_dir: &Path) -> io::Result<Vec<PathBuf>> {
    if !maps_dir.exists() {
        return Ok(Vec::new());
    }

    let mut maps = Vec::new();
    for entry in fs::read_dir(maps_dir)? {
        let path = entry?.path();
        if path.extension().and_then(|s| s.to_str()) == Some(MAP_EXTENSION) {
            maps.push(path);
        }
    }

    maps.sort();
    Ok(maps)
}

/// Number of map files in `maps_dir`. Also the number of the next new map.
pub fn count_maps(maps_dir: &Path) -> usize {
    match list_maps(maps_dir) {
        Ok(maps) => maps.len(),
        Err(e) => {
            log::warn!("Could not read maps folder {}: {e}", maps_dir.display());
            0
        }
    }
}
