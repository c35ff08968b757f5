// engine_core/src/assets/asset_manager.rs
use std::fs;
use std::path::{Path, PathBuf};
use macroquad::prelude::*;
use strum::IntoEnumIterator;
use crate::assets::tile_images::TileImages;
use crate::tiles::tile::TileCategory;
use crate::{onscreen_info, onscreen_warn};

/// Loads `<dir>/<category>/*.png` for every category, sorted by file name.
/// Categories without images get flat placeholder textures.
pub async fn load_tile_images(dir: &Path, tile_size: u32) -> TileImages<Texture2D> {
    let mut images = TileImages::new();

    for category in TileCategory::iter() {
        let folder = dir.join(category.as_ref());
        let mut variants = Vec::new();

        for path in image_paths(&folder) {
            match load_texture(&path.to_string_lossy()).await {
                Ok(texture) => {
                    texture.set_filter(FilterMode::Nearest);
                    variants.push(texture);
                }
                Err(e) => onscreen_warn!("Could not load tile image {}: {e}", path.display()),
            }
        }

        if variants.is_empty() {
            onscreen_info!("No images for '{category}', using placeholders.");
            variants = placeholder_variants(category, tile_size);
        }

        images.insert(category, variants);
    }

    images
}

/// Sorted .png files in `folder`. Missing folders have none.
fn image_paths(folder: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(folder) else {
        return Vec::new();
    };

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("png"))
        .collect();
    paths.sort();
    paths
}

fn placeholder_variants(category: TileCategory, tile_size: u32) -> Vec<Texture2D> {
    let (count, base) = match category {
        TileCategory::Decor => (4, Color::from_rgba(214, 170, 80, 255)),
        TileCategory::Grass => (9, Color::from_rgba(70, 160, 70, 255)),
        TileCategory::LargeDecor => (3, Color::from_rgba(40, 110, 60, 255)),
        TileCategory::Stone => (9, Color::from_rgba(120, 120, 130, 255)),
        TileCategory::Spawners => (2, Color::from_rgba(200, 60, 200, 255)),
    };

    let side = tile_size.clamp(1, u16::MAX as u32) as u16;
    (0..count)
        .map(|variant| {
            // Later variants are slightly darker so they can be told apart
            let shade = 1.0 - variant as f32 * 0.06;
            let color = Color::new(base.r * shade, base.g * shade, base.b * shade, 1.0);
            let rgba: [u8; 4] = color.into();
            let bytes: Vec<u8> = rgba
                .iter()
                .copied()
                .cycle()
                .take(side as usize * side as usize * 4)
                .collect();

            let texture = Texture2D::from_rgba8(side, side, &bytes);
            texture.set_filter(FilterMode::Nearest);
            texture
        })
        .collect()
}
