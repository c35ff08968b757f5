// editor/src/editor.rs
use std::path::{Path, PathBuf};
use engine_core::assets::tile_images::TileImages;
use engine_core::logging::logging::last_log;
use engine_core::rendering::render_tilemap::Surface;
use engine_core::rendering::screen_surface::ScreenSurface;
use engine_core::storage::map_storage::MapError;
use engine_core::storage::path_utils::{count_maps, map_path};
use engine_core::tiles::tile::{GridPos, OffgridTile};
use engine_core::tiles::tilemap::TileStore;
use engine_core::{onscreen_error, onscreen_info};
use macroquad::prelude::*;
use crate::controls::editor_input::EditorInput;
use crate::tilemap::tile_palette::TilePalette;

/// Display pixels scrolled per frame while a pan key is held.
const PAN_SPEED: f32 = 2.0;
const PREVIEW_POSITION: Vec2 = vec2(5.0, 5.0);
const SPAWN_COLOR: Color = Color::new(0.0, 1.0, 0.0, 0.6);
const STATUS_COLOR: Color = Color::new(1.0, 1.0, 1.0, 0.9);

pub struct Editor {
    pub store: TileStore,
    pub palette: TilePalette,
    /// Top-left of the view in world pixels.
    pub scroll: Vec2,
    /// Paint grid tiles instead of free-floating ones.
    pub on_grid: bool,
    /// Number of the map file being edited.
    pub map_number: usize,
    maps_dir: PathBuf,
    /// Cursor in display pixels, as of the last update.
    cursor: Vec2,
}

impl Editor {
    /// Opens the map numbered after the existing files, which is usually a
    /// fresh one.
    pub fn new(maps_dir: impl Into<PathBuf>, tile_size: u32, palette: TilePalette) -> Self {
        let maps_dir = maps_dir.into();
        let map_number = count_maps(&maps_dir);

        let mut editor = Self {
            store: TileStore::new(tile_size),
            palette,
            scroll: Vec2::ZERO,
            on_grid: true,
            map_number,
            maps_dir,
            cursor: Vec2::ZERO,
        };

        // A malformed map was already reported on screen
        if let Err(e) = editor.load_map(map_number) {
            log::debug!("Editing an empty map instead of map {map_number}: {e}");
        }
        editor
    }

    pub fn maps_dir(&self) -> &Path {
        &self.maps_dir
    }

    /// Opens map `number`. A missing file starts a new map under that
    /// number; a malformed one is refused and the current map stays.
    pub fn load_map(&mut self, number: usize) -> Result<(), MapError> {
        let path = map_path(&self.maps_dir, number);

        match TileStore::from_file(&path) {
            Ok(store) => {
                self.store = store;
                onscreen_info!("Map {number} loaded.");
            }
            Err(e) if e.is_missing() => {
                onscreen_info!("Map {number} not found. Creating a new map.");
                self.create_new_map();
            }
            Err(e) => {
                onscreen_error!("Refusing to open map {number}: {e}");
                return Err(e);
            }
        }

        self.map_number = number;
        Ok(())
    }

    /// Empties the map being edited. The tile size is kept.
    pub fn create_new_map(&mut self) {
        self.store.clear();
        self.store.autotile();
    }

    pub fn save_map(&self) -> Result<(), MapError> {
        self.store.save(map_path(&self.maps_dir, self.map_number))?;
        onscreen_info!("Map {} saved.", self.map_number);
        Ok(())
    }

    /// Grid cell under a display-space cursor.
    pub fn hovered_cell(&self, mouse: Vec2) -> GridPos {
        self.store.pixel_to_grid(mouse + self.scroll)
    }

    /// Applies one frame of input.
    pub fn update(&mut self, input: &EditorInput) {
        self.cursor = input.mouse;
        self.scroll += input.pan * PAN_SPEED;

        let cell = self.hovered_cell(input.mouse);
        let world_mouse = input.mouse + self.scroll;

        if input.wheel != 0 {
            if input.shift {
                self.palette.cycle_variant(input.wheel);
            } else {
                self.palette.cycle_category(input.wheel);
            }
        }

        if let Some((category, variant)) = self.palette.selected() {
            if input.left_down && self.on_grid {
                self.store.set(cell, category, variant);
            }
            if input.left_pressed && !self.on_grid {
                self.store.push_offgrid(OffgridTile::new(world_mouse, category, variant));
            }
        }

        if input.right_down {
            self.erase_at(cell, world_mouse);
        }

        if input.toggle_grid {
            self.on_grid = !self.on_grid;
        }

        if input.autotile {
            self.store.autotile();
            onscreen_info!("Autotiled map {}.", self.map_number);
        }

        if input.new_map {
            self.map_number = count_maps(&self.maps_dir);
            self.create_new_map();
            onscreen_info!("Started map {}.", self.map_number);
        }

        if input.save {
            if let Err(e) = self.save_map() {
                onscreen_error!("Could not save map {}: {e}", self.map_number);
            }
        }

        if input.set_spawn {
            self.store.set_spawn_point(Some(cell));
            onscreen_info!("Spawn point set to {cell}.");
        }
    }

    /// Removes the grid tile in `cell` and every free-floating tile whose
    /// image covers `world_mouse`.
    fn erase_at(&mut self, cell: GridPos, world_mouse: Vec2) {
        self.store.remove(cell);

        let palette = &self.palette;
        self.store.retain_offgrid(|tile| {
            let Some(size) = palette.image_size(tile.category, tile.variant) else {
                return true;
            };
            let rect = Rect::new(tile.pixel_position.x, tile.pixel_position.y, size.x, size.y);
            !rect.contains(world_mouse)
        });
    }

    pub fn draw(&self, surface: &mut ScreenSurface, images: &TileImages<Texture2D>) {
        clear_background(BLACK);

        let offset = self.scroll.trunc();
        self.store.render(surface, images, offset);

        if let Some(spawn) = self.store.spawn_point() {
            let corner = self.store.grid_to_pixel(spawn) - offset;
            let size = self.store.tile_size() as f32;
            surface.draw_rect(Rect::new(corner.x, corner.y, size, size), SPAWN_COLOR);
        }

        let selected = self
            .palette
            .selected()
            .and_then(|(category, variant)| images.get(category, variant));

        if let Some(image) = selected {
            let ghost = if self.on_grid {
                self.store.grid_to_pixel(self.hovered_cell(self.cursor)) - self.scroll
            } else {
                self.cursor
            };
            surface.blit(image, ghost);
            surface.blit(image, PREVIEW_POSITION);
        }

        let mode = if self.on_grid { "grid" } else { "free" };
        let view = surface.size();
        surface.draw_text(
            &format!("map {}  {mode}  {}", self.map_number, last_log()),
            vec2(4.0, view.y - 4.0),
            STATUS_COLOR,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine_core::tiles::tile::TileCategory;
    use crate::tilemap::tile_palette::PaletteEntry;
    use std::fs;
    use tempfile::tempdir;

    fn palette() -> TilePalette {
        TilePalette::new(vec![
            PaletteEntry { category: TileCategory::Decor, sizes: vec![vec2(16.0, 16.0); 4] },
            PaletteEntry { category: TileCategory::Grass, sizes: vec![vec2(16.0, 16.0); 9] },
            PaletteEntry { category: TileCategory::LargeDecor, sizes: vec![vec2(50.0, 40.0); 3] },
        ])
    }

    fn click(mouse: Vec2) -> EditorInput {
        EditorInput { mouse, left_down: true, left_pressed: true, ..Default::default() }
    }

    #[test]
    fn starts_on_the_next_free_map_number() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("0.json"), "{}").unwrap();
        fs::write(dir.path().join("1.json"), "{}").unwrap();

        let editor = Editor::new(dir.path(), 16, palette());

        assert_eq!(editor.map_number, 2);
        assert!(editor.store.is_empty());
    }

    #[test]
    fn paints_on_the_grid_under_the_scrolled_cursor() {
        let dir = tempdir().unwrap();
        let mut editor = Editor::new(dir.path(), 16, palette());
        editor.scroll = vec2(32.0, 0.0);

        editor.update(&click(vec2(5.0, 20.0)));

        let tile = editor.store.get(GridPos::new(2, 1)).unwrap();
        assert_eq!((tile.category, tile.variant), (TileCategory::Decor, 0));
    }

    #[test]
    fn off_grid_places_once_per_press() {
        let dir = tempdir().unwrap();
        let mut editor = Editor::new(dir.path(), 16, palette());
        editor.update(&EditorInput { toggle_grid: true, ..Default::default() });
        assert!(!editor.on_grid);

        editor.update(&click(vec2(7.5, 9.0)));
        editor.update(&EditorInput { mouse: vec2(7.5, 9.0), left_down: true, ..Default::default() });

        assert_eq!(editor.store.offgrid().len(), 1);
        assert_eq!(editor.store.offgrid()[0].pixel_position, vec2(7.5, 9.0));
        assert_eq!(editor.store.len(), 0);
    }

    #[test]
    fn right_click_erases_grid_and_covering_offgrid_tiles() {
        let dir = tempdir().unwrap();
        let mut editor = Editor::new(dir.path(), 16, palette());
        editor.store.set(GridPos::new(1, 1), TileCategory::Grass, 0);
        editor.store.push_offgrid(OffgridTile::new(vec2(0.0, 0.0), TileCategory::LargeDecor, 1));
        editor.store.push_offgrid(OffgridTile::new(vec2(100.0, 0.0), TileCategory::Decor, 0));

        editor.update(&EditorInput { mouse: vec2(20.0, 20.0), right_down: true, ..Default::default() });

        assert!(editor.store.get(GridPos::new(1, 1)).is_none());
        assert_eq!(editor.store.offgrid().len(), 1);
        assert_eq!(editor.store.offgrid()[0].pixel_position, vec2(100.0, 0.0));
    }

    #[test]
    fn wheel_cycles_category_and_shift_wheel_cycles_variant() {
        let dir = tempdir().unwrap();
        let mut editor = Editor::new(dir.path(), 16, palette());

        editor.update(&EditorInput { wheel: 1, shift: true, ..Default::default() });
        assert_eq!(editor.palette.selected(), Some((TileCategory::Decor, 1)));

        editor.update(&EditorInput { wheel: -1, ..Default::default() });
        assert_eq!(editor.palette.selected(), Some((TileCategory::LargeDecor, 0)));
    }

    #[test]
    fn pans_two_pixels_per_frame() {
        let dir = tempdir().unwrap();
        let mut editor = Editor::new(dir.path(), 16, palette());
        for _ in 0..3 {
            editor.update(&EditorInput { pan: vec2(1.0, -1.0), ..Default::default() });
        }
        assert_eq!(editor.scroll, vec2(6.0, -6.0));
    }

    #[test]
    fn save_then_reopen() {
        let dir = tempdir().unwrap();
        let mut editor = Editor::new(dir.path(), 16, palette());
        editor.update(&click(vec2(40.0, 40.0)));
        editor.update(&EditorInput { mouse: vec2(8.0, 8.0), set_spawn: true, ..Default::default() });
        editor.update(&EditorInput { save: true, ..Default::default() });
        assert!(map_path(dir.path(), 0).exists());

        let reopened = Editor::new(dir.path(), 16, palette());
        assert_eq!(reopened.map_number, 1);

        let mut editor = Editor::new(dir.path(), 16, palette());
        editor.load_map(0).unwrap();
        assert_eq!(editor.map_number, 0);
        assert!(editor.store.get(GridPos::new(2, 2)).is_some());
        assert_eq!(editor.store.spawn_point(), Some(GridPos::new(0, 0)));
    }

    #[test]
    fn new_map_key_starts_after_the_saved_maps() {
        let dir = tempdir().unwrap();
        let mut editor = Editor::new(dir.path(), 16, palette());
        editor.update(&click(vec2(40.0, 40.0)));
        editor.save_map().unwrap();

        editor.update(&EditorInput { new_map: true, ..Default::default() });

        assert_eq!(editor.map_number, 1);
        assert!(editor.store.is_empty());
        assert_eq!(editor.store.spawn_point(), None);
    }

    #[test]
    fn malformed_maps_are_refused() {
        let dir = tempdir().unwrap();
        fs::write(map_path(dir.path(), 0), r#"{"tile_size": 0, "tilemap": {}}"#).unwrap();
        let mut editor = Editor::new(dir.path(), 16, palette());
        editor.update(&click(vec2(40.0, 40.0)));

        let err = editor.load_map(0).unwrap_err();

        assert!(matches!(err, MapError::Malformed { .. }));
        assert_eq!(editor.map_number, 1);
        assert_eq!(editor.store.len(), 1);
    }

    #[test]
    fn opening_over_a_malformed_map_starts_empty() {
        let dir = tempdir().unwrap();
        TileStore::new(16).save(map_path(dir.path(), 0)).unwrap();
        fs::write(map_path(dir.path(), 2), "{ not json").unwrap();

        let editor = Editor::new(dir.path(), 16, palette());

        assert_eq!(editor.map_number, 2);
        assert!(editor.store.is_empty());
        assert_eq!(editor.store.tile_size(), 16);
    }

    #[test]
    fn autotile_key_fixes_variants() {
        let dir = tempdir().unwrap();
        let mut editor = Editor::new(dir.path(), 16, palette());
        editor.update(&EditorInput { wheel: 1, ..Default::default() });
        for y in 0..2 {
            for x in 0..3 {
                editor.update(&click(vec2(x as f32 * 16.0 + 1.0, y as f32 * 16.0 + 1.0)));
            }
        }

        editor.update(&EditorInput { autotile: true, ..Default::default() });

        let row = |y: i32| -> Vec<u32> {
            (0..3)
                .map(|x| editor.store.get(GridPos::new(x, y)).unwrap().variant)
                .collect()
        };
        assert_eq!(row(0), vec![0, 1, 2]);
        assert_eq!(row(1), vec![6, 5, 4]);
    }
}
