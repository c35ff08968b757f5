// engine_core/src/tiles/tilemap.rs
use std::collections::HashMap;
use macroquad::prelude::*;
use crate::tiles::tile::{GridPos, OffgridTile, Tile, TileCategory};

/// Offsets of the 3x3 block around a cell, row by row.
const AROUND_OFFSETS: [(i32, i32); 9] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0), (0, 0), (1, 0),
    (-1, 1), (0, 1), (1, 1),
];

/// Sparse tile storage shared by the game and the editor.
#[derive(Debug, Clone, PartialEq)]
pub struct TileStore {
    tile_size: u32,
    pub(crate) tiles: HashMap<GridPos, Tile>,
    pub(crate) offgrid: Vec<OffgridTile>,
    pub(crate) spawn_point: Option<GridPos>,
}

impl TileStore {
    pub fn new(tile_size: u32) -> Self {
        Self {
            tile_size,
            tiles: HashMap::new(),
            offgrid: Vec::new(),
            spawn_point: None,
        }
    }

    pub(crate) fn from_parts(
        tile_size: u32,
        tiles: HashMap<GridPos, Tile>,
        offgrid: Vec<OffgridTile>,
        spawn_point: Option<GridPos>,
    ) -> Self {
        Self { tile_size, tiles, offgrid, spawn_point }
    }

    /// Pixel edge length of one grid cell.
    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    fn tile_size_px(&self) -> f32 {
        self.tile_size as f32
    }

    /// Insert a tile at a grid coordinate, replacing whatever was there.
    pub fn set(&mut self, position: GridPos, category: TileCategory, variant: u32) {
        self.tiles.insert(position, Tile::new(position, category, variant));
    }

    /// Remove the tile at a grid coordinate, if any.
    pub fn remove(&mut self, position: GridPos) -> Option<Tile> {
        self.tiles.remove(&position)
    }

    /// Retrieve a tile, returning `None` for empty cells.
    pub fn get(&self, position: GridPos) -> Option<&Tile> {
        self.tiles.get(&position)
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.values()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty() && self.offgrid.is_empty()
    }

    pub fn offgrid(&self) -> &[OffgridTile] {
        &self.offgrid
    }

    pub fn push_offgrid(&mut self, tile: OffgridTile) {
        self.offgrid.push(tile);
    }

    /// Keep only the free-floating tiles for which `keep` returns true.
    pub fn retain_offgrid<F>(&mut self, keep: F)
    where
        F: FnMut(&OffgridTile) -> bool,
    {
        self.offgrid.retain(keep);
    }

    pub fn spawn_point(&self) -> Option<GridPos> {
        self.spawn_point
    }

    pub fn set_spawn_point(&mut self, spawn_point: Option<GridPos>) {
        self.spawn_point = spawn_point;
    }

    /// Drops every tile and the spawn point. The tile size is kept.
    pub fn clear(&mut self) {
        self.tiles.clear();
        self.offgrid.clear();
        self.spawn_point = None;
    }

    pub fn pixel_to_grid(&self, pixel: Vec2) -> GridPos {
        let size = self.tile_size_px();
        GridPos::new((pixel.x / size).floor() as i32, (pixel.y / size).floor() as i32)
    }

    pub fn grid_to_pixel(&self, position: GridPos) -> Vec2 {
        vec2(position.x() as f32, position.y() as f32) * self.tile_size_px()
    }

    /// Tiles in the eight cells surrounding `position`.
    pub fn get_neighbors(&self, position: GridPos) -> Vec<&Tile> {
        AROUND_OFFSETS
            .iter()
            .filter(|&&offset| offset != (0, 0))
            .filter_map(|&(dx, dy)| self.tiles.get(&position.offset(dx, dy)?))
            .collect()
    }

    /// Tiles in the 3x3 block centred on the cell containing `pixel`.
    pub fn tiles_around(&self, pixel: Vec2) -> Vec<&Tile> {
        let center = self.pixel_to_grid(pixel);
        AROUND_OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| self.tiles.get(&center.offset(dx, dy)?))
            .collect()
    }

    /// Pull every tile matching `filters` out of the store as pixel-positioned
    /// markers. With `keep` the tiles are copied instead of removed.
    ///
    /// Free-floating matches come first in list order, followed by grid
    /// matches ordered by row then column.
    pub fn extract(&mut self, filters: &[(TileCategory, u32)], keep: bool) -> Vec<OffgridTile> {
        let mut matches: Vec<OffgridTile> = self
            .offgrid
            .iter()
            .filter(|tile| tile.matches(filters))
            .copied()
            .collect();

        if !keep {
            self.offgrid.retain(|tile| !tile.matches(filters));
        }

        let mut grid_hits: Vec<GridPos> = self
            .tiles
            .values()
            .filter(|tile| tile.matches(filters))
            .map(|tile| tile.grid_position)
            .collect();
        grid_hits.sort_by_key(|pos| (pos.y(), pos.x()));

        for pos in grid_hits {
            let tile = if keep {
                self.tiles.get(&pos).copied()
            } else {
                self.tiles.remove(&pos)
            };

            if let Some(tile) = tile {
                matches.push(OffgridTile::new(
                    self.grid_to_pixel(pos),
                    tile.category,
                    tile.variant,
                ));
            }
        }

        matches
    }

    /// Whether a solid tile occupies the cell containing `pixel`.
    pub fn solid_check(&self, pixel: Vec2) -> bool {
        self.tiles
            .get(&self.pixel_to_grid(pixel))
            .is_some_and(|tile| tile.is_solid())
    }

    /// Cell-sized rectangles for every solid tile around `pixel`.
    pub fn physics_rects_around(&self, pixel: Vec2) -> Vec<Rect> {
        let size = self.tile_size_px();
        self.tiles_around(pixel)
            .into_iter()
            .filter(|tile| tile.is_solid())
            .map(|tile| {
                let origin = self.grid_to_pixel(tile.grid_position);
                Rect::new(origin.x, origin.y, size, size)
            })
            .collect()
    }
}
