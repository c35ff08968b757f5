// engine_core/src/rendering/render_tilemap.rs
use macroquad::prelude::*;
use crate::assets::tile_images::TileImages;
use crate::tiles::tile::GridPos;
use crate::tiles::tilemap::TileStore;

/// Something tiles can be drawn onto.
pub trait Surface {
    type Image;

    /// Visible area in display pixels.
    fn size(&self) -> Vec2;

    /// Draw `image` with its top-left corner at `position`.
    fn blit(&mut self, image: &Self::Image, position: Vec2);
}

impl TileStore {
    /// Draws the free-floating tiles, then every grid tile inside the
    /// visible area. `offset` is the camera scroll in pixels.
    pub fn render<S: Surface>(
        &self,
        surface: &mut S,
        images: &TileImages<S::Image>,
        offset: Vec2,
    ) {
        for tile in self.offgrid() {
            if let Some(image) = images.get(tile.category, tile.variant) {
                surface.blit(image, tile.pixel_position - offset);
            }
        }

        let first = self.pixel_to_grid(offset);
        let last = self.pixel_to_grid(offset + surface.size());

        for x in first.x()..=last.x() {
            for y in first.y()..=last.y() {
                let Some(tile) = self.get(GridPos::new(x, y)) else { continue };
                if let Some(image) = images.get(tile.category, tile.variant) {
                    surface.blit(image, self.grid_to_pixel(tile.grid_position) - offset);
                }
            }
        }
    }
}
