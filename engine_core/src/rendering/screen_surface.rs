// engine_core/src/rendering/screen_surface.rs
use macroquad::prelude::*;
use crate::rendering::render_tilemap::Surface;

/// The window, drawn at a fixed integer-ish scale.
pub struct ScreenSurface {
    /// Screen pixels per display pixel.
    pub scale: f32,
}

impl ScreenSurface {
    pub fn new(scale: f32) -> Self {
        Self { scale: scale.max(1.0) }
    }

    /// Untextured rectangle in display pixels.
    pub fn draw_rect(&mut self, rect: Rect, color: Color) {
        draw_rectangle(
            rect.x * self.scale,
            rect.y * self.scale,
            rect.w * self.scale,
            rect.h * self.scale,
            color,
        );
    }

    pub fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color) {
        let (from, to) = (from * self.scale, to * self.scale);
        draw_line(from.x, from.y, to.x, to.y, self.scale, color);
    }

    pub fn draw_text(&mut self, text: &str, position: Vec2, color: Color) {
        draw_text(text, position.x * self.scale, position.y * self.scale, 10.0 * self.scale, color);
    }
}

impl Surface for ScreenSurface {
    type Image = Texture2D;

    fn size(&self) -> Vec2 {
        vec2(screen_width(), screen_height()) / self.scale
    }

    fn blit(&mut self, image: &Texture2D, position: Vec2) {
        draw_texture_ex(
            image,
            (position.x * self.scale).floor(),
            (position.y * self.scale).floor(),
            WHITE,
            DrawTextureParams {
                dest_size: Some(image.size() * self.scale),
                ..Default::default()
            },
        );
    }
}
