// game/src/camera.rs
use macroquad::prelude::*;
use crate::constants::CAMERA_EASING;

/// Scroll that eases toward whatever it follows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameCamera {
    /// Top-left of the view in world pixels.
    pub scroll: Vec2,
    /// Visible area in display pixels.
    pub view_size: Vec2,
}

impl GameCamera {
    pub fn new(view_size: Vec2) -> Self {
        Self { scroll: Vec2::ZERO, view_size }
    }

    /// Moves a fraction of the way toward centring `target`.
    pub fn follow(&mut self, target: Vec2) {
        let wanted = target - self.view_size / 2.0;
        self.scroll += (wanted - self.scroll) * CAMERA_EASING;
    }

    /// Whole-pixel scroll used for drawing.
    pub fn offset(&self) -> Vec2 {
        self.scroll.trunc()
    }
}
