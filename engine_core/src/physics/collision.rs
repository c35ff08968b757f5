// engine_core/src/physics/collision.rs
use macroquad::prelude::*;
use crate::tiles::tilemap::TileStore;

/// Physical state of something moving through the tilemap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovingRect {
    /// Top-left corner in pixels.
    pub position: Vec2,
    pub size: Vec2,
    pub velocity: Vec2,
}

impl MovingRect {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self { position, size, velocity: Vec2::ZERO }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.size.x, self.size.y)
    }
}

/// Sides that hit a solid tile this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Collisions {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Collisions {
    /// A downward collision was resolved.
    pub fn grounded(&self) -> bool {
        self.down
    }

    pub fn horizontal(&self) -> bool {
        self.left || self.right
    }

    pub fn vertical(&self) -> bool {
        self.up || self.down
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    X,
    Y,
}

/// Strict overlap; rectangles that only share an edge do not collide.
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.w && a.x + a.w > b.x && a.y < b.y + b.h && a.y + a.h > b.y
}

/// Resolve a single axis after the body has already been moved along it.
fn resolve_axis(
    store: &TileStore,
    body: &mut MovingRect,
    delta: f32,
    axis: Axis,
    collisions: &mut Collisions,
) {
    // No movement
    if delta == 0.0 {
        return;
    }

    let mut rect = body.rect();

    for solid in store.physics_rects_around(body.position) {
        if !overlaps(&rect, &solid) {
            continue;
        }

        match (axis, delta > 0.0) {
            (Axis::X, true) => {
                rect.x = solid.x - rect.w;
                collisions.right = true;
            }
            (Axis::X, false) => {
                rect.x = solid.x + solid.w;
                collisions.left = true;
            }
            (Axis::Y, true) => {
                rect.y = solid.y - rect.h;
                collisions.down = true;
            }
            (Axis::Y, false) => {
                rect.y = solid.y + solid.h;
                collisions.up = true;
            }
        }
    }

    match axis {
        Axis::X => body.position.x = rect.x,
        Axis::Y => body.position.y = rect.y,
    }
}

/// Move `body` by `displacement`, resolving X fully before Y.
///
/// Velocity on an axis is zeroed whenever that axis collides, including
/// glancing contacts. A displacement larger than a tile can skip over thin
/// geometry.
pub fn move_and_collide(
    store: &TileStore,
    body: &mut MovingRect,
    displacement: Vec2,
) -> Collisions {
    let mut collisions = Collisions::default();

    body.position.x += displacement.x;
    resolve_axis(store, body, displacement.x, Axis::X, &mut collisions);

    body.position.y += displacement.y;
    resolve_axis(store, body, displacement.y, Axis::Y, &mut collisions);

    if collisions.horizontal() {
        body.velocity.x = 0.0;
    }
    if collisions.vertical() {
        body.velocity.y = 0.0;
    }

    collisions
}
