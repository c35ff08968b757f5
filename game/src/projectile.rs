// game/src/projectile.rs
use engine_core::tiles::tilemap::TileStore;
use macroquad::prelude::*;
use crate::constants::*;
use crate::entity::Player;

/// What happened to a projectile this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectileOutcome {
    Flying,
    HitWall,
    Expired,
    HitPlayer,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    /// Centre of the projectile.
    pub position: Vec2,
    /// Horizontal pixels per frame.
    pub speed: f32,
    /// Frames since it was fired.
    pub age: u32,
}

impl Projectile {
    pub fn new(position: Vec2, speed: f32) -> Self {
        Self { position, speed, age: 0 }
    }

    /// Moves one frame. A dashing player is not hit.
    pub fn update(&mut self, store: &TileStore, player: Option<&Player>) -> ProjectileOutcome {
        self.position.x += self.speed;
        self.age += 1;

        if store.solid_check(self.position) {
            ProjectileOutcome::HitWall
        } else if self.age > PROJECTILE_LIFETIME {
            ProjectileOutcome::Expired
        } else if player.is_some_and(|p| !p.is_dashing() && p.rect().contains(self.position)) {
            ProjectileOutcome::HitPlayer
        } else {
            ProjectileOutcome::Flying
        }
    }

    pub fn rect(&self) -> Rect {
        let corner = self.position - PROJECTILE_SIZE / 2.0;
        Rect::new(corner.x, corner.y, PROJECTILE_SIZE.x, PROJECTILE_SIZE.y)
    }
}
