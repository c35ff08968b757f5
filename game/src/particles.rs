// game/src/particles.rs
use std::f32::consts::PI;
use macroquad::prelude::*;
use ::rand::Rng;
use crate::constants::*;

/// A falling leaf.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leaf {
    pub position: Vec2,
    pub frame: u32,
}

impl Leaf {
    pub fn new(position: Vec2, frame: u32) -> Self {
        Self { position, frame }
    }

    /// Drifts one frame. Returns true once the leaf has lived out its time.
    pub fn update(&mut self) -> bool {
        self.frame += 1;
        self.position += LEAF_VELOCITY;
        self.position.x += (self.frame as f32 * LEAF_SWAY_RATE).sin() * LEAF_SWAY;
        self.frame >= LEAF_LIFETIME
    }
}

/// Rolls for a new leaf in each zone. Bigger zones shed more often.
pub fn spawn_leaves<R: Rng>(zones: &[Rect], rng: &mut R, leaves: &mut Vec<Leaf>) {
    for zone in zones {
        if rng.gen::<f32>() * LEAF_SPAWN_DIVISOR < zone.w * zone.h {
            let position = vec2(
                zone.x + rng.gen::<f32>() * zone.w,
                zone.y + rng.gen::<f32>() * zone.h,
            );
            leaves.push(Leaf::new(position, rng.gen_range(0..=20)));
        }
    }
}

/// A streak that flies straight and slows to a stop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spark {
    pub position: Vec2,
    /// Heading in radians.
    pub angle: f32,
    pub speed: f32,
}

impl Spark {
    pub fn new(position: Vec2, angle: f32, speed: f32) -> Self {
        Self { position, angle, speed }
    }

    /// Returns true once the spark has stopped.
    pub fn update(&mut self) -> bool {
        self.position += Vec2::from_angle(self.angle) * self.speed;
        self.speed = (self.speed - SPARK_DECELERATION).max(0.0);
        self.speed == 0.0
    }

    /// Tip and tail of the streak, for drawing.
    pub fn streak(&self) -> (Vec2, Vec2) {
        let heading = Vec2::from_angle(self.angle);
        (
            self.position + heading * self.speed * SPARK_LENGTH,
            self.position - heading * self.speed * SPARK_LENGTH / 2.0,
        )
    }
}

/// A puff of debris drifting away from a hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Puff {
    pub position: Vec2,
    pub velocity: Vec2,
    pub frame: u32,
}

impl Puff {
    pub fn new(position: Vec2, velocity: Vec2) -> Self {
        Self { position, velocity, frame: 0 }
    }

    /// Returns true once the puff has faded.
    pub fn update(&mut self) -> bool {
        self.position += self.velocity;
        self.frame += 1;
        self.frame >= PUFF_LIFETIME
    }
}

/// Sparks bouncing back off a wall a projectile flew into.
pub fn wall_sparks<R: Rng>(position: Vec2, travel: f32, rng: &mut R, sparks: &mut Vec<Spark>) {
    let back = if travel > 0.0 { PI } else { 0.0 };
    sparks.extend((0..WALL_SPARKS).map(|_| {
        Spark::new(position, rng.gen::<f32>() - 0.5 + back, 2.0 + rng.gen::<f32>())
    }));
}

/// Sparks and debris flying out in every direction from `center`.
pub fn burst<R: Rng>(center: Vec2, rng: &mut R, sparks: &mut Vec<Spark>, puffs: &mut Vec<Puff>) {
    for _ in 0..BURST_SIZE {
        let angle = rng.gen::<f32>() * PI * 2.0;
        let speed = rng.gen::<f32>() * PUFF_MAX_SPEED;
        sparks.push(Spark::new(center, angle, 2.0 + rng.gen::<f32>()));
        puffs.push(Puff::new(center, Vec2::from_angle(angle + PI) * speed * 0.5));
    }
}

/// Draw offset for a screenshake of `strength` frames.
pub fn shake_offset<R: Rng>(strength: u32, rng: &mut R) -> Vec2 {
    if strength == 0 {
        return Vec2::ZERO;
    }
    let s = strength as f32;
    vec2(rng.gen::<f32>() * s - s / 2.0, rng.gen::<f32>() * s - s / 2.0)
}
