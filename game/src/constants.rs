// game/src/constants.rs
use macroquad::prelude::*;

/// Size of the player and enemy hitboxes.
pub const ENTITY_SIZE: Vec2 = vec2(8.0, 15.0);
/// Where the player starts when a map has neither a spawn point nor a player spawner.
pub const DEFAULT_PLAYER_POSITION: Vec2 = vec2(50.0, 50.0);

pub const GRAVITY: f32 = 0.1;
pub const MAX_FALL_SPEED: f32 = 5.0;
pub const FRICTION: f32 = 0.1;

pub const JUMP_VELOCITY: f32 = -3.0;
pub const WALL_JUMP_VELOCITY: Vec2 = vec2(3.5, -2.5);
pub const WALL_SLIDE_SPEED: f32 = 0.5;
/// Air time needed before touching a wall turns into a wall slide.
pub const WALL_SLIDE_AIR_TIME: u32 = 4;
/// Air time after a jump, so a wall slide can start right away.
pub const JUMP_AIR_TIME: u32 = 5;
/// Frames of free fall after which the player dies.
pub const FATAL_AIR_TIME: u32 = 120;

pub const DASH_FRAMES: i32 = 60;
/// The dash moves at full speed while its counter is above this.
pub const DASH_ACTIVE_ABOVE: i32 = 50;
pub const DASH_SPEED: f32 = 8.0;
pub const DASH_END_DAMPING: f32 = 0.1;

pub const ENEMY_WALK_SPEED: f32 = 0.5;
pub const ENEMY_WALK_CHANCE: f64 = 0.01;
pub const ENEMY_WALK_FRAMES: std::ops::RangeInclusive<u32> = 30..=120;
/// Ledge probe offsets from the enemy's centre and top.
pub const LEDGE_PROBE: Vec2 = vec2(7.0, 23.0);
/// Vertical distance within which an enemy shoots at the player.
pub const SHOOT_RANGE_Y: f32 = 16.0;

pub const PROJECTILE_SPEED: f32 = 1.5;
pub const PROJECTILE_MUZZLE: f32 = 7.0;
pub const PROJECTILE_LIFETIME: u32 = 360;
pub const PROJECTILE_SIZE: Vec2 = vec2(5.0, 2.0);

/// Leaf zone layout relative to a tree's top-left corner.
pub const LEAF_ZONE: Rect = Rect { x: 4.0, y: 4.0, w: 23.0, h: 13.0 };
pub const LEAF_SPAWN_DIVISOR: f32 = 49999.0;
pub const LEAF_VELOCITY: Vec2 = vec2(-0.1, 0.3);
pub const LEAF_LIFETIME: u32 = 360;
pub const LEAF_SWAY: f32 = 0.3;
pub const LEAF_SWAY_RATE: f32 = 0.035;
pub const LEAF_SIZE: Vec2 = vec2(3.0, 2.0);

pub const SPARK_DECELERATION: f32 = 0.1;
/// Streak length per unit of speed.
pub const SPARK_LENGTH: f32 = 3.0;
pub const WALL_SPARKS: usize = 4;
/// Sparks and puffs each in a hit burst.
pub const BURST_SIZE: usize = 30;
/// Extra sparks thrown sideways when an enemy dies.
pub const DEATH_SPARK_SPEED: f32 = 5.0;
pub const PUFF_MAX_SPEED: f32 = 5.0;
pub const PUFF_LIFETIME: u32 = 24;
pub const PUFF_SIZE: Vec2 = vec2(2.0, 2.0);
/// Screenshake frames after a hit. Also the shake amplitude in pixels.
pub const SCREENSHAKE_HIT: u32 = 16;

/// Fraction of the remaining distance the camera covers each frame.
pub const CAMERA_EASING: f32 = 1.0 / 30.0;

/// Frames of fade before and after a level change.
pub const TRANSITION_FRAMES: i32 = 30;
/// Frames after death before the fade starts.
pub const DEATH_FADE_DELAY: u32 = 10;
/// Frames after death before the level reloads.
pub const DEATH_RELOAD_DELAY: u32 = 40;
pub const STARTING_LIVES: u32 = 3;

pub const PLAYER_COLOR: Color = Color::new(0.95, 0.95, 1.0, 1.0);
pub const DASH_COLOR: Color = Color::new(0.55, 0.75, 1.0, 1.0);
pub const ENEMY_COLOR: Color = Color::new(0.85, 0.2, 0.25, 1.0);
pub const PROJECTILE_COLOR: Color = Color::new(1.0, 0.9, 0.4, 1.0);
pub const LEAF_COLOR: Color = Color::new(0.35, 0.7, 0.3, 1.0);
pub const SPARK_COLOR: Color = WHITE;
pub const PUFF_COLOR: Color = Color::new(0.9, 0.85, 0.8, 0.8);
pub const BACKGROUND_COLOR: Color = Color::new(0.35, 0.55, 0.75, 1.0);
