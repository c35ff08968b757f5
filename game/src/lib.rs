pub mod camera;
pub mod constants;
pub mod entity;
pub mod game_state;
pub mod input;
pub mod level;
pub mod particles;
pub mod projectile;
