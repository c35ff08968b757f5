pub mod autotile;
pub mod tile;
pub mod tilemap;
