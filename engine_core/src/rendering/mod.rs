pub mod render_tilemap;
pub mod screen_surface;
