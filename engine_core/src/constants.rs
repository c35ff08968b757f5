// engine_core/src/constants.rs

/// Tile size used when a map does not say otherwise.
pub const DEFAULT_TILE_SIZE: u32 = 16;

/// Screen pixels per display pixel.
pub const DEFAULT_RENDER_SCALE: f32 = 2.0;

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Folder holding the numbered map files.
pub const DEFAULT_MAPS_DIR: &str = "data/maps";

/// Folder holding one sub-folder of images per tile category.
pub const DEFAULT_IMAGES_DIR: &str = "data/images/tiles";

/// Extension of map files.
pub const MAP_EXTENSION: &str = "json";

/// Name of the config .ron file.
pub const CONFIG_RON: &str = "config.ron";

/// Window size in screen pixels.
pub const WINDOW_WIDTH: i32 = 640;
pub const WINDOW_HEIGHT: i32 = 480;
