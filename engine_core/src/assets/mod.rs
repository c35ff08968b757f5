pub mod asset_manager;
pub mod tile_images;
