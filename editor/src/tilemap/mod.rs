pub mod tile_palette;
