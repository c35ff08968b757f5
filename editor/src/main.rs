// editor/src/main.rs
use engine_core::assets::asset_manager::load_tile_images;
use engine_core::constants::{WINDOW_HEIGHT, WINDOW_WIDTH};
use engine_core::logging::logging::init_file_logger;
use engine_core::rendering::screen_surface::ScreenSurface;
use engine_core::storage::engine_config::engine_config;
use macroquad::prelude::*;
use crate::controls::editor_input::EditorInput;
use crate::editor::Editor;
use crate::tilemap::tile_palette::TilePalette;

mod controls;
mod editor;
mod tilemap;

fn window_conf() -> Conf {
    Conf {
        window_title: "Eclipse Editor".to_owned(),
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Dropping the handle stops the logger
    let _logger = init_file_logger("editor")
        .map_err(|e| eprintln!("Could not start the file logger: {e}"))
        .ok();

    let config = engine_config();
    let images = load_tile_images(&config.images_dir, config.tile_size).await;
    let palette = TilePalette::from_images(&images, |texture| texture.size());
    let mut surface = ScreenSurface::new(config.render_scale);

    let mut editor = Editor::new(&config.maps_dir, config.tile_size, palette);
    log::info!("Editing maps in {}.", editor.maps_dir().display());

    loop {
        let input = EditorInput::capture(surface.scale);
        editor.update(&input);
        editor.draw(&mut surface, &images);
        next_frame().await
    }
}
