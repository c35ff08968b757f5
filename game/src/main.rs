// game/src/main.rs
use engine_core::assets::asset_manager::load_tile_images;
use engine_core::constants::{WINDOW_HEIGHT, WINDOW_WIDTH};
use engine_core::logging::logging::init_file_logger;
use engine_core::onscreen_error;
use engine_core::rendering::render_tilemap::Surface;
use engine_core::rendering::screen_surface::ScreenSurface;
use engine_core::storage::engine_config::engine_config;
use game_lib::game_state::GameState;
use game_lib::input::input_snapshot::InputSnapshot;
use macroquad::prelude::*;

fn window_conf() -> Conf {
    Conf {
        window_title: "Enemy Eclipse".to_owned(),
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Dropping the handle stops the logger
    let _logger = init_file_logger("game")
        .map_err(|e| eprintln!("Could not start the file logger: {e}"))
        .ok();

    let config = engine_config();
    let images = load_tile_images(&config.images_dir, config.tile_size).await;
    let mut surface = ScreenSurface::new(config.render_scale);

    let mut game = match GameState::new(&config.maps_dir, config.tile_size, surface.size()) {
        Ok(game) => game,
        Err(e) => {
            onscreen_error!("Could not start the game: {e}");
            return;
        }
    };

    loop {
        let input = InputSnapshot::capture();
        if let Err(e) = game.update(&input) {
            onscreen_error!("Could not load the next level: {e}");
            break;
        }

        game.draw(&mut surface, &images);
        next_frame().await;
    }
}
