// game/src/game_state.rs
use std::path::PathBuf;
use engine_core::assets::tile_images::TileImages;
use engine_core::onscreen_info;
use engine_core::rendering::render_tilemap::Surface;
use engine_core::rendering::screen_surface::ScreenSurface;
use engine_core::storage::map_storage::MapError;
use engine_core::storage::path_utils::{count_maps, map_path};
use engine_core::tiles::tilemap::TileStore;
use macroquad::prelude::*;
use ::rand::rngs::StdRng;
use ::rand::{Rng, SeedableRng};
use crate::camera::GameCamera;
use crate::constants::*;
use crate::input::input_snapshot::InputSnapshot;
use crate::level::Level;
use crate::particles::{burst, shake_offset, spawn_leaves, wall_sparks, Leaf, Puff, Spark};
use crate::projectile::{Projectile, ProjectileOutcome};

/// Top level orchestrator of the game.
pub struct GameState {
    maps_dir: PathBuf,
    /// Number of the loaded map file.
    pub level_number: usize,
    pub store: TileStore,
    pub level: Level,
    pub projectiles: Vec<Projectile>,
    pub leaves: Vec<Leaf>,
    pub sparks: Vec<Spark>,
    pub puffs: Vec<Puff>,
    /// Screenshake frames left.
    pub screenshake: u32,
    /// Draw offset of the current shake.
    shake: Vec2,
    pub camera: GameCamera,
    /// Frames since the player died, 0 while alive.
    pub dead: u32,
    /// Fade counter. Negative while fading in, positive while fading out.
    pub transition: i32,
    pub lives: u32,
    rng: StdRng,
}

impl GameState {
    /// Loads map 0 from `maps_dir`. `view_size` is the visible area in display pixels.
    pub fn new(maps_dir: impl Into<PathBuf>, tile_size: u32, view_size: Vec2) -> Result<Self, MapError> {
        Self::with_rng(maps_dir, tile_size, view_size, StdRng::from_entropy())
    }

    pub fn with_rng(
        maps_dir: impl Into<PathBuf>,
        tile_size: u32,
        view_size: Vec2,
        rng: StdRng,
    ) -> Result<Self, MapError> {
        let mut store = TileStore::new(tile_size);
        let level = Level::from_store(&mut store);

        let mut state = Self {
            maps_dir: maps_dir.into(),
            level_number: 0,
            store,
            level,
            projectiles: Vec::new(),
            leaves: Vec::new(),
            sparks: Vec::new(),
            puffs: Vec::new(),
            screenshake: 0,
            shake: Vec2::ZERO,
            camera: GameCamera::new(view_size),
            dead: 0,
            transition: -TRANSITION_FRAMES,
            lives: STARTING_LIVES,
            rng,
        };
        state.load_level(0)?;
        Ok(state)
    }

    /// Loads map `number` and resets everything on it. A missing map file
    /// gives an empty level.
    pub fn load_level(&mut self, number: usize) -> Result<(), MapError> {
        self.store.load_or_empty(map_path(&self.maps_dir, number))?;

        self.level = Level::from_store(&mut self.store);
        self.level_number = number;
        self.projectiles.clear();
        self.leaves.clear();
        self.sparks.clear();
        self.puffs.clear();
        self.screenshake = 0;
        self.shake = Vec2::ZERO;
        self.camera = GameCamera::new(self.camera.view_size);
        self.dead = 0;
        self.transition = -TRANSITION_FRAMES;

        onscreen_info!("Level {} loaded.", number + 1);
        Ok(())
    }

    /// Steps the game one frame.
    pub fn update(&mut self, input: &InputSnapshot) -> Result<(), MapError> {
        self.screenshake = self.screenshake.saturating_sub(1);

        if self.level.enemies.is_empty() {
            self.transition += 1;
            if self.transition > TRANSITION_FRAMES {
                let last = count_maps(&self.maps_dir).saturating_sub(1);
                return self.load_level((self.level_number + 1).min(last));
            }
        }

        if self.transition < 0 {
            self.transition += 1;
        }

        if self.dead > 0 {
            self.dead += 1;
            if self.dead >= DEATH_FADE_DELAY {
                self.transition = (self.transition + 1).min(TRANSITION_FRAMES);
            }
            if self.dead > DEATH_RELOAD_DELAY {
                return self.respawn();
            }
        }

        self.camera.follow(self.level.player.entity.center());
        spawn_leaves(&self.level.leaf_zones, &mut self.rng, &mut self.leaves);

        self.update_enemies();

        if self.dead == 0 {
            let player = &mut self.level.player;
            if input.jump {
                player.jump();
            }
            if input.dash {
                player.dash();
            }
            if player.update(&self.store, vec2(input.horizontal(), 0.0)) {
                self.kill_player("fell");
            }
        }

        self.update_projectiles();
        self.leaves.retain_mut(|leaf| !leaf.update());
        self.sparks.retain_mut(|spark| !spark.update());
        self.puffs.retain_mut(|puff| !puff.update());
        self.shake = shake_offset(self.screenshake, &mut self.rng);

        Ok(())
    }

    fn update_enemies(&mut self) {
        let store = &self.store;
        let player = &self.level.player;
        let rng = &mut self.rng;
        let projectiles = &mut self.projectiles;

        let mut killed = Vec::new();
        self.level.enemies.retain_mut(|enemy| {
            let hit = enemy.update(store, player, rng, projectiles);
            if hit {
                killed.push(enemy.entity.center());
            }
            !hit
        });

        if killed.is_empty() {
            return;
        }
        log::debug!("{} enemy killed, {} left.", killed.len(), self.level.enemies.len());

        self.shake_screen(SCREENSHAKE_HIT);
        for center in killed {
            burst(center, &mut self.rng, &mut self.sparks, &mut self.puffs);
            for angle in [0.0, std::f32::consts::PI] {
                let speed = DEATH_SPARK_SPEED + self.rng.gen::<f32>();
                self.sparks.push(Spark::new(center, angle, speed));
            }
        }
    }

    fn update_projectiles(&mut self) {
        let store = &self.store;
        let player = (self.dead == 0).then_some(&self.level.player);

        let rng = &mut self.rng;
        let sparks = &mut self.sparks;

        let mut hit = false;
        self.projectiles.retain_mut(|projectile| match projectile.update(store, player) {
            ProjectileOutcome::Flying => true,
            ProjectileOutcome::HitWall => {
                wall_sparks(projectile.position, projectile.speed, rng, sparks);
                false
            }
            ProjectileOutcome::HitPlayer => {
                hit = true;
                false
            }
            ProjectileOutcome::Expired => false,
        });

        if hit {
            self.kill_player("shot");
            self.shake_screen(SCREENSHAKE_HIT);
            let center = self.level.player.entity.center();
            burst(center, &mut self.rng, &mut self.sparks, &mut self.puffs);
        }
    }

    /// Starts a screenshake unless a stronger one is running.
    fn shake_screen(&mut self, strength: u32) {
        self.screenshake = self.screenshake.max(strength);
    }

    fn kill_player(&mut self, cause: &str) {
        if self.dead == 0 {
            self.dead = 1;
            log::info!("Player {cause} on level {}.", self.level_number + 1);
        }
    }

    /// Reloads the current level, or starts over once the lives run out.
    fn respawn(&mut self) -> Result<(), MapError> {
        self.lives = self.lives.saturating_sub(1);
        if self.lives > 0 {
            return self.load_level(self.level_number);
        }

        onscreen_info!("Out of lives. Back to the first level.");
        self.lives = STARTING_LIVES;
        self.load_level(0)
    }

    pub fn draw(&self, surface: &mut ScreenSurface, images: &TileImages<Texture2D>) {
        clear_background(BACKGROUND_COLOR);

        let offset = self.camera.offset() - self.shake;
        self.store.render(surface, images, offset);

        let shift = |rect: Rect| rect.offset(-offset);

        for leaf in &self.leaves {
            let rect = Rect::new(leaf.position.x, leaf.position.y, LEAF_SIZE.x, LEAF_SIZE.y);
            surface.draw_rect(shift(rect), LEAF_COLOR);
        }

        for enemy in &self.level.enemies {
            surface.draw_rect(shift(enemy.rect()), ENEMY_COLOR);
        }

        if self.dead == 0 {
            let player = &self.level.player;
            let color = if player.is_dashing() { DASH_COLOR } else { PLAYER_COLOR };
            surface.draw_rect(shift(player.rect()), color);
        }

        for projectile in &self.projectiles {
            surface.draw_rect(shift(projectile.rect()), PROJECTILE_COLOR);
        }

        for spark in &self.sparks {
            let (tip, tail) = spark.streak();
            surface.draw_line(tip - offset, tail - offset, SPARK_COLOR);
        }

        for puff in &self.puffs {
            let rect = Rect::new(puff.position.x, puff.position.y, PUFF_SIZE.x, PUFF_SIZE.y);
            surface.draw_rect(shift(rect), PUFF_COLOR);
        }

        if self.transition != 0 {
            let fade = (self.transition.abs() as f32 / TRANSITION_FRAMES as f32).min(1.0);
            let view = surface.size();
            surface.draw_rect(Rect::new(0.0, 0.0, view.x, view.y), Color::new(0.0, 0.0, 0.0, fade));
        }

        let status = format!("Level {}   Lives {}", self.level_number + 1, self.lives);
        surface.draw_text(&status, vec2(8.0, 14.0), WHITE);
    }
}
