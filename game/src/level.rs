// game/src/level.rs
use engine_core::tiles::tile::TileCategory;
use engine_core::tiles::tilemap::TileStore;
use macroquad::prelude::*;
use crate::constants::*;
use crate::entity::{Enemy, Player};

/// Large decor variant that sheds leaves.
const TREE: (TileCategory, u32) = (TileCategory::LargeDecor, 2);
const PLAYER_SPAWNER: (TileCategory, u32) = (TileCategory::Spawners, 0);
const ENEMY_SPAWNER: (TileCategory, u32) = (TileCategory::Spawners, 1);

/// Everything placed on a freshly loaded map.
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    /// Areas leaves fall from.
    pub leaf_zones: Vec<Rect>,
}

impl Level {
    /// Populates a level from a loaded map. Spawner tiles are removed from
    /// the store; trees stay.
    pub fn from_store(store: &mut TileStore) -> Self {
        let leaf_zones = store
            .extract(&[TREE], true)
            .into_iter()
            .map(|tree| {
                Rect::new(
                    tree.pixel_position.x + LEAF_ZONE.x,
                    tree.pixel_position.y + LEAF_ZONE.y,
                    LEAF_ZONE.w,
                    LEAF_ZONE.h,
                )
            })
            .collect();

        let start = store
            .spawn_point()
            .map_or(DEFAULT_PLAYER_POSITION, |cell| store.grid_to_pixel(cell));
        let mut player = Player::new(start);

        let mut enemies = Vec::new();
        for spawner in store.extract(&[PLAYER_SPAWNER, ENEMY_SPAWNER], false) {
            if (spawner.category, spawner.variant) == PLAYER_SPAWNER {
                player.place(spawner.pixel_position);
            } else {
                enemies.push(Enemy::new(spawner.pixel_position));
            }
        }

        Self { player, enemies, leaf_zones }
    }
}
