// game/src/entity.rs
use engine_core::physics::collision::{move_and_collide, overlaps, Collisions, MovingRect};
use engine_core::tiles::tilemap::TileStore;
use macroquad::prelude::*;
use ::rand::Rng;
use crate::constants::*;
use crate::projectile::Projectile;

/// A hitbox moving through the tilemap under gravity.
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicsEntity {
    pub body: MovingRect,
    /// Sides that collided during the last update.
    pub collisions: Collisions,
    /// Facing left.
    pub flip: bool,
    pub last_movement: Vec2,
}

impl PhysicsEntity {
    pub fn new(position: Vec2) -> Self {
        Self {
            body: MovingRect::new(position, ENTITY_SIZE),
            collisions: Collisions::default(),
            flip: false,
            last_movement: Vec2::ZERO,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.body.position
    }

    pub fn rect(&self) -> Rect {
        self.body.rect()
    }

    pub fn center(&self) -> Vec2 {
        self.rect().center()
    }

    /// Moves by `movement` plus the current velocity, then applies gravity.
    pub fn update(&mut self, store: &TileStore, movement: Vec2) {
        let frame_movement = movement + self.body.velocity;
        self.collisions = move_and_collide(store, &mut self.body, frame_movement);

        if movement.x > 0.0 {
            self.flip = false;
        } else if movement.x < 0.0 {
            self.flip = true;
        }
        self.last_movement = movement;

        self.body.velocity.y = (self.body.velocity.y + GRAVITY).min(MAX_FALL_SPEED);
        if self.collisions.vertical() {
            self.body.velocity.y = 0.0;
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub entity: PhysicsEntity,
    /// Frames since the player last stood on something.
    pub air_time: u32,
    pub jumps: u32,
    pub wall_slide: bool,
    /// Dash frames left. Negative while dashing left.
    pub dashing: i32,
}

impl Player {
    pub fn new(position: Vec2) -> Self {
        Self {
            entity: PhysicsEntity::new(position),
            air_time: 0,
            jumps: 1,
            wall_slide: false,
            dashing: 0,
        }
    }

    pub fn rect(&self) -> Rect {
        self.entity.rect()
    }

    /// Moves the player to `position`, as if it had just landed there.
    pub fn place(&mut self, position: Vec2) {
        self.entity.body.position = position;
        self.air_time = 0;
    }

    /// Dashing players are immune to projectiles and kill enemies they touch.
    pub fn is_dashing(&self) -> bool {
        self.dashing.abs() >= DASH_ACTIVE_ABOVE
    }

    /// Steps the player one frame. Returns true when the player has been
    /// falling for too long and dies.
    pub fn update(&mut self, store: &TileStore, movement: Vec2) -> bool {
        self.entity.update(store, movement);

        self.air_time += 1;
        let fell = self.air_time > FATAL_AIR_TIME;

        let collisions = self.entity.collisions;
        if collisions.down {
            self.air_time = 0;
            self.jumps = 1;
        }

        self.wall_slide = false;
        if collisions.horizontal() && self.air_time > WALL_SLIDE_AIR_TIME {
            self.wall_slide = true;
            let velocity = &mut self.entity.body.velocity;
            velocity.y = velocity.y.min(WALL_SLIDE_SPEED);
            self.entity.flip = !collisions.right;
        }

        self.dashing -= self.dashing.signum();
        if self.dashing.abs() > DASH_ACTIVE_ABOVE {
            let velocity = &mut self.entity.body.velocity;
            velocity.x = self.dashing.signum() as f32 * DASH_SPEED;
            if self.dashing.abs() == DASH_ACTIVE_ABOVE + 1 {
                velocity.x *= DASH_END_DAMPING;
            }
        }

        let vx = &mut self.entity.body.velocity.x;
        *vx = if *vx > 0.0 {
            (*vx - FRICTION).max(0.0)
        } else {
            (*vx + FRICTION).min(0.0)
        };

        fell
    }

    /// Jumps off the ground, or away from the wall being slid down.
    /// Returns whether a jump happened.
    pub fn jump(&mut self) -> bool {
        if self.wall_slide {
            let away = if self.entity.flip && self.entity.last_movement.x < 0.0 {
                1.0
            } else if !self.entity.flip && self.entity.last_movement.x > 0.0 {
                -1.0
            } else {
                return false;
            };

            self.entity.body.velocity = vec2(away * WALL_JUMP_VELOCITY.x, WALL_JUMP_VELOCITY.y);
            self.air_time = JUMP_AIR_TIME;
            self.jumps = self.jumps.saturating_sub(1);
            return true;
        }

        if self.jumps > 0 {
            self.entity.body.velocity.y = JUMP_VELOCITY;
            self.jumps -= 1;
            self.air_time = JUMP_AIR_TIME;
            return true;
        }

        false
    }

    /// Starts a dash in the facing direction unless one is running.
    pub fn dash(&mut self) -> bool {
        if self.dashing != 0 {
            return false;
        }
        self.dashing = if self.entity.flip { -DASH_FRAMES } else { DASH_FRAMES };
        true
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub entity: PhysicsEntity,
    /// Frames left in the current walk.
    pub walking: u32,
}

impl Enemy {
    pub fn new(position: Vec2) -> Self {
        Self { entity: PhysicsEntity::new(position), walking: 0 }
    }

    pub fn rect(&self) -> Rect {
        self.entity.rect()
    }

    /// Steps the enemy one frame, firing into `projectiles` when a walk ends
    /// facing the player. Returns true when a dashing player hit the enemy.
    pub fn update<R: Rng>(
        &mut self,
        store: &TileStore,
        player: &Player,
        rng: &mut R,
        projectiles: &mut Vec<Projectile>,
    ) -> bool {
        let mut movement = Vec2::ZERO;

        if self.walking > 0 {
            if store.solid_check(self.ledge_probe()) {
                if self.entity.collisions.horizontal() {
                    self.entity.flip = !self.entity.flip;
                } else {
                    movement.x = if self.entity.flip { -ENEMY_WALK_SPEED } else { ENEMY_WALK_SPEED };
                }
            } else {
                self.entity.flip = !self.entity.flip;
            }

            self.walking -= 1;
            if self.walking == 0 {
                projectiles.extend(self.shoot_at(player));
            }
        } else if rng.gen_bool(ENEMY_WALK_CHANCE) {
            self.walking = rng.gen_range(ENEMY_WALK_FRAMES);
        }

        self.entity.update(store, movement);

        player.is_dashing() && overlaps(&self.rect(), &player.rect())
    }

    /// Point just ahead of the enemy's feet that must be solid to keep walking.
    fn ledge_probe(&self) -> Vec2 {
        let ahead = if self.entity.flip { -LEDGE_PROBE.x } else { LEDGE_PROBE.x };
        vec2(self.entity.center().x + ahead, self.entity.position().y + LEDGE_PROBE.y)
    }

    /// A projectile toward the player, if the player is level with the enemy
    /// and in front of it.
    fn shoot_at(&self, player: &Player) -> Option<Projectile> {
        let distance = player.entity.position() - self.entity.position();
        if distance.y.abs() >= SHOOT_RANGE_Y {
            return None;
        }

        let center = self.entity.center();
        match (self.entity.flip, distance.x) {
            (true, dx) if dx < 0.0 => Some(Projectile::new(
                vec2(center.x - PROJECTILE_MUZZLE, center.y),
                -PROJECTILE_SPEED,
            )),
            (false, dx) if dx > 0.0 => Some(Projectile::new(
                vec2(center.x + PROJECTILE_MUZZLE, center.y),
                PROJECTILE_SPEED,
            )),
            _ => None,
        }
    }
}
