//! Enemies and collectibles living inside a level.

use serde::{Deserialize, Serialize};

use crystal_quest_core::geometry::Rect;

use crate::config::{PickupConfig, QuestConfig};
use crate::physics::{KinematicBody, Platform};
use crate::powerups::PowerUpKind;

/// Enemy variants as written in level records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnemyKind {
    Walker,
    Jumper,
    Flyer,
}

/// Kind-specific enemy sub-state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EnemyBehavior {
    /// Patrols around `start_x`, turning at the patrol limit or a ledge.
    Walker,
    /// Leaps at a nearby player once `jump_timer` reaches the cooldown.
    Jumper { jump_timer: f32 },
    /// Bobs around `start_y` and drifts toward the player. No gravity.
    Flyer,
}

impl EnemyBehavior {
    fn initial(kind: EnemyKind) -> Self {
        match kind {
            EnemyKind::Walker => EnemyBehavior::Walker,
            EnemyKind::Jumper => EnemyBehavior::Jumper { jump_timer: 0.0 },
            EnemyKind::Flyer => EnemyBehavior::Flyer,
        }
    }

    pub fn kind(&self) -> EnemyKind {
        match self {
            EnemyBehavior::Walker => EnemyKind::Walker,
            EnemyBehavior::Jumper { .. } => EnemyKind::Jumper,
            EnemyBehavior::Flyer => EnemyKind::Flyer,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub body: KinematicBody,
    pub behavior: EnemyBehavior,
    /// Spawn anchor. Patrol origin for walkers, bob center for flyers.
    pub start_x: f32,
    pub start_y: f32,
    pub alive: bool,
    pub animation_timer: f32,
    speed: f32,
}

impl Enemy {
    /// Spawn in the same state `reset` restores.
    pub fn new(x: f32, y: f32, kind: EnemyKind, config: &QuestConfig) -> Self {
        let size = config.enemies.size;
        let mut enemy = Self {
            body: KinematicBody::new(x, y, size, size),
            behavior: EnemyBehavior::initial(kind),
            start_x: x,
            start_y: y,
            alive: true,
            animation_timer: 0.0,
            speed: config.enemies.speed,
        };
        enemy.reset();
        enemy
    }

    pub fn kind(&self) -> EnemyKind {
        self.behavior.kind()
    }

    pub fn rect(&self) -> Rect {
        self.body.rect()
    }

    /// Advance one tick. Returns true on the tick the enemy falls out of the
    /// world and stops simulating. Dead enemies are left untouched.
    pub fn update(
        &mut self,
        dt: f32,
        platforms: &[Platform],
        player_x: f32,
        config: &QuestConfig,
    ) -> bool {
        if !self.alive {
            return false;
        }
        let tuning = &config.enemies;
        self.animation_timer += dt;

        match &mut self.behavior {
            EnemyBehavior::Walker => {
                let body = &mut self.body;
                body.x += body.vel_x * dt;
                if (body.x - self.start_x).abs() > tuning.walker_patrol_distance {
                    body.vel_x = -body.vel_x;
                }
                let future_x = body.x + body.vel_x * dt * tuning.walker_lookahead_steps;
                if !has_footing(body, future_x, platforms, tuning.walker_edge_tolerance) {
                    body.vel_x = -body.vel_x;
                }
            },
            EnemyBehavior::Jumper { jump_timer } => {
                let body = &mut self.body;
                *jump_timer += dt;
                if *jump_timer >= tuning.jumper_cooldown_secs && body.vel_y == 0.0 {
                    let dx = player_x - body.x;
                    if dx.abs() < tuning.jumper_trigger_range {
                        body.vel_x = if dx > 0.0 { self.speed } else { -self.speed };
                        body.vel_y = -config.player.jump_speed * tuning.jumper_jump_factor;
                        *jump_timer = 0.0;
                    }
                }
                body.x += body.vel_x * dt;
                body.vel_x *= tuning.jumper_air_resistance;
            },
            EnemyBehavior::Flyer => {
                let body = &mut self.body;
                body.y = self.start_y
                    + (self.animation_timer * tuning.flyer_frequency).sin() * tuning.flyer_amplitude;
                let dx = player_x - body.x;
                if dx.abs() > tuning.flyer_deadzone {
                    let chase = self.speed * tuning.flyer_chase_factor;
                    body.vel_x = if dx > 0.0 { chase } else { -chase };
                    body.x += body.vel_x * dt;
                }
            },
        }

        if self.kind() != EnemyKind::Flyer {
            self.body.apply_gravity(config.world.gravity, dt);
            self.body.move_vertical(dt, platforms);
        }

        if self.body.y > config.world.height + tuning.despawn_margin {
            self.alive = false;
            return true;
        }
        false
    }

    /// Restore the spawn state: alive, at the anchor, walkers heading right.
    pub fn reset(&mut self) {
        self.alive = true;
        self.body.x = self.start_x;
        self.body.y = self.start_y;
        self.body.vel_y = 0.0;
        self.animation_timer = 0.0;
        self.behavior = EnemyBehavior::initial(self.kind());
        self.body.vel_x = match self.behavior {
            EnemyBehavior::Walker => self.speed,
            EnemyBehavior::Jumper { .. } | EnemyBehavior::Flyer => 0.0,
        };
    }
}

/// Whether some platform top sits just under the body's feet at the
/// horizontal center it would have at `future_x`.
fn has_footing(body: &KinematicBody, future_x: f32, platforms: &[Platform], tolerance: f32) -> bool {
    let feet = body.y + body.height;
    let center = future_x + body.width / 2.0;
    platforms.iter().any(|p| {
        p.top() <= feet && feet <= p.top() + tolerance && p.left() <= center && center <= p.right()
    })
}

/// Floating crystal. The float offset moves its hitbox, not just its sprite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crystal {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub collected: bool,
    pub animation_timer: f32,
    pub float_offset: f32,
}

impl Crystal {
    pub fn new(x: f32, y: f32, size: f32) -> Self {
        Self {
            x,
            y,
            size,
            collected: false,
            animation_timer: 0.0,
            float_offset: 0.0,
        }
    }

    pub fn update(&mut self, dt: f32, tuning: &PickupConfig) {
        self.animation_timer += dt;
        self.float_offset = (self.animation_timer * tuning.crystal_float_frequency).sin()
            * tuning.crystal_float_amplitude;
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y + self.float_offset, self.size, self.size)
    }

    pub fn reset(&mut self) {
        self.collected = false;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub collected: bool,
    pub animation_timer: f32,
    /// Spin angle in degrees, kept in `[0, 360)`.
    pub rotation: f32,
}

impl Coin {
    pub fn new(x: f32, y: f32, size: f32) -> Self {
        Self {
            x,
            y,
            size,
            collected: false,
            animation_timer: 0.0,
            rotation: 0.0,
        }
    }

    pub fn update(&mut self, dt: f32, tuning: &PickupConfig) {
        self.animation_timer += dt;
        self.rotation = (self.rotation + tuning.coin_spin_deg_per_sec * dt).rem_euclid(360.0);
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.size, self.size)
    }

    pub fn reset(&mut self) {
        self.collected = false;
    }
}

/// Power-up waiting to be picked up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerUpPickup {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub kind: PowerUpKind,
    pub collected: bool,
    pub animation_timer: f32,
}

impl PowerUpPickup {
    pub fn new(x: f32, y: f32, size: f32, kind: PowerUpKind) -> Self {
        Self {
            x,
            y,
            size,
            kind,
            collected: false,
            animation_timer: 0.0,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.animation_timer += dt;
    }

    /// Sprite scale factor, oscillating between 0.7 and 1.3.
    pub fn pulse(&self) -> f32 {
        1.0 + 0.3 * (self.animation_timer * 4.0).sin()
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.size, self.size)
    }

    pub fn reset(&mut self) {
        self.collected = false;
    }
}
