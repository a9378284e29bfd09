use crystal_quest_core::events::EventSink;
use crystal_quest_core::geometry::Rect;
use crystal_quest_core::powerup::EffectTimer;

use crate::config::{PlayerConfig, QuestConfig, WorldConfig};
use crate::events::QuestEvent;
use crate::physics::{KinematicBody, Platform};
use crate::powerups::{PowerUpKind, PowerUpState};

/// Screen shake requested when the player takes damage.
pub const DAMAGE_SHAKE: (f32, f32) = (8.0, 0.4);
/// Screen shake requested by a very hard landing.
pub const LANDING_SHAKE: (f32, f32) = (3.0, 0.2);

/// Per-tick player input: held direction and the latched jump edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerInput {
    /// -1 left, +1 right, 0 none.
    pub direction: i8,
    pub jump: bool,
}

/// Input-driven kinematic body with lives, score and power-ups.
#[derive(Debug, Clone)]
pub struct Player {
    pub body: KinematicBody,
    pub lives: u32,
    pub score: u32,
    pub crystals_collected: u32,
    pub coins_collected: u32,
    /// Set only by a downward collision during the current tick.
    pub on_ground: bool,
    pub powerups: PowerUpState,
    pub animation_timer: f32,
    invulnerability: EffectTimer,
    tuning: PlayerConfig,
    world: WorldConfig,
}

impl Player {
    /// Fresh player at the spawn point with full lives.
    pub fn new(config: &QuestConfig) -> Self {
        let tuning = config.player;
        let world = config.world;
        Self {
            body: KinematicBody::new(world.spawn_x, world.spawn_y, tuning.size, tuning.size),
            lives: tuning.max_lives,
            score: 0,
            crystals_collected: 0,
            coins_collected: 0,
            on_ground: false,
            powerups: PowerUpState::default(),
            animation_timer: 0.0,
            invulnerability: EffectTimer::default(),
            tuning,
            world,
        }
    }

    pub fn rect(&self) -> Rect {
        self.body.rect()
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invulnerability.is_active()
    }

    pub fn invulnerable_remaining(&self) -> f32 {
        self.invulnerability.remaining()
    }

    pub fn has_shield(&self) -> bool {
        self.powerups.has_shield()
    }

    /// Advance one tick. The ordering below is load-bearing: timers first,
    /// then input, gravity, and the two collision passes.
    pub fn update(
        &mut self,
        dt: f32,
        input: PlayerInput,
        platforms: &[Platform],
        events: &mut impl EventSink<QuestEvent>,
    ) {
        self.invulnerability.tick(dt);
        self.powerups
            .tick(dt, |kind| events.emit(QuestEvent::PowerUpExpired { kind }));

        let was_on_ground = self.on_ground;
        let fall_speed = self.body.vel_y;
        self.on_ground = false;

        let boost = self.powerups.speed_multiplier(self.tuning.speed_boost_multiplier);
        if input.direction != 0 {
            self.body.vel_x = f32::from(input.direction.signum()) * self.tuning.move_speed * boost;
        } else {
            self.body.vel_x *= self.tuning.friction;
        }

        if input.jump {
            self.jump(platforms, events);
        }

        self.body.apply_gravity(self.world.gravity, dt);
        self.body.move_horizontal(dt, platforms);
        let contact = self.body.move_vertical(dt, platforms);
        if contact.landed {
            self.on_ground = true;
            self.powerups.double_jump.used_this_airtime = false;
        }

        if !was_on_ground && self.on_ground && fall_speed > self.tuning.hard_landing_speed {
            let (x, y) = self.feet();
            events.emit(QuestEvent::HardLanding {
                x,
                y,
                speed: fall_speed,
            });
            if fall_speed > self.tuning.landing_shake_speed {
                let (intensity, duration) = LANDING_SHAKE;
                events.emit(QuestEvent::ScreenShake {
                    intensity,
                    duration,
                });
            }
        }

        self.body.x = self.body.x.clamp(0.0, self.world.width - self.body.width);

        if self.body.y > self.world.height {
            self.take_damage(events);
            self.respawn();
            events.emit(QuestEvent::Respawned {
                x: self.body.x,
                y: self.body.y,
            });
        }

        self.animation_timer += dt;
    }

    /// Ground jump if the probe finds footing, otherwise the double jump if
    /// it is granted and unused this airtime. Anything else is a no-op.
    fn jump(&mut self, platforms: &[Platform], events: &mut impl EventSink<QuestEvent>) {
        let grounded = self.body.probe_ground(platforms, self.tuning.ground_probe);
        let (x, y) = self.feet();
        if grounded {
            self.body.vel_y = -self.tuning.jump_speed;
            self.on_ground = false;
            self.powerups.double_jump.used_this_airtime = false;
            events.emit(QuestEvent::Jumped { x, y });
        } else if self.powerups.double_jump.available() {
            self.body.vel_y = -self.tuning.jump_speed * self.tuning.double_jump_factor;
            self.powerups.double_jump.used_this_airtime = true;
            events.emit(QuestEvent::DoubleJumped { x, y });
        }
    }

    /// Lose a life unless invulnerable or shielded. Returns whether damage landed.
    pub fn take_damage(&mut self, events: &mut impl EventSink<QuestEvent>) -> bool {
        if self.is_invulnerable() || self.has_shield() {
            return false;
        }
        self.lives = self.lives.saturating_sub(1);
        self.invulnerability.activate(self.tuning.invulnerability_secs);
        tracing::debug!(lives = self.lives, "Player damaged");

        let (x, y) = self.body.rect().center();
        events.emit(QuestEvent::PlayerDamaged {
            x,
            y,
            lives_remaining: self.lives,
        });
        let (intensity, duration) = DAMAGE_SHAKE;
        events.emit(QuestEvent::ScreenShake {
            intensity,
            duration,
        });
        true
    }

    /// Back to the spawn point, motionless. Lives, score and power-ups are kept.
    pub fn respawn(&mut self) {
        self.body.x = self.world.spawn_x;
        self.body.y = self.world.spawn_y;
        self.body.stop();
        self.on_ground = false;
        tracing::debug!("Player respawned");
    }

    pub fn collect_crystal(&mut self, points: u32) {
        self.crystals_collected += 1;
        self.score = self.score.saturating_add(points);
    }

    pub fn collect_coin(&mut self, points: u32) {
        self.coins_collected += 1;
        self.score = self.score.saturating_add(points);
    }

    pub fn collect_powerup(&mut self, kind: PowerUpKind) {
        self.powerups.grant(kind, self.tuning.powerup_duration_secs);
        tracing::debug!(?kind, "Power-up granted");
    }

    pub fn restore_lives(&mut self) {
        self.lives = self.tuning.max_lives;
    }

    pub fn clear_powerups(&mut self) {
        self.powerups.clear();
    }

    fn feet(&self) -> (f32, f32) {
        (
            self.body.x + self.body.width / 2.0,
            self.body.y + self.body.height,
        )
    }
}
