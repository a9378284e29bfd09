use serde::{Deserialize, Serialize};

use crystal_quest_core::powerup::{self, EffectTimer};

/// Crystal Quest power-up types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerUpKind {
    DoubleJump,
    SpeedBoost,
    Shield,
}

impl powerup::PowerUpKind for PowerUpKind {
    fn is_persistent(&self) -> bool {
        matches!(self, PowerUpKind::DoubleJump)
    }
}

/// Double-jump capability. Granted until a level or game reset clears it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoubleJump {
    pub granted: bool,
    pub used_this_airtime: bool,
}

impl DoubleJump {
    /// Whether an airborne jump is still available.
    pub fn available(&self) -> bool {
        self.granted && !self.used_this_airtime
    }
}

/// The three independent power-up states carried by the player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PowerUpState {
    pub double_jump: DoubleJump,
    pub speed_boost: EffectTimer,
    pub shield: EffectTimer,
}

impl PowerUpState {
    /// Apply a collected power-up. Timed effects refresh rather than stack.
    pub fn grant(&mut self, kind: PowerUpKind, duration: f32) {
        match kind {
            PowerUpKind::DoubleJump => self.double_jump.granted = true,
            PowerUpKind::SpeedBoost => self.speed_boost.activate(duration),
            PowerUpKind::Shield => self.shield.activate(duration),
        }
    }

    /// Count down the timed effects, reporting each one that runs out.
    pub fn tick(&mut self, dt: f32, mut on_expire: impl FnMut(PowerUpKind)) {
        if self.speed_boost.tick(dt) {
            on_expire(PowerUpKind::SpeedBoost);
        }
        if self.shield.tick(dt) {
            on_expire(PowerUpKind::Shield);
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_active(&self, kind: PowerUpKind) -> bool {
        match kind {
            PowerUpKind::DoubleJump => self.double_jump.granted,
            PowerUpKind::SpeedBoost => self.speed_boost.is_active(),
            PowerUpKind::Shield => self.shield.is_active(),
        }
    }

    pub fn has_shield(&self) -> bool {
        self.shield.is_active()
    }

    /// Horizontal speed multiplier, `boost` while speed-boost is active.
    pub fn speed_multiplier(&self, boost: f32) -> f32 {
        if self.speed_boost.is_active() {
            boost
        } else {
            1.0
        }
    }
}
