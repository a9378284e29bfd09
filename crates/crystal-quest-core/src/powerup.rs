use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// Trait for game-specific power-up kind enums.
pub trait PowerUpKind: Clone + Copy + PartialEq + Serialize + DeserializeOwned {
    /// Whether the effect lasts until explicitly cleared instead of counting down.
    fn is_persistent(&self) -> bool;
}

/// Countdown attached to a timed effect (speed boost, shield, invulnerability).
///
/// `remaining` is only meaningful while `active`; reaching zero or below
/// deactivates within the same `tick`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EffectTimer {
    active: bool,
    remaining: f32,
}

impl EffectTimer {
    /// (Re)start the countdown. Refreshes rather than stacks.
    pub fn activate(&mut self, duration: f32) {
        self.active = duration > 0.0;
        self.remaining = duration.max(0.0);
    }

    /// Advance by `dt`. Returns true on the tick the effect expires.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.active {
            return false;
        }
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.clear();
            return true;
        }
        false
    }

    pub fn clear(&mut self) {
        self.active = false;
        self.remaining = 0.0;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Seconds left, or zero when inactive.
    pub fn remaining(&self) -> f32 {
        if self.active { self.remaining } else { 0.0 }
    }
}
