//! Read-only views of the simulation for renderers and HUDs.

use serde::{Deserialize, Serialize};

use crystal_quest_core::geometry::Rect;

use crate::entities::{EnemyKind, PowerUpPickup};
use crate::error::SnapshotError;
use crate::powerups::PowerUpKind;
use crate::scoring::LevelRating;
use crate::state::GameState;

/// Numbers shown on the in-game HUD.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hud {
    pub lives: u32,
    pub score: u32,
    /// Collected vs placed crystals in the current level.
    pub crystals_collected: usize,
    pub crystals_total: usize,
    pub crystals_required: u32,
    pub level_number: usize,
    pub level_count: usize,
    /// Level countdown, never below zero.
    pub time_remaining: f32,
    pub elapsed: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub rect: Rect,
    pub vel_x: f32,
    pub vel_y: f32,
    pub on_ground: bool,
    pub invulnerable: bool,
    pub double_jump: bool,
    pub speed_boost_remaining: f32,
    pub shield_remaining: f32,
    pub animation_timer: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyView {
    pub index: usize,
    pub kind: EnemyKind,
    pub rect: Rect,
    pub vel_x: f32,
    pub animation_timer: f32,
}

/// A pickup still in the world. `phase` is the float offset for crystals,
/// the spin angle for coins and the pulse scale for power-ups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickupView {
    pub rect: Rect,
    pub phase: f32,
    pub kind: Option<PowerUpKind>,
}

impl From<&PowerUpPickup> for PickupView {
    fn from(p: &PowerUpPickup) -> Self {
        Self {
            rect: p.rect(),
            phase: p.pulse(),
            kind: Some(p.kind),
        }
    }
}

/// Highlighted index of each menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuView {
    pub main: usize,
    pub pause: usize,
    pub game_over: usize,
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub state: GameState,
    pub level_name: String,
    pub background: [u8; 3],
    pub hud: Hud,
    pub rating: Option<LevelRating>,
    pub platforms: Vec<Rect>,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub crystals: Vec<PickupView>,
    pub coins: Vec<PickupView>,
    pub powerups: Vec<PickupView>,
    pub menu: MenuView,
}

/// Serialize a snapshot to MessagePack.
pub fn encode_snapshot(snapshot: &GameSnapshot) -> Result<Vec<u8>, SnapshotError> {
    rmp_serde::to_vec(snapshot).map_err(|e| SnapshotError::Encode(e.to_string()))
}

pub fn decode_snapshot(bytes: &[u8]) -> Result<GameSnapshot, SnapshotError> {
    rmp_serde::from_slice(bytes).map_err(|e| SnapshotError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let err = decode_snapshot(&[0xc1, 0x00, 0xff]).unwrap_err();
        assert!(matches!(err, SnapshotError::Decode(_)));
    }

    #[test]
    fn powerup_view_carries_kind_and_pulse() {
        let pickup = PowerUpPickup::new(10.0, 20.0, 28.0, PowerUpKind::SpeedBoost);
        let view = PickupView::from(&pickup);
        assert_eq!(view.kind, Some(PowerUpKind::SpeedBoost));
        assert_eq!(view.phase, 1.0);
        assert_eq!(view.rect, Rect::new(10.0, 20.0, 28.0, 28.0));
    }
}
