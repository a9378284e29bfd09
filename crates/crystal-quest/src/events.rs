use serde::{Deserialize, Serialize};

use crate::powerups::PowerUpKind;
use crate::scoring::LevelRating;
use crate::state::GameState;

/// Everything the simulation reports to rendering, audio and effects layers.
///
/// Positions are world coordinates of the entity center, or the player's feet
/// for movement events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum QuestEvent {
    Jumped { x: f32, y: f32 },
    DoubleJumped { x: f32, y: f32 },
    /// Landed after falling faster than the hard-landing threshold.
    HardLanding { x: f32, y: f32, speed: f32 },
    PlayerDamaged { x: f32, y: f32, lives_remaining: u32 },
    /// Fell out of the world and was put back at the spawn point.
    Respawned { x: f32, y: f32 },
    ScreenShake { intensity: f32, duration: f32 },
    CrystalCollected { x: f32, y: f32 },
    CoinCollected { x: f32, y: f32 },
    PowerUpCollected { x: f32, y: f32, kind: PowerUpKind },
    PowerUpExpired { kind: PowerUpKind },
    /// Enemy at `index` fell below the world and stopped simulating.
    EnemyDespawned { index: usize },
    LevelCompleted { level: usize, rating: LevelRating },
    /// Pending visual effects should be dropped.
    EffectsCleared,
    StateChanged { from: GameState, to: GameState },
    QuitRequested,
}

impl QuestEvent {
    pub fn is_collection(&self) -> bool {
        matches!(
            self,
            QuestEvent::CrystalCollected { .. }
                | QuestEvent::CoinCollected { .. }
                | QuestEvent::PowerUpCollected { .. }
        )
    }
}
