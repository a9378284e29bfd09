use serde::{Deserialize, Serialize};

use crate::error::LevelError;

/// Screen width in world units.
pub const SCREEN_WIDTH: f32 = 1200.0;
/// Screen height in world units. Bodies below this have fallen out of the world.
pub const SCREEN_HEIGHT: f32 = 800.0;
/// Target simulation rate.
pub const TICK_RATE_HZ: f32 = 60.0;
/// Downward acceleration (units/s^2).
pub const GRAVITY: f32 = 1500.0;
/// Player side length.
pub const PLAYER_SIZE: f32 = 32.0;
/// Player run speed (units/s).
pub const PLAYER_SPEED: f32 = 300.0;
/// Initial upward speed of a grounded jump.
pub const PLAYER_JUMP_SPEED: f32 = 600.0;
/// Enemy side length.
pub const ENEMY_SIZE: f32 = 28.0;
/// Base enemy speed.
pub const ENEMY_SPEED: f32 = 100.0;
pub const CRYSTAL_SIZE: f32 = 20.0;
pub const COIN_SIZE: f32 = 16.0;
pub const POWERUP_SIZE: f32 = 28.0;
/// Speed boost and shield duration (seconds).
pub const POWERUP_DURATION: f32 = 10.0;
pub const MAX_LIVES: u32 = 3;
/// Default per-level time limit (seconds).
pub const LEVEL_TIME_LIMIT: f32 = 180.0;

/// World extents, gravity and the player spawn point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub width: f32,
    pub height: f32,
    pub tick_rate_hz: f32,
    pub gravity: f32,
    pub spawn_x: f32,
    pub spawn_y: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            tick_rate_hz: TICK_RATE_HZ,
            gravity: GRAVITY,
            spawn_x: 50.0,
            spawn_y: SCREEN_HEIGHT - 100.0,
        }
    }
}

/// Player movement, damage and power-up tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub size: f32,
    pub move_speed: f32,
    pub jump_speed: f32,
    /// Fraction of `jump_speed` used by the airborne double jump.
    pub double_jump_factor: f32,
    /// Per-frame multiplier on horizontal velocity when no direction is held.
    pub friction: f32,
    pub speed_boost_multiplier: f32,
    pub max_lives: u32,
    pub invulnerability_secs: f32,
    pub powerup_duration_secs: f32,
    /// Distance below the feet tested by the pre-jump ground probe.
    pub ground_probe: f32,
    /// Landing speed above which a hard-landing event is emitted.
    pub hard_landing_speed: f32,
    /// Landing speed above which the landing also shakes the screen.
    pub landing_shake_speed: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            size: PLAYER_SIZE,
            move_speed: PLAYER_SPEED,
            jump_speed: PLAYER_JUMP_SPEED,
            double_jump_factor: 0.8,
            friction: 0.8,
            speed_boost_multiplier: 1.5,
            max_lives: MAX_LIVES,
            invulnerability_secs: 2.0,
            powerup_duration_secs: POWERUP_DURATION,
            ground_probe: 1.0,
            hard_landing_speed: 300.0,
            landing_shake_speed: 600.0,
        }
    }
}

/// Enemy behavior tuning, shared by every level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    pub size: f32,
    pub speed: f32,
    pub walker_patrol_distance: f32,
    /// How many steps ahead the walker probes for the platform edge.
    pub walker_lookahead_steps: f32,
    /// How far below a platform top the walker's feet may sit and still count as standing.
    pub walker_edge_tolerance: f32,
    pub jumper_cooldown_secs: f32,
    pub jumper_trigger_range: f32,
    /// Fraction of the player's jump speed used by a jumper leap.
    pub jumper_jump_factor: f32,
    /// Per-frame multiplier on jumper horizontal velocity.
    pub jumper_air_resistance: f32,
    pub flyer_amplitude: f32,
    pub flyer_frequency: f32,
    /// Fraction of `speed` a flyer uses to chase the player.
    pub flyer_chase_factor: f32,
    pub flyer_deadzone: f32,
    /// Distance below the world bottom at which an enemy is despawned.
    pub despawn_margin: f32,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            size: ENEMY_SIZE,
            speed: ENEMY_SPEED,
            walker_patrol_distance: 100.0,
            walker_lookahead_steps: 2.0,
            walker_edge_tolerance: 10.0,
            jumper_cooldown_secs: 2.0,
            jumper_trigger_range: 200.0,
            jumper_jump_factor: 0.7,
            jumper_air_resistance: 0.95,
            flyer_amplitude: 30.0,
            flyer_frequency: 2.0,
            flyer_chase_factor: 0.5,
            flyer_deadzone: 10.0,
            despawn_margin: 100.0,
        }
    }
}

/// Collectible sizes, scores and animation rates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickupConfig {
    pub crystal_size: f32,
    pub coin_size: f32,
    pub powerup_size: f32,
    pub crystal_score: u32,
    pub coin_score: u32,
    pub crystal_float_amplitude: f32,
    pub crystal_float_frequency: f32,
    pub coin_spin_deg_per_sec: f32,
}

impl Default for PickupConfig {
    fn default() -> Self {
        Self {
            crystal_size: CRYSTAL_SIZE,
            coin_size: COIN_SIZE,
            powerup_size: POWERUP_SIZE,
            crystal_score: 100,
            coin_score: 10,
            crystal_float_amplitude: 5.0,
            crystal_float_frequency: 3.0,
            coin_spin_deg_per_sec: 180.0,
        }
    }
}

/// Session rules that are not tied to a single entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Time limit for level records that omit one.
    pub default_time_limit: f32,
    /// Seconds that must remain for an all-crystal finish to rate Perfect.
    pub perfect_time_remaining: f32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            default_time_limit: LEVEL_TIME_LIMIT,
            perfect_time_remaining: 60.0,
        }
    }
}

/// Top-level game configuration, loadable from TOML.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestConfig {
    pub world: WorldConfig,
    pub player: PlayerConfig,
    pub enemies: EnemyConfig,
    pub pickups: PickupConfig,
    pub rules: RulesConfig,
}

impl QuestConfig {
    /// Load config from `CRYSTAL_QUEST_CONFIG` or `config/crystal_quest.toml`.
    /// Falls back to defaults if no file exists or it cannot be parsed.
    pub fn load() -> Self {
        let path = std::env::var("CRYSTAL_QUEST_CONFIG")
            .unwrap_or_else(|_| "config/crystal_quest.toml".to_string());
        match std::fs::read_to_string(&path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    tracing::warn!("Failed to parse {path}: {e}, using defaults");
                    Self::default()
                },
            },
            Err(_) => Self::default(),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, LevelError> {
        toml::from_str(content).map_err(|e| LevelError::Parse {
            source_name: "config".to_string(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_shipped_tuning() {
        let cfg = QuestConfig::default();
        assert_eq!(cfg.world.gravity, 1500.0);
        assert_eq!(cfg.world.spawn_y, 700.0);
        assert_eq!(cfg.player.max_lives, 3);
        assert_eq!(cfg.player.invulnerability_secs, 2.0);
        assert_eq!(cfg.player.powerup_duration_secs, 10.0);
        assert_eq!(cfg.enemies.jumper_trigger_range, 200.0);
        assert_eq!(cfg.pickups.crystal_score, 100);
        assert_eq!(cfg.rules.default_time_limit, 180.0);
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let cfg = QuestConfig::from_toml_str(
            r#"
            [player]
            max_lives = 5

            [world]
            gravity = 900.0
            "#,
        )
        .unwrap();
        assert_eq!(cfg.player.max_lives, 5);
        assert_eq!(cfg.player.jump_speed, PLAYER_JUMP_SPEED);
        assert_eq!(cfg.world.gravity, 900.0);
        assert_eq!(cfg.world.width, SCREEN_WIDTH);
        assert_eq!(cfg.enemies, EnemyConfig::default());
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let err = QuestConfig::from_toml_str("[player]\nmax_lives = \"many\"").unwrap_err();
        assert!(matches!(err, LevelError::Parse { .. }));
    }
}
