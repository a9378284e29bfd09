//! Declarative level records and the per-level collision world.

use serde::{Deserialize, Serialize};

use crystal_quest_core::events::EventSink;
use crystal_quest_core::geometry::Rect;

use crate::config::QuestConfig;
use crate::entities::{Coin, Crystal, Enemy, EnemyKind, PowerUpPickup};
use crate::error::LevelError;
use crate::events::QuestEvent;
use crate::physics::Platform;
use crate::player::Player;
use crate::powerups::PowerUpKind;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnemySpawn {
    pub x: f32,
    pub y: f32,
    pub kind: EnemyKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PickupSpawn {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PowerUpSpawn {
    pub x: f32,
    pub y: f32,
    pub kind: PowerUpKind,
}

/// Authorable level record, read once at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LevelData {
    pub name: String,
    /// Base RGB color for the rendering layer.
    #[serde(default)]
    pub background: [u8; 3],
    /// Seconds allowed. Falls back to the configured default when omitted.
    #[serde(default)]
    pub time_limit: Option<f32>,
    pub crystals_required: u32,
    pub platforms: Vec<Platform>,
    #[serde(default)]
    pub enemies: Vec<EnemySpawn>,
    #[serde(default)]
    pub crystals: Vec<PickupSpawn>,
    #[serde(default)]
    pub coins: Vec<PickupSpawn>,
    #[serde(default)]
    pub powerups: Vec<PowerUpSpawn>,
}

impl LevelData {
    pub fn from_toml_str(source_name: &str, content: &str) -> Result<Self, LevelError> {
        toml::from_str(content).map_err(|e| LevelError::Parse {
            source_name: source_name.to_string(),
            message: e.to_string(),
        })
    }

    pub fn from_json_str(source_name: &str, content: &str) -> Result<Self, LevelError> {
        serde_json::from_str(content).map_err(|e| LevelError::Parse {
            source_name: source_name.to_string(),
            message: e.to_string(),
        })
    }

    /// Reject records the simulation cannot run.
    pub fn validate(&self) -> Result<(), LevelError> {
        let invalid = |field: &str, reason: &str| LevelError::InvalidValue {
            level: self.name.clone(),
            field: field.to_string(),
            reason: reason.to_string(),
        };

        if self.name.trim().is_empty() {
            return Err(invalid("name", "must not be empty"));
        }
        if self
            .time_limit
            .is_some_and(|limit| !(limit.is_finite() && limit > 0.0))
        {
            return Err(invalid("time_limit", "must be a positive number of seconds"));
        }
        if self.crystals_required == 0 {
            return Err(invalid("crystals_required", "must be at least 1"));
        }
        if self.platforms.is_empty() {
            return Err(invalid("platforms", "must contain at least one platform"));
        }
        for (index, platform) in self.platforms.iter().enumerate() {
            if !platform.is_well_formed() {
                return Err(LevelError::InvalidPlatform {
                    level: self.name.clone(),
                    index,
                    reason: "must have finite coordinates and positive size".to_string(),
                });
            }
        }

        let positions = self
            .enemies
            .iter()
            .map(|e| ("enemies", e.x, e.y))
            .chain(self.crystals.iter().map(|c| ("crystals", c.x, c.y)))
            .chain(self.coins.iter().map(|c| ("coins", c.x, c.y)))
            .chain(self.powerups.iter().map(|p| ("powerups", p.x, p.y)));
        for (field, x, y) in positions {
            if !(x.is_finite() && y.is_finite()) {
                return Err(invalid(field, "contains a non-finite position"));
            }
        }

        if self.crystals_required as usize > self.crystals.len() {
            return Err(LevelError::UnreachableGoal {
                level: self.name.clone(),
                required: self.crystals_required,
                available: self.crystals.len(),
            });
        }
        Ok(())
    }
}

/// One playable level: immutable geometry plus mutable entity collections.
///
/// Reset in place between attempts so its identity survives retries.
#[derive(Debug, Clone)]
pub struct Level {
    name: String,
    background: [u8; 3],
    time_limit: f32,
    crystals_required: u32,
    platforms: Vec<Platform>,
    enemies: Vec<Enemy>,
    crystals: Vec<Crystal>,
    coins: Vec<Coin>,
    powerups: Vec<PowerUpPickup>,
    config: QuestConfig,
}

impl Level {
    /// Validate `data` and build the level. No partial loads.
    pub fn from_data(data: &LevelData, config: &QuestConfig) -> Result<Self, LevelError> {
        data.validate()?;
        let pickups = &config.pickups;
        Ok(Self {
            name: data.name.clone(),
            background: data.background,
            time_limit: data.time_limit.unwrap_or(config.rules.default_time_limit),
            crystals_required: data.crystals_required,
            platforms: data.platforms.clone(),
            enemies: data
                .enemies
                .iter()
                .map(|e| Enemy::new(e.x, e.y, e.kind, config))
                .collect(),
            crystals: data
                .crystals
                .iter()
                .map(|c| Crystal::new(c.x, c.y, pickups.crystal_size))
                .collect(),
            coins: data
                .coins
                .iter()
                .map(|c| Coin::new(c.x, c.y, pickups.coin_size))
                .collect(),
            powerups: data
                .powerups
                .iter()
                .map(|p| PowerUpPickup::new(p.x, p.y, pickups.powerup_size, p.kind))
                .collect(),
            config: *config,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn background(&self) -> [u8; 3] {
        self.background
    }

    pub fn time_limit(&self) -> f32 {
        self.time_limit
    }

    pub fn crystals_required(&self) -> u32 {
        self.crystals_required
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn enemies_mut(&mut self) -> &mut [Enemy] {
        &mut self.enemies
    }

    pub fn crystals(&self) -> &[Crystal] {
        &self.crystals
    }

    pub fn coins(&self) -> &[Coin] {
        &self.coins
    }

    pub fn powerups(&self) -> &[PowerUpPickup] {
        &self.powerups
    }

    /// Advance entities and resolve every player interaction for one tick.
    pub fn update(&mut self, dt: f32, player: &mut Player, events: &mut impl EventSink<QuestEvent>) {
        let config = self.config;

        let player_x = player.body.x;
        for (index, enemy) in self.enemies.iter_mut().enumerate() {
            if enemy.update(dt, &self.platforms, player_x, &config) {
                tracing::debug!(index, kind = ?enemy.kind(), "Enemy fell out of the world");
                events.emit(QuestEvent::EnemyDespawned { index });
            }
        }
        for crystal in &mut self.crystals {
            crystal.update(dt, &config.pickups);
        }
        for coin in &mut self.coins {
            coin.update(dt, &config.pickups);
        }
        for powerup in &mut self.powerups {
            powerup.update(dt);
        }

        let player_rect = player.rect();

        // At most one enemy hit per tick.
        if self
            .enemies
            .iter()
            .any(|e| e.alive && player_rect.overlaps(&e.rect()))
        {
            player.take_damage(events);
        }

        for crystal in &mut self.crystals {
            if !crystal.collected && player_rect.overlaps(&crystal.rect()) {
                crystal.collected = true;
                player.collect_crystal(config.pickups.crystal_score);
                let (x, y) = crystal.rect().center();
                events.emit(QuestEvent::CrystalCollected { x, y });
            }
        }
        for coin in &mut self.coins {
            if !coin.collected && player_rect.overlaps(&coin.rect()) {
                coin.collected = true;
                player.collect_coin(config.pickups.coin_score);
                let (x, y) = coin.rect().center();
                events.emit(QuestEvent::CoinCollected { x, y });
            }
        }
        for powerup in &mut self.powerups {
            if !powerup.collected && player_rect.overlaps(&powerup.rect()) {
                powerup.collected = true;
                player.collect_powerup(powerup.kind);
                let (x, y) = powerup.rect().center();
                events.emit(QuestEvent::PowerUpCollected {
                    x,
                    y,
                    kind: powerup.kind,
                });
            }
        }
    }

    /// Crystals currently marked collected, across every attempt since the
    /// last explicit reset.
    pub fn crystals_collected(&self) -> usize {
        self.crystals.iter().filter(|c| c.collected).count()
    }

    pub fn crystal_count(&self) -> usize {
        self.crystals.len()
    }

    pub fn is_complete(&self) -> bool {
        self.crystals_collected() >= self.crystals_required as usize
    }

    pub fn reset_collectibles(&mut self) {
        self.crystals.iter_mut().for_each(Crystal::reset);
        self.coins.iter_mut().for_each(Coin::reset);
        self.powerups.iter_mut().for_each(PowerUpPickup::reset);
    }

    pub fn reset_enemies(&mut self) {
        self.enemies.iter_mut().for_each(Enemy::reset);
    }

    /// Living enemies with their storage index.
    pub fn live_enemies(&self) -> impl Iterator<Item = (usize, &Enemy)> {
        self.enemies.iter().enumerate().filter(|(_, e)| e.alive)
    }

    /// Bounding box of all platforms, for camera framing.
    pub fn bounds(&self) -> Option<Rect> {
        let first = self.platforms.first()?;
        let (mut left, mut top, mut right, mut bottom) =
            (first.left(), first.top(), first.right(), first.bottom());
        for p in &self.platforms[1..] {
            left = left.min(p.left());
            top = top.min(p.top());
            right = right.max(p.right());
            bottom = bottom.max(p.bottom());
        }
        Some(Rect::new(left, top, right - left, bottom - top))
    }
}
