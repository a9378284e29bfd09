use crate::config::QuestConfig;
use crate::error::LevelError;
use crate::level::{Level, LevelData};

/// The shipped campaign, in play order.
const BUILTIN_LEVELS: [(&str, &str); 5] = [
    (
        "01_tutorial_valley.toml",
        include_str!("../levels/01_tutorial_valley.toml"),
    ),
    (
        "02_skyward_peaks.toml",
        include_str!("../levels/02_skyward_peaks.toml"),
    ),
    (
        "03_monster_caverns.toml",
        include_str!("../levels/03_monster_caverns.toml"),
    ),
    (
        "04_crystal_spires.toml",
        include_str!("../levels/04_crystal_spires.toml"),
    ),
    (
        "05_crystal_fortress.toml",
        include_str!("../levels/05_crystal_fortress.toml"),
    ),
];

/// Parse the built-in level records.
pub fn builtin_level_data() -> Result<Vec<LevelData>, LevelError> {
    BUILTIN_LEVELS
        .iter()
        .map(|(name, src)| LevelData::from_toml_str(name, src))
        .collect()
}

/// Ordered levels plus a forward-only cursor.
#[derive(Debug, Clone)]
pub struct LevelCatalog {
    levels: Vec<Level>,
    current: usize,
}

impl LevelCatalog {
    /// The five-level campaign that ships with the game.
    pub fn builtin(config: &QuestConfig) -> Result<Self, LevelError> {
        Self::from_data(&builtin_level_data()?, config)
    }

    /// Build every level up front. Any invalid record fails the whole catalog.
    pub fn from_data(records: &[LevelData], config: &QuestConfig) -> Result<Self, LevelError> {
        if records.is_empty() {
            return Err(LevelError::EmptyCatalog);
        }
        let levels = records
            .iter()
            .map(|data| Level::from_data(data, config))
            .collect::<Result<Vec<_>, _>>()?;
        tracing::info!(levels = levels.len(), "Level catalog built");
        Ok(Self { levels, current: 0 })
    }

    pub fn current(&self) -> &Level {
        &self.levels[self.current]
    }

    pub fn current_mut(&mut self) -> &mut Level {
        &mut self.levels[self.current]
    }

    /// Zero-based cursor position.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// One-based level number for display.
    pub fn current_number(&self) -> usize {
        self.current + 1
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn has_next(&self) -> bool {
        self.current + 1 < self.levels.len()
    }

    /// Move to the next level. Returns false, leaving the cursor on the last
    /// level, when the campaign is finished.
    pub fn advance(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.current += 1;
        true
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }
}
