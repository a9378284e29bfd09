use serde::{Deserialize, Serialize};

/// End-of-level rating shown on the completion screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelRating {
    /// Every crystal, with time to spare.
    Perfect,
    /// Every crystal.
    Great,
    Good,
}

impl LevelRating {
    pub fn stars(&self) -> u8 {
        match self {
            LevelRating::Perfect => 3,
            LevelRating::Great => 2,
            LevelRating::Good => 1,
        }
    }
}

/// Rate a finished level.
///
/// Perfect needs every placed crystal and strictly more than
/// `perfect_time_remaining` seconds left on the clock.
pub fn rate_level(
    crystals_collected: usize,
    crystals_total: usize,
    time_remaining: f32,
    perfect_time_remaining: f32,
) -> LevelRating {
    let all_crystals = crystals_collected == crystals_total;
    if all_crystals && time_remaining > perfect_time_remaining {
        LevelRating::Perfect
    } else if all_crystals {
        LevelRating::Great
    } else {
        LevelRating::Good
    }
}
