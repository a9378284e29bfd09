use serde::{Deserialize, Serialize};

/// Top-level game mode. Exactly one is current; per-tick dispatch keys off it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    Menu,
    Instructions,
    Playing,
    Paused,
    GameOver,
    LevelComplete,
    GameComplete,
}

/// Explicit state-machine requests. Simulation-driven outcomes (losing the
/// last life, collecting the last crystal) are not actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    StartGame,
    ShowInstructions,
    CloseInstructions,
    Pause,
    Resume,
    RestartLevel,
    MainMenu,
    NextLevel,
    RestartGame,
    Quit,
}

impl GameState {
    /// Whether `action` is legal from this state.
    pub fn permits(self, action: Action) -> bool {
        use Action::*;
        use GameState::*;
        matches!(
            (self, action),
            (Menu, StartGame | ShowInstructions | Quit)
                | (Instructions, CloseInstructions)
                | (Playing, Pause)
                | (Paused, Resume | RestartLevel | MainMenu)
                | (GameOver, RestartGame | MainMenu | Quit)
                | (LevelComplete, NextLevel)
                | (GameComplete, RestartGame)
        )
    }

    /// Whether the world simulation advances in this state.
    pub fn is_simulating(self) -> bool {
        self == GameState::Playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_menu() {
        assert_eq!(GameState::default(), GameState::Menu);
    }

    #[test]
    fn transition_table() {
        assert!(GameState::Menu.permits(Action::StartGame));
        assert!(GameState::Paused.permits(Action::RestartLevel));
        assert!(GameState::GameOver.permits(Action::Quit));
        assert!(GameState::GameComplete.permits(Action::RestartGame));

        assert!(!GameState::Menu.permits(Action::NextLevel));
        assert!(!GameState::Playing.permits(Action::Resume));
        assert!(!GameState::Paused.permits(Action::Quit));
        assert!(!GameState::LevelComplete.permits(Action::Pause));
        assert!(!GameState::GameComplete.permits(Action::MainMenu));
    }

    #[test]
    fn only_playing_simulates() {
        assert!(GameState::Playing.is_simulating());
        assert!(!GameState::Paused.is_simulating());
        assert!(!GameState::LevelComplete.is_simulating());
    }
}
