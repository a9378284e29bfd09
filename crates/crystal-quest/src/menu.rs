//! Highlighted-option cursors for the main, pause and game-over menus.

use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

/// A closed list of menu entries in display order.
pub trait MenuOption: Copy + 'static {
    const ALL: &'static [Self];

    fn label(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuOption {
    StartGame,
    Instructions,
    Quit,
}

impl MenuOption for MainMenuOption {
    const ALL: &'static [Self] = &[Self::StartGame, Self::Instructions, Self::Quit];

    fn label(&self) -> &'static str {
        match self {
            Self::StartGame => "Start Game",
            Self::Instructions => "Instructions",
            Self::Quit => "Quit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseOption {
    Resume,
    RestartLevel,
    MainMenu,
}

impl MenuOption for PauseOption {
    const ALL: &'static [Self] = &[Self::Resume, Self::RestartLevel, Self::MainMenu];

    fn label(&self) -> &'static str {
        match self {
            Self::Resume => "Resume",
            Self::RestartLevel => "Restart Level",
            Self::MainMenu => "Main Menu",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverOption {
    RestartGame,
    MainMenu,
    Quit,
}

impl MenuOption for GameOverOption {
    const ALL: &'static [Self] = &[Self::RestartGame, Self::MainMenu, Self::Quit];

    fn label(&self) -> &'static str {
        match self {
            Self::RestartGame => "Restart Game",
            Self::MainMenu => "Main Menu",
            Self::Quit => "Quit",
        }
    }
}

/// Wrapping cursor over a menu's options. Keeps its position between visits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuCursor<T> {
    index: usize,
    #[serde(skip)]
    _options: PhantomData<T>,
}

impl<T: MenuOption> MenuCursor<T> {
    pub fn new() -> Self {
        Self {
            index: 0,
            _options: PhantomData,
        }
    }

    pub fn up(&mut self) {
        let len = T::ALL.len();
        self.index = (self.index + len - 1) % len;
    }

    pub fn down(&mut self) {
        self.index = (self.index + 1) % T::ALL.len();
    }

    pub fn selected(&self) -> T {
        T::ALL[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

impl<T: MenuOption> Default for MenuCursor<T> {
    fn default() -> Self {
        Self::new()
    }
}
