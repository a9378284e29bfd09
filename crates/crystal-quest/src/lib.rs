pub mod catalog;
pub mod config;
pub mod entities;
pub mod error;
pub mod events;
pub mod level;
pub mod menu;
pub mod physics;
pub mod player;
pub mod powerups;
pub mod scoring;
pub mod snapshot;
pub mod state;

use crystal_quest_core::events::EventSink;
use crystal_quest_core::game_trait::{GameMetadata, Simulation};
use crystal_quest_core::input::{InputEvent, InputFrame};

use catalog::LevelCatalog;
use config::QuestConfig;
use error::{LevelError, TransitionError};
use events::QuestEvent;
use level::{Level, LevelData};
use menu::{GameOverOption, MainMenuOption, MenuCursor, PauseOption};
use player::{Player, PlayerInput};
use scoring::{LevelRating, rate_level};
use snapshot::{EnemyView, GameSnapshot, Hud, MenuView, PickupView, PlayerView};
use state::{Action, GameState};

/// The Crystal Quest game: one player, one level catalog and the state
/// machine that sequences them.
pub struct CrystalQuest {
    config: QuestConfig,
    state: GameState,
    player: Player,
    catalog: LevelCatalog,
    /// Untouched copy used to rebuild the campaign on a full restart.
    pristine: LevelCatalog,
    level_timer: f32,
    game_timer: f32,
    rating: Option<LevelRating>,
    main_menu: MenuCursor<MainMenuOption>,
    pause_menu: MenuCursor<PauseOption>,
    game_over_menu: MenuCursor<GameOverOption>,
    quit_requested: bool,
}

impl CrystalQuest {
    /// Game with the built-in five-level campaign.
    pub fn new(config: QuestConfig) -> Result<Self, LevelError> {
        Ok(Self::from_catalog(config, LevelCatalog::builtin(&config)?))
    }

    /// Game over a custom list of level records.
    pub fn with_levels(config: QuestConfig, records: &[LevelData]) -> Result<Self, LevelError> {
        Ok(Self::from_catalog(
            config,
            LevelCatalog::from_data(records, &config)?,
        ))
    }

    /// Built-in campaign with configuration from `QuestConfig::load`.
    pub fn load() -> Result<Self, LevelError> {
        Self::new(QuestConfig::load())
    }

    fn from_catalog(config: QuestConfig, catalog: LevelCatalog) -> Self {
        let mut game = Self {
            config,
            state: GameState::Menu,
            player: Player::new(&config),
            pristine: catalog.clone(),
            catalog,
            level_timer: 0.0,
            game_timer: 0.0,
            rating: None,
            main_menu: MenuCursor::new(),
            pause_menu: MenuCursor::new(),
            game_over_menu: MenuCursor::new(),
            quit_requested: false,
        };
        game.load_level();
        game
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn config(&self) -> &QuestConfig {
        &self.config
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Direct access for tooling and scripted scenarios.
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn level(&self) -> &Level {
        self.catalog.current()
    }

    pub fn level_mut(&mut self) -> &mut Level {
        self.catalog.current_mut()
    }

    pub fn catalog(&self) -> &LevelCatalog {
        &self.catalog
    }

    /// Raw level countdown. May dip below zero for the tick it expires.
    pub fn level_timer(&self) -> f32 {
        self.level_timer
    }

    pub fn time_remaining(&self) -> f32 {
        self.level_timer.max(0.0)
    }

    /// Seconds spent in Playing since the last full restart.
    pub fn game_timer(&self) -> f32 {
        self.game_timer
    }

    /// Rating of the level just finished, while in LevelComplete.
    pub fn level_rating(&self) -> Option<LevelRating> {
        self.rating
    }

    pub fn main_menu(&self) -> &MenuCursor<MainMenuOption> {
        &self.main_menu
    }

    pub fn pause_menu(&self) -> &MenuCursor<PauseOption> {
        &self.pause_menu
    }

    pub fn game_over_menu(&self) -> &MenuCursor<GameOverOption> {
        &self.game_over_menu
    }

    // ================================================================
    // Transitions
    // ================================================================

    /// Run `action` if the current state allows it. Nothing changes otherwise.
    pub fn perform(
        &mut self,
        action: Action,
        events: &mut impl EventSink<QuestEvent>,
    ) -> Result<(), TransitionError> {
        if !self.state.permits(action) {
            return Err(TransitionError {
                from: self.state,
                action,
            });
        }
        self.apply(action, events);
        Ok(())
    }

    pub fn start_game(
        &mut self,
        events: &mut impl EventSink<QuestEvent>,
    ) -> Result<(), TransitionError> {
        self.perform(Action::StartGame, events)
    }

    pub fn pause(&mut self, events: &mut impl EventSink<QuestEvent>) -> Result<(), TransitionError> {
        self.perform(Action::Pause, events)
    }

    pub fn resume(&mut self, events: &mut impl EventSink<QuestEvent>) -> Result<(), TransitionError> {
        self.perform(Action::Resume, events)
    }

    pub fn restart_level(
        &mut self,
        events: &mut impl EventSink<QuestEvent>,
    ) -> Result<(), TransitionError> {
        self.perform(Action::RestartLevel, events)
    }

    pub fn next_level(
        &mut self,
        events: &mut impl EventSink<QuestEvent>,
    ) -> Result<(), TransitionError> {
        self.perform(Action::NextLevel, events)
    }

    pub fn restart_game(
        &mut self,
        events: &mut impl EventSink<QuestEvent>,
    ) -> Result<(), TransitionError> {
        self.perform(Action::RestartGame, events)
    }

    pub fn return_to_menu(
        &mut self,
        events: &mut impl EventSink<QuestEvent>,
    ) -> Result<(), TransitionError> {
        self.perform(Action::MainMenu, events)
    }

    pub fn quit(&mut self, events: &mut impl EventSink<QuestEvent>) -> Result<(), TransitionError> {
        self.perform(Action::Quit, events)
    }

    /// Carry out an action already known to be legal.
    fn apply(&mut self, action: Action, events: &mut impl EventSink<QuestEvent>) {
        match action {
            Action::StartGame | Action::RestartGame => {
                self.reset_game(events);
                self.set_state(GameState::Playing, events);
            },
            Action::ShowInstructions => self.set_state(GameState::Instructions, events),
            Action::CloseInstructions | Action::MainMenu => self.set_state(GameState::Menu, events),
            Action::Pause => self.set_state(GameState::Paused, events),
            Action::Resume => self.set_state(GameState::Playing, events),
            Action::RestartLevel => {
                events.emit(QuestEvent::EffectsCleared);
                let level = self.catalog.current_mut();
                level.reset_collectibles();
                level.reset_enemies();
                self.player.respawn();
                self.player.restore_lives();
                self.player.clear_powerups();
                self.level_timer = self.catalog.current().time_limit();
                self.rating = None;
                self.set_state(GameState::Playing, events);
            },
            Action::NextLevel => {
                events.emit(QuestEvent::EffectsCleared);
                if self.catalog.advance() {
                    self.player.restore_lives();
                    self.player.clear_powerups();
                    self.load_level();
                    self.set_state(GameState::Playing, events);
                } else {
                    self.set_state(GameState::GameComplete, events);
                }
            },
            Action::Quit => {
                tracing::info!("Quit requested");
                self.quit_requested = true;
                events.emit(QuestEvent::QuitRequested);
            },
        }
    }

    /// Fresh player and campaign, clock at zero, first level loaded.
    fn reset_game(&mut self, events: &mut impl EventSink<QuestEvent>) {
        events.emit(QuestEvent::EffectsCleared);
        self.player = Player::new(&self.config);
        self.catalog = self.pristine.clone();
        self.game_timer = 0.0;
        self.load_level();
    }

    fn load_level(&mut self) {
        let level = self.catalog.current();
        self.level_timer = level.time_limit();
        self.rating = None;
        tracing::info!(
            number = self.catalog.current_number(),
            name = level.name(),
            "Level loaded"
        );
        self.player.respawn();
    }

    fn set_state(&mut self, to: GameState, events: &mut impl EventSink<QuestEvent>) {
        let from = self.state;
        if from == to {
            return;
        }
        self.state = to;
        tracing::info!(?from, ?to, "Game state changed");
        events.emit(QuestEvent::StateChanged { from, to });
    }

    // ================================================================
    // Input
    // ================================================================

    /// Translate one input edge into a menu move or an action for the
    /// current state. Jump edges are latched only while playing.
    fn handle_input(
        &mut self,
        event: InputEvent,
        jump: &mut bool,
        events: &mut impl EventSink<QuestEvent>,
    ) {
        let action = match (self.state, event) {
            (GameState::Menu, InputEvent::MenuUp) => {
                self.main_menu.up();
                None
            },
            (GameState::Menu, InputEvent::MenuDown) => {
                self.main_menu.down();
                None
            },
            (GameState::Menu, InputEvent::Confirm) => Some(match self.main_menu.selected() {
                MainMenuOption::StartGame => Action::StartGame,
                MainMenuOption::Instructions => Action::ShowInstructions,
                MainMenuOption::Quit => Action::Quit,
            }),
            (GameState::Instructions, InputEvent::Cancel) => Some(Action::CloseInstructions),
            (GameState::Playing, InputEvent::Pause | InputEvent::Cancel) => Some(Action::Pause),
            (GameState::Playing, InputEvent::Jump) => {
                *jump = true;
                None
            },
            (GameState::Paused, InputEvent::MenuUp) => {
                self.pause_menu.up();
                None
            },
            (GameState::Paused, InputEvent::MenuDown) => {
                self.pause_menu.down();
                None
            },
            (GameState::Paused, InputEvent::Confirm) => Some(match self.pause_menu.selected() {
                PauseOption::Resume => Action::Resume,
                PauseOption::RestartLevel => Action::RestartLevel,
                PauseOption::MainMenu => Action::MainMenu,
            }),
            (GameState::Paused, InputEvent::Cancel) => Some(Action::Resume),
            (GameState::GameOver, InputEvent::MenuUp) => {
                self.game_over_menu.up();
                None
            },
            (GameState::GameOver, InputEvent::MenuDown) => {
                self.game_over_menu.down();
                None
            },
            (GameState::GameOver, InputEvent::Confirm) => {
                Some(match self.game_over_menu.selected() {
                    GameOverOption::RestartGame => Action::RestartGame,
                    GameOverOption::MainMenu => Action::MainMenu,
                    GameOverOption::Quit => Action::Quit,
                })
            },
            (GameState::LevelComplete, InputEvent::Confirm) => Some(Action::NextLevel),
            (GameState::GameComplete, InputEvent::Confirm) => Some(Action::RestartGame),
            _ => None,
        };

        if let Some(action) = action {
            self.apply(action, events);
        }
        if !self.state.is_simulating() {
            *jump = false;
        }
    }

    // ================================================================
    // Simulation
    // ================================================================

    /// One Playing tick: timers, player, level, then win/lose evaluation.
    /// Losing wins over completing when both happen in the same tick.
    fn step(&mut self, dt: f32, input: PlayerInput, events: &mut impl EventSink<QuestEvent>) {
        self.game_timer += dt;
        self.level_timer -= dt;

        let level = self.catalog.current_mut();
        self.player.update(dt, input, level.platforms(), events);
        level.update(dt, &mut self.player, events);

        let complete = level.is_complete();
        let time_limit = level.time_limit();
        let (collected, total) = (level.crystals_collected(), level.crystal_count());

        let mut lost = self.player.lives == 0;
        if !lost && self.level_timer <= 0.0 {
            self.player.take_damage(events);
            if self.player.lives == 0 {
                lost = true;
            } else {
                self.level_timer = time_limit;
            }
        }

        if lost {
            self.set_state(GameState::GameOver, events);
        } else if complete {
            let rating = rate_level(
                collected,
                total,
                self.time_remaining(),
                self.config.rules.perfect_time_remaining,
            );
            self.rating = Some(rating);
            events.emit(QuestEvent::LevelCompleted {
                level: self.catalog.current_number(),
                rating,
            });
            self.set_state(GameState::LevelComplete, events);
        }
    }

    // ================================================================
    // Views
    // ================================================================

    pub fn hud(&self) -> Hud {
        let level = self.catalog.current();
        Hud {
            lives: self.player.lives,
            score: self.player.score,
            crystals_collected: level.crystals_collected(),
            crystals_total: level.crystal_count(),
            crystals_required: level.crystals_required(),
            level_number: self.catalog.current_number(),
            level_count: self.catalog.len(),
            time_remaining: self.time_remaining(),
            elapsed: self.game_timer,
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let level = self.catalog.current();
        let player = &self.player;
        GameSnapshot {
            state: self.state,
            level_name: level.name().to_string(),
            background: level.background(),
            hud: self.hud(),
            rating: self.rating,
            platforms: level.platforms().to_vec(),
            player: PlayerView {
                rect: player.rect(),
                vel_x: player.body.vel_x,
                vel_y: player.body.vel_y,
                on_ground: player.on_ground,
                invulnerable: player.is_invulnerable(),
                double_jump: player.powerups.double_jump.granted,
                speed_boost_remaining: player.powerups.speed_boost.remaining(),
                shield_remaining: player.powerups.shield.remaining(),
                animation_timer: player.animation_timer,
            },
            enemies: level
                .live_enemies()
                .map(|(index, e)| EnemyView {
                    index,
                    kind: e.kind(),
                    rect: e.rect(),
                    vel_x: e.body.vel_x,
                    animation_timer: e.animation_timer,
                })
                .collect(),
            crystals: level
                .crystals()
                .iter()
                .filter(|c| !c.collected)
                .map(|c| PickupView {
                    rect: c.rect(),
                    phase: c.float_offset,
                    kind: None,
                })
                .collect(),
            coins: level
                .coins()
                .iter()
                .filter(|c| !c.collected)
                .map(|c| PickupView {
                    rect: c.rect(),
                    phase: c.rotation,
                    kind: None,
                })
                .collect(),
            powerups: level
                .powerups()
                .iter()
                .filter(|p| !p.collected)
                .map(PickupView::from)
                .collect(),
            menu: MenuView {
                main: self.main_menu.index(),
                pause: self.pause_menu.index(),
                game_over: self.game_over_menu.index(),
            },
        }
    }
}

impl Simulation for CrystalQuest {
    type Event = QuestEvent;

    fn metadata(&self) -> GameMetadata {
        GameMetadata {
            name: "Crystal Quest".to_string(),
            description: "Collect the crystals in every level before time runs out!".to_string(),
            level_count: self.catalog.len(),
        }
    }

    fn tick_rate(&self) -> f32 {
        self.config.world.tick_rate_hz
    }

    fn update(&mut self, dt: f32, input: &InputFrame, events: &mut impl EventSink<Self::Event>) {
        let mut jump = false;
        for &event in &input.events {
            self.handle_input(event, &mut jump, events);
        }
        if self.state.is_simulating() {
            let input = PlayerInput {
                direction: input.held.direction(),
                jump,
            };
            self.step(dt, input, events);
        }
    }

    fn quit_requested(&self) -> bool {
        self.quit_requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crystal_quest_core::test_helpers::{FRAME_DT, press, run_ticks};
    use snapshot::{decode_snapshot, encode_snapshot};

    fn make_game() -> CrystalQuest {
        CrystalQuest::new(QuestConfig::default()).unwrap()
    }

    fn playing_game() -> CrystalQuest {
        let mut game = make_game();
        game.start_game(&mut Vec::new()).unwrap();
        game
    }

    fn tick(game: &mut CrystalQuest, frame: &InputFrame) -> Vec<QuestEvent> {
        let mut events = Vec::new();
        game.update(FRAME_DT, frame, &mut events);
        events
    }

    #[test]
    fn starts_in_menu_with_first_level_loaded() {
        let game = make_game();
        assert_eq!(game.state(), GameState::Menu);
        assert_eq!(game.level().name(), "Tutorial Valley");
        assert_eq!(game.level_timer(), 180.0);
        assert_eq!(game.metadata().level_count, 5);
        assert!(!game.quit_requested());
    }

    #[test]
    fn menu_does_not_simulate() {
        let mut game = make_game();
        let before = game.player().body;
        run_ticks(&mut game, 30, FRAME_DT, &InputFrame::idle());
        assert_eq!(game.player().body, before, "Player frozen outside Playing");
        assert_eq!(game.level_timer(), 180.0);
    }

    #[test]
    fn confirm_on_start_game_begins_play() {
        let mut game = make_game();
        let events = tick(&mut game, &press(InputEvent::Confirm));
        assert_eq!(game.state(), GameState::Playing);
        assert!(events.contains(&QuestEvent::EffectsCleared));
        assert!(events.contains(&QuestEvent::StateChanged {
            from: GameState::Menu,
            to: GameState::Playing
        }));
    }

    #[test]
    fn menu_navigation_reaches_instructions_and_back() {
        let mut game = make_game();
        tick(&mut game, &press(InputEvent::MenuDown));
        tick(&mut game, &press(InputEvent::Confirm));
        assert_eq!(game.state(), GameState::Instructions);
        tick(&mut game, &press(InputEvent::Confirm));
        assert_eq!(game.state(), GameState::Instructions, "Only cancel leaves instructions");
        tick(&mut game, &press(InputEvent::Cancel));
        assert_eq!(game.state(), GameState::Menu);
    }

    #[test]
    fn quit_from_menu_sets_flag() {
        let mut game = make_game();
        tick(&mut game, &press(InputEvent::MenuUp));
        let events = tick(&mut game, &press(InputEvent::Confirm));
        assert!(game.quit_requested());
        assert!(events.contains(&QuestEvent::QuitRequested));
    }

    #[test]
    fn pause_and_resume() {
        let mut game = playing_game();
        tick(&mut game, &press(InputEvent::Pause));
        assert_eq!(game.state(), GameState::Paused);
        let timer = game.level_timer();
        run_ticks(&mut game, 20, FRAME_DT, &InputFrame::idle());
        assert_eq!(game.level_timer(), timer, "Timer frozen while paused");
        tick(&mut game, &press(InputEvent::Cancel));
        assert_eq!(game.state(), GameState::Playing);
        tick(&mut game, &press(InputEvent::Cancel));
        assert_eq!(game.state(), GameState::Paused, "Cancel also pauses");
    }

    #[test]
    fn jump_latched_before_pause_is_discarded() {
        let mut game = playing_game();
        run_ticks(&mut game, 90, FRAME_DT, &InputFrame::idle());
        assert!(game.player().on_ground);
        let frame = InputFrame::idle()
            .with_event(InputEvent::Jump)
            .with_event(InputEvent::Pause);
        tick(&mut game, &frame);
        tick(&mut game, &press(InputEvent::Cancel));
        assert!(game.player().body.vel_y >= 0.0, "No jump carried across the pause");
    }

    #[test]
    fn invalid_transition_changes_nothing() {
        let mut game = make_game();
        let mut events = Vec::new();
        let err = game.next_level(&mut events).unwrap_err();
        assert_eq!(
            err,
            TransitionError {
                from: GameState::Menu,
                action: Action::NextLevel
            }
        );
        assert!(events.is_empty());
        assert_eq!(game.state(), GameState::Menu);
        assert_eq!(game.catalog().current_index(), 0);
        assert!(game.resume(&mut events).is_err());
        assert!(game.pause(&mut events).is_err());
    }

    #[test]
    fn restart_level_resets_world_and_player() {
        let mut game = playing_game();
        let mut events = Vec::new();
        game.level_mut().enemies_mut()[0].alive = false;
        game.player_mut().lives = 1;
        game.player_mut().collect_powerup(powerups::PowerUpKind::SpeedBoost);
        game.player_mut().score = 450;
        run_ticks(&mut game, 60, FRAME_DT, &InputFrame::idle());
        game.pause(&mut events).unwrap();
        game.restart_level(&mut events).unwrap();

        assert_eq!(game.state(), GameState::Playing);
        assert!(game.level().enemies()[0].alive);
        assert_eq!(game.player().lives, 3);
        assert!(!game.player().powerups.speed_boost.is_active());
        assert_eq!(game.player().score, 450, "Score survives a level restart");
        assert_eq!(game.level_timer(), 180.0);
        assert_eq!((game.player().body.x, game.player().body.y), (50.0, 700.0));
        assert!(events.contains(&QuestEvent::EffectsCleared));
    }

    #[test]
    fn timer_expiry_costs_a_life_and_refills() {
        let mut game = playing_game();
        run_ticks(&mut game, 5, FRAME_DT, &InputFrame::idle());
        game.level_timer = 0.01;
        let events = tick(&mut game, &InputFrame::idle());
        assert_eq!(game.player().lives, 2);
        assert_eq!(game.level_timer(), 180.0);
        assert_eq!(game.state(), GameState::Playing);
        assert!(events.iter().any(|e| matches!(e, QuestEvent::PlayerDamaged { .. })));
    }

    #[test]
    fn shielded_timer_expiry_only_refills() {
        let mut game = playing_game();
        game.player_mut().collect_powerup(powerups::PowerUpKind::Shield);
        game.level_timer = 0.01;
        tick(&mut game, &InputFrame::idle());
        assert_eq!(game.player().lives, 3);
        assert_eq!(game.level_timer(), 180.0);
    }

    #[test]
    fn timer_expiry_on_last_life_ends_game() {
        let mut game = playing_game();
        game.player_mut().lives = 1;
        game.level_timer = 0.01;
        tick(&mut game, &InputFrame::idle());
        assert_eq!(game.state(), GameState::GameOver);
        assert_eq!(game.player().lives, 0);
    }

    #[test]
    fn collecting_required_crystals_completes_level() {
        let mut game = playing_game();
        for i in 0..3 {
            let (x, y) = {
                let c = &game.level().crystals()[i];
                (c.x, c.y)
            };
            let player = game.player_mut();
            player.body.x = x;
            player.body.y = y;
            player.body.stop();
            tick(&mut game, &InputFrame::idle());
        }
        assert_eq!(game.state(), GameState::LevelComplete);
        assert_eq!(game.level_rating(), Some(LevelRating::Perfect));
        assert_eq!(game.player().crystals_collected, 3);
    }

    #[test]
    fn next_level_keeps_score_and_restores_lives() {
        let mut game = playing_game();
        let mut events = Vec::new();
        game.state = GameState::LevelComplete;
        game.player_mut().score = 700;
        game.player_mut().lives = 1;
        game.player_mut().collect_powerup(powerups::PowerUpKind::DoubleJump);
        game.next_level(&mut events).unwrap();
        assert_eq!(game.state(), GameState::Playing);
        assert_eq!(game.level().name(), "Skyward Peaks");
        assert_eq!(game.player().score, 700);
        assert_eq!(game.player().lives, 3);
        assert!(!game.player().powerups.double_jump.granted);
        assert!(events.contains(&QuestEvent::EffectsCleared));
    }

    #[test]
    fn finishing_last_level_completes_game() {
        let mut game = playing_game();
        let mut events = Vec::new();
        for _ in 0..4 {
            game.state = GameState::LevelComplete;
            game.next_level(&mut events).unwrap();
        }
        assert_eq!(game.level().name(), "The Crystal Fortress");
        game.state = GameState::LevelComplete;
        game.next_level(&mut events).unwrap();
        assert_eq!(game.state(), GameState::GameComplete);
        assert_eq!(game.catalog().current_index(), 4);

        tick(&mut game, &press(InputEvent::Confirm));
        assert_eq!(game.state(), GameState::Playing);
        assert_eq!(game.catalog().current_index(), 0, "Confirm restarts the campaign");
    }

    #[test]
    fn restart_game_rebuilds_everything() {
        let mut game = playing_game();
        game.level_mut().enemies_mut()[0].alive = false;
        game.player_mut().score = 999;
        run_ticks(&mut game, 30, FRAME_DT, &InputFrame::idle());
        game.player_mut().lives = 0;
        tick(&mut game, &InputFrame::idle());
        assert_eq!(game.state(), GameState::GameOver);

        tick(&mut game, &press(InputEvent::Confirm));
        assert_eq!(game.state(), GameState::Playing);
        assert_eq!(game.player().score, 0);
        assert_eq!(game.player().lives, 3);
        assert!(game.level().enemies()[0].alive);
        assert!(game.game_timer() <= FRAME_DT * 1.5);
    }

    #[test]
    fn game_over_menu_can_return_to_menu() {
        let mut game = playing_game();
        game.player_mut().lives = 0;
        tick(&mut game, &InputFrame::idle());
        tick(&mut game, &press(InputEvent::MenuDown));
        tick(&mut game, &press(InputEvent::Confirm));
        assert_eq!(game.state(), GameState::Menu);
    }

    #[test]
    fn hud_and_snapshot_reflect_state() {
        let mut game = playing_game();
        run_ticks(&mut game, 10, FRAME_DT, &InputFrame::idle());
        let hud = game.hud();
        assert_eq!(hud.level_number, 1);
        assert_eq!(hud.level_count, 5);
        assert_eq!(hud.crystals_total, 3);
        assert_eq!(hud.lives, 3);

        let snap = game.snapshot();
        assert_eq!(snap.state, GameState::Playing);
        assert_eq!(snap.level_name, "Tutorial Valley");
        assert_eq!(snap.crystals.len(), 3);
        assert_eq!(snap.enemies.len(), 1);
        let bytes = encode_snapshot(&snap).unwrap();
        let decoded = decode_snapshot(&bytes).unwrap();
        assert_eq!(decoded.hud, snap.hud);
        assert_eq!(decoded.platforms, snap.platforms);
    }
}
