use crate::agents::{Action, ComputerAgent, Table};
use crate::game::{Game, GameState, OpeningDeal, Rules};
use crate::scoring::Scoring;
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Menu,
    Table,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    MenuNext,
    MenuPrev,
    MenuInc,
    MenuDec,
    MenuApply,
    MenuCancel,
    ToggleMenu,
    ToggleHelp,
    ToggleHistory,
    HistoryUp,
    HistoryDown,
    NewGame,
    Hit,
    Stand,
    DealSecond,
    Save,
    Load,
}

/// Startup settings, usually filled from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct AppConfig {
    pub rules: Rules,
    pub delay_ms: u64,
    pub save_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { rules: Rules::default(), delay_ms: 600, save_path: PathBuf::from("blackjack.sav") }
    }
}

impl AppConfig {
    pub fn new(rules: Rules, delay_ms: u64, save_path: impl Into<PathBuf>) -> Self {
        Self { rules, delay_ms, save_path: save_path.into() }
    }
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    pub started: Instant,
    // Core game engine instance
    pub game: Game,
    pub table: Table,
    pub config: AppConfig,
    // Menu config being edited
    pub menu_index: usize,
    pub cfg_scoring: Scoring,
    pub cfg_opening: OpeningDeal,
    pub cfg_natural: bool,
    pub cfg_delay_ms: u64,
    help_open: bool,
    history_open: bool,
    history_offset: usize,
    notice: Option<String>,
    action_error: Option<String>,
    action_error_at: Option<Instant>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl AppState {
    pub const HISTORY_PAGE_SIZE: usize = 20;
    const ACTION_ERROR_TTL: Duration = Duration::from_secs(3);

    pub fn new(config: AppConfig) -> Self {
        let rules = config.rules;
        Self {
            scene: Scene::Menu,
            started: Instant::now(),
            game: Game::with_rules(rules),
            table: Table::new(ComputerAgent::new(config.delay_ms)),
            menu_index: 0,
            cfg_scoring: rules.scoring,
            cfg_opening: rules.opening,
            cfg_natural: rules.natural_blackjack,
            cfg_delay_ms: config.delay_ms,
            config,
            help_open: false,
            history_open: false,
            history_offset: 0,
            notice: None,
            action_error: None,
            action_error_at: None,
        }
    }

    fn in_play(&self) -> bool {
        self.scene == Scene::Table && self.game.state() == GameState::Playing
    }

    fn queue_action(&mut self, action: Action) -> bool {
        if !self.in_play() {
            return false;
        }
        self.clear_action_error();
        self.table.receive(action)
    }

    pub fn action_error(&self) -> Option<&str> {
        self.action_error.as_deref()
    }

    /// Last informational message (saved, loaded, rules queued).
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    fn set_action_error(&mut self, msg: String) {
        self.action_error = Some(msg);
        self.action_error_at = Some(Instant::now());
    }

    fn clear_action_error(&mut self) {
        self.action_error = None;
        self.action_error_at = None;
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn history_open(&self) -> bool {
        self.history_open
    }

    pub fn history_offset(&self) -> usize {
        self.history_offset
    }

    pub(crate) fn close_help(&mut self) {
        self.help_open = false;
    }

    pub(crate) fn close_history(&mut self) {
        self.history_open = false;
    }

    /// True when the computer's first card should be drawn face down.
    pub fn computer_hole_hidden(&self) -> bool {
        self.game.state() == GameState::Playing
    }

    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleMenu => {
                self.toggle_menu();
                false
            }
            InputAction::ToggleHelp => {
                if self.scene == Scene::Table {
                    self.history_open = false;
                    self.help_open = !self.help_open;
                }
                false
            }
            InputAction::ToggleHistory => {
                if self.scene == Scene::Table {
                    self.help_open = false;
                    if !self.history_open {
                        self.history_offset = 0;
                    }
                    self.history_open = !self.history_open;
                }
                false
            }
            InputAction::HistoryUp => {
                if self.scene == Scene::Table && self.history_open {
                    let max_offset =
                        self.game.history_len().saturating_sub(Self::HISTORY_PAGE_SIZE);
                    self.history_offset = (self.history_offset + 1).min(max_offset);
                }
                false
            }
            InputAction::HistoryDown => {
                if self.scene == Scene::Table && self.history_open && self.history_offset > 0 {
                    self.history_offset -= 1;
                }
                false
            }
            InputAction::MenuNext => {
                if self.scene == Scene::Menu {
                    self.menu_next();
                }
                false
            }
            InputAction::MenuPrev => {
                if self.scene == Scene::Menu {
                    self.menu_prev();
                }
                false
            }
            InputAction::MenuInc => {
                if self.scene == Scene::Menu {
                    self.menu_inc();
                }
                false
            }
            InputAction::MenuDec => {
                if self.scene == Scene::Menu {
                    self.menu_dec();
                }
                false
            }
            InputAction::MenuApply => {
                if self.scene == Scene::Menu {
                    self.apply_menu();
                }
                false
            }
            InputAction::MenuCancel => {
                if self.scene == Scene::Menu {
                    self.cancel_menu();
                }
                false
            }
            InputAction::NewGame => {
                if self.scene == Scene::Table {
                    self.new_game();
                    return true;
                }
                false
            }
            InputAction::Hit => self.queue_action(Action::Hit),
            InputAction::Stand => self.queue_action(Action::Stand),
            InputAction::DealSecond => self.deal_second(),
            InputAction::Save => {
                if self.scene == Scene::Table {
                    self.save();
                }
                false
            }
            InputAction::Load => {
                if self.scene == Scene::Table {
                    return self.load();
                }
                false
            }
        }
    }

    /// Shuffle and deal a fresh game. Restarting mid-game abandons the current one.
    pub fn new_game(&mut self) {
        self.game.start_game();
        self.table.reset();
        self.history_offset = 0;
        self.notice = None;
        self.clear_action_error();
    }

    fn deal_second(&mut self) -> bool {
        if !self.in_play() {
            return false;
        }
        match self.game.deal_second_initial_card() {
            Ok(()) => {
                self.clear_action_error();
                true
            }
            Err(err) => {
                self.set_action_error(err.to_string());
                false
            }
        }
    }

    fn save(&mut self) {
        match self.game.save(&self.config.save_path) {
            Ok(()) => {
                self.notice = Some(format!("Saved to {}", self.config.save_path.display()));
                self.clear_action_error();
            }
            Err(err) => self.set_action_error(err.to_string()),
        }
    }

    fn load(&mut self) -> bool {
        match self.game.load(&self.config.save_path) {
            Ok(()) => {
                // The save carries its own rules; the menu's choice still governs the next deal.
                self.game.set_rules(self.config.rules);
                self.table.reset();
                self.history_offset = 0;
                self.notice = Some(format!("Loaded {}", self.config.save_path.display()));
                self.clear_action_error();
                true
            }
            Err(err) => {
                self.set_action_error(err.to_string());
                false
            }
        }
    }

    pub fn agents_on_turn(&mut self) {
        if self.scene != Scene::Table {
            return;
        }
        if let Some(at) = self.action_error_at {
            if at.elapsed() >= Self::ACTION_ERROR_TTL {
                self.clear_action_error();
            }
        }
        match self.table.on_turn(&mut self.game) {
            Ok(true) => self.clear_action_error(),
            Ok(false) => {}
            Err(err) => self.set_action_error(err.to_string()),
        }
    }

    pub(crate) fn set_notice(&mut self, msg: impl Into<String>) {
        self.notice = Some(msg.into());
    }
}
