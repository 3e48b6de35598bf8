use crate::game::OpeningDeal;
use crate::scoring::Scoring;

use super::AppState;

const DELAY_STEP_MS: u64 = 100;
const MAX_DELAY_MS: u64 = 5_000;

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    Scoring,
    Opening,
    NaturalRule,
    ComputerDelayMs,
}

const MENU_ITEMS: [MenuItem; 4] =
    [MenuItem::Scoring, MenuItem::Opening, MenuItem::NaturalRule, MenuItem::ComputerDelayMs];

impl MenuItem {
    fn display(self, app: &AppState) -> String {
        match self {
            MenuItem::Scoring => format!("Scoring: {}", app.cfg_scoring.label()),
            MenuItem::Opening => format!("Opening Deal: {}", app.cfg_opening.label()),
            MenuItem::NaturalRule => {
                format!("Natural Blackjack: {}", if app.cfg_natural { "On" } else { "Off" })
            }
            MenuItem::ComputerDelayMs => format!("Computer Delay (ms): {}", app.cfg_delay_ms),
        }
    }

    // Two-valued items flip on either key.
    fn inc(self, app: &mut AppState) {
        match self {
            MenuItem::Scoring => app.cfg_scoring = next_scoring(app.cfg_scoring),
            MenuItem::Opening => app.cfg_opening = next_opening(app.cfg_opening),
            MenuItem::NaturalRule => app.cfg_natural = !app.cfg_natural,
            MenuItem::ComputerDelayMs => {
                app.cfg_delay_ms = (app.cfg_delay_ms + DELAY_STEP_MS).min(MAX_DELAY_MS);
            }
        }
    }

    fn dec(self, app: &mut AppState) {
        match self {
            MenuItem::ComputerDelayMs => {
                app.cfg_delay_ms = app.cfg_delay_ms.saturating_sub(DELAY_STEP_MS);
            }
            other => other.inc(app),
        }
    }
}

fn next_scoring(s: Scoring) -> Scoring {
    match s {
        Scoring::RawRank => Scoring::Standard,
        Scoring::Standard => Scoring::RawRank,
    }
}

fn next_opening(o: OpeningDeal) -> OpeningDeal {
    match o {
        OpeningDeal::Single => OpeningDeal::Double,
        OpeningDeal::Double => OpeningDeal::Single,
    }
}

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        MENU_ITEMS.iter().map(|item| item.display(self)).collect()
    }

    pub fn toggle_menu(&mut self) {
        self.close_help();
        self.close_history();
        self.scene = match self.scene {
            super::Scene::Menu => super::Scene::Table,
            _ => {
                self.open_menu();
                super::Scene::Menu
            }
        };
    }

    // --- Menu operations ---
    pub fn open_menu(&mut self) {
        self.close_help();
        self.close_history();
        self.menu_index = 0;
        let rules = self.config.rules;
        self.cfg_scoring = rules.scoring;
        self.cfg_opening = rules.opening;
        self.cfg_natural = rules.natural_blackjack;
        self.cfg_delay_ms = self.config.delay_ms;
        self.scene = super::Scene::Menu;
    }

    /// Store the edited rules. A game in progress keeps its rules; the next deal uses the new ones.
    pub fn apply_menu(&mut self) {
        let rules = self
            .config
            .rules
            .with_scoring(self.cfg_scoring)
            .with_opening(self.cfg_opening)
            .with_natural_blackjack(self.cfg_natural);
        let changed = rules != self.config.rules;
        self.config.rules = rules;
        self.game.set_rules(rules);
        if self.config.delay_ms != self.cfg_delay_ms {
            self.config.delay_ms = self.cfg_delay_ms;
            self.table.set_computer_delay_ms(self.cfg_delay_ms);
        }
        if changed && self.game.state() == crate::game::GameState::Playing {
            self.set_notice("Rules apply from the next game");
        }
        self.scene = super::Scene::Table;
    }

    pub fn cancel_menu(&mut self) {
        self.scene = super::Scene::Table;
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len();
    }
    pub fn menu_prev(&mut self) {
        self.menu_index = (self.menu_index + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }
    pub fn menu_inc(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.inc(self);
    }
    pub fn menu_dec(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.dec(self);
    }
}
