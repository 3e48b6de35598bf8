// Engine API boundary. Front-ends (TUI, console loops, agents) drive the game
// through this trait so they never reach into the deck or players directly.
// It is implemented for the core `Game` type.

use crate::cards::Card;
use crate::game::{ActionError, ComputerMove, GameState};

pub trait GameEngine {
    // Game lifecycle
    fn start_game(&mut self);
    fn finalize_game(&mut self) -> GameState;

    // Human actions
    fn human_hit(&mut self) -> Result<Card, ActionError>;
    fn human_stand(&mut self) -> Result<(), ActionError>;

    // Computer actions
    fn computer_hit(&mut self) -> Result<ComputerMove, ActionError>;
    fn check_computer_wants_to_hit(&mut self) -> Result<bool, ActionError>;
    fn deal_computer_second_card(&mut self) -> Result<Option<Card>, ActionError>;
    fn deal_second_initial_card(&mut self) -> Result<(), ActionError>;

    // Queries
    fn state(&self) -> GameState;
    fn human_hand(&self) -> &[Card];
    fn computer_hand(&self) -> &[Card];
    fn human_score(&self) -> u32;
    fn computer_score(&self) -> u32;
    fn human_standing(&self) -> bool;
    fn computer_standing(&self) -> bool;
    fn is_game_over(&self) -> bool;
}

impl GameEngine for crate::game::Game {
    fn start_game(&mut self) {
        self.start_game();
    }
    fn finalize_game(&mut self) -> GameState {
        self.finalize_game()
    }

    fn human_hit(&mut self) -> Result<Card, ActionError> {
        self.human_hit()
    }
    fn human_stand(&mut self) -> Result<(), ActionError> {
        self.human_stand()
    }

    fn computer_hit(&mut self) -> Result<ComputerMove, ActionError> {
        self.computer_hit()
    }
    fn check_computer_wants_to_hit(&mut self) -> Result<bool, ActionError> {
        self.check_computer_wants_to_hit()
    }
    fn deal_computer_second_card(&mut self) -> Result<Option<Card>, ActionError> {
        self.deal_computer_second_card()
    }
    fn deal_second_initial_card(&mut self) -> Result<(), ActionError> {
        self.deal_second_initial_card()
    }

    fn state(&self) -> GameState {
        self.state()
    }
    fn human_hand(&self) -> &[Card] {
        self.human_hand()
    }
    fn computer_hand(&self) -> &[Card] {
        self.computer_hand()
    }
    fn human_score(&self) -> u32 {
        self.human_score()
    }
    fn computer_score(&self) -> u32 {
        self.computer_score()
    }
    fn human_standing(&self) -> bool {
        self.human().is_standing()
    }
    fn computer_standing(&self) -> bool {
        self.computer().is_standing()
    }
    fn is_game_over(&self) -> bool {
        self.is_game_over()
    }
}
