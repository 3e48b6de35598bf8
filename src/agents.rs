//! Agents: the human and computer sides as pluggable controllers.
//!
//! A [`Table`] alternates turns between a [`HumanAgent`] (fed intents from a UI)
//! and a [`ComputerAgent`] (paced calls into the engine's policy). Once the
//! human stands, the computer keeps the turn and acts once per tick until it
//! stands or busts; when both stand the table finalizes the game. All pacing
//! lives here, the engine itself never waits.

use crate::engine::GameEngine;
use crate::game::{ActionError, GameState};
use crate::player::Seat;
use std::time::{Duration, Instant};

/// Kinds of agents attached to seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AgentKind {
    Human,
    Computer,
}

/// Seat-level action intents, typically produced by a UI for the human.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Action {
    Hit,
    Stand,
}

/// A seat controller that can act when it holds the turn.
pub trait PlayerAgent {
    /// Returns `Ok(true)` when the engine was mutated.
    fn on_turn(&mut self, engine: &mut dyn GameEngine) -> Result<bool, ActionError>;
    /// The kind of this agent (human, computer).
    fn kind(&self) -> AgentKind {
        AgentKind::Human
    }
    /// Optionally receive an action intent; default is to ignore and return false.
    fn receive(&mut self, _action: Action) -> bool {
        false
    }
}

/// Executes user-intended actions when it's the human's turn.
#[derive(Debug, Default)]
pub struct HumanAgent {
    pending: Option<Action>,
}

impl HumanAgent {
    pub fn new() -> Self {
        Self { pending: None }
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }
}

impl PlayerAgent for HumanAgent {
    fn kind(&self) -> AgentKind {
        AgentKind::Human
    }
    fn receive(&mut self, action: Action) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(action);
        true
    }
    fn on_turn(&mut self, engine: &mut dyn GameEngine) -> Result<bool, ActionError> {
        if engine.state() != GameState::Playing {
            self.pending = None;
            return Ok(false);
        }
        match self.pending.take() {
            Some(Action::Hit) => engine.human_hit().map(|_| true),
            Some(Action::Stand) => engine.human_stand().map(|_| true),
            None => Ok(false),
        }
    }
}

/// Drives the computer through the engine, announcing each decision `delay`
/// before committing it.
#[derive(Debug)]
pub struct ComputerAgent {
    delay: Duration,
    top_up_opening: bool,
    next_action_at: Option<Instant>,
    announced: Option<bool>,
}

impl ComputerAgent {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            top_up_opening: true,
            next_action_at: None,
            announced: None,
        }
    }

    /// Whether a lone opening card is topped up to two before the first decision.
    pub fn with_top_up_opening(mut self, enabled: bool) -> Self {
        self.top_up_opening = enabled;
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// The decision announced for the next action, if one is waiting out its delay.
    pub fn announced(&self) -> Option<bool> {
        self.announced
    }

    pub fn clear(&mut self) {
        self.next_action_at = None;
        self.announced = None;
    }
}

impl Default for ComputerAgent {
    fn default() -> Self {
        Self::new(0)
    }
}

impl PlayerAgent for ComputerAgent {
    fn kind(&self) -> AgentKind {
        AgentKind::Computer
    }
    fn on_turn(&mut self, engine: &mut dyn GameEngine) -> Result<bool, ActionError> {
        if engine.state() != GameState::Playing || engine.computer_standing() {
            self.clear();
            return Ok(false);
        }
        let now = Instant::now();
        if !self.delay.is_zero() {
            match self.next_action_at {
                None => {
                    if !(self.top_up_opening && engine.computer_hand().len() == 1) {
                        self.announced = Some(engine.check_computer_wants_to_hit()?);
                    }
                    self.next_action_at = Some(now + self.delay);
                    return Ok(false);
                }
                Some(next) if now < next => return Ok(false),
                Some(_) => {}
            }
        }
        self.clear();
        if self.top_up_opening && engine.computer_hand().len() == 1 {
            return engine.deal_computer_second_card().map(|c| c.is_some());
        }
        engine.computer_hit().map(|_| true)
    }
}

/// Coordinates the two agents and whose turn it is.
#[derive(Debug)]
pub struct Table {
    human: HumanAgent,
    computer: ComputerAgent,
    turn: Seat,
}

impl Table {
    pub fn new(computer: ComputerAgent) -> Self {
        Self { human: HumanAgent::new(), computer, turn: Seat::Human }
    }

    pub fn turn(&self) -> Seat {
        self.turn
    }

    pub fn computer_agent(&self) -> &ComputerAgent {
        &self.computer
    }

    /// Change the computer's pacing. Drops any announced decision that was still waiting.
    pub fn set_computer_delay_ms(&mut self, delay_ms: u64) {
        self.computer.clear();
        self.computer.delay = Duration::from_millis(delay_ms);
    }

    /// Forward an intent to the human agent. Ignored unless it is the human's turn.
    pub fn receive(&mut self, action: Action) -> bool {
        if self.turn != Seat::Human {
            return false;
        }
        self.human.receive(action)
    }

    /// Call after `start_game` or a restore.
    pub fn reset(&mut self) {
        self.human.clear();
        self.computer.clear();
        self.turn = Seat::Human;
    }

    /// Drive whichever agent holds the turn. Returns true when the engine changed.
    pub fn on_turn(&mut self, engine: &mut dyn GameEngine) -> Result<bool, ActionError> {
        if engine.state() != GameState::Playing {
            self.human.clear();
            self.computer.clear();
            return Ok(false);
        }
        if engine.is_game_over() {
            engine.finalize_game();
            return Ok(true);
        }
        let acted = match self.turn {
            Seat::Human if engine.human_standing() => {
                self.turn = Seat::Computer;
                false
            }
            Seat::Human => {
                let acted = self.human.on_turn(engine)?;
                if acted && !engine.computer_standing() {
                    self.turn = Seat::Computer;
                }
                acted
            }
            Seat::Computer if engine.computer_standing() => {
                self.turn = Seat::Human;
                false
            }
            Seat::Computer => {
                let acted = self.computer.on_turn(engine)?;
                if acted && !engine.human_standing() {
                    self.turn = Seat::Human;
                }
                acted
            }
        };
        if engine.state() == GameState::Playing && engine.is_game_over() {
            engine.finalize_game();
            return Ok(true);
        }
        Ok(acted)
    }
}
