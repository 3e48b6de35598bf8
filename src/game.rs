use crate::cards::Card;
use crate::deck::{Deck, DeckError, DECK_SIZE};
use crate::player::{Player, Seat};
use crate::policy::ComputerPolicy;
use crate::scoring::{Scoring, TWENTY_ONE};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

/// Outcome-bearing game state. `Playing` is the only non-terminal state after a start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    NotStarted,
    Playing,
    HumanBust,
    ComputerBust,
    HumanWin,
    ComputerWin,
    Draw,
}

impl GameState {
    pub const ALL: [GameState; 7] = [
        GameState::NotStarted,
        GameState::Playing,
        GameState::HumanBust,
        GameState::ComputerBust,
        GameState::HumanWin,
        GameState::ComputerWin,
        GameState::Draw,
    ];

    /// True for the five outcome states.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameState::NotStarted | GameState::Playing)
    }

    /// The side that won, if the game is decided and not drawn.
    pub fn winner(self) -> Option<Seat> {
        match self {
            GameState::HumanWin | GameState::ComputerBust => Some(Seat::Human),
            GameState::ComputerWin | GameState::HumanBust => Some(Seat::Computer),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GameState::NotStarted => "Not started",
            GameState::Playing => "Playing",
            GameState::HumanBust => "You bust, computer wins",
            GameState::ComputerBust => "Computer busts, you win",
            GameState::HumanWin => "You win",
            GameState::ComputerWin => "Computer wins",
            GameState::Draw => "Draw",
        }
    }

    pub(crate) fn to_byte(self) -> u8 {
        match self {
            GameState::NotStarted => 0,
            GameState::Playing => 1,
            GameState::HumanBust => 2,
            GameState::ComputerBust => 3,
            GameState::HumanWin => 4,
            GameState::ComputerWin => 5,
            GameState::Draw => 6,
        }
    }

    pub(crate) fn from_byte(b: u8) -> Option<GameState> {
        GameState::ALL.get(usize::from(b)).copied()
    }
}

/// How many cards each side receives on `start_game`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OpeningDeal {
    #[default]
    Single,
    Double,
}

impl OpeningDeal {
    pub fn cards(self) -> usize {
        match self {
            OpeningDeal::Single => 1,
            OpeningDeal::Double => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OpeningDeal::Single => "One card",
            OpeningDeal::Double => "Two cards",
        }
    }
}

/// House rules for a game. Changes apply from the next `start_game`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub struct Rules {
    pub scoring: Scoring,
    pub opening: OpeningDeal,
    /// Resolve a two-card 21 immediately once both opening hands hold two cards.
    pub natural_blackjack: bool,
    /// Seeds the shuffle and the computer policy. `None` uses OS entropy.
    pub seed: Option<u64>,
}

impl Rules {
    pub fn with_scoring(mut self, scoring: Scoring) -> Self {
        self.scoring = scoring;
        self
    }

    pub fn with_opening(mut self, opening: OpeningDeal) -> Self {
        self.opening = opening;
        self
    }

    pub fn with_natural_blackjack(mut self, enabled: bool) -> Self {
        self.natural_blackjack = enabled;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActionError {
    #[error("game is not in progress ({0:?})")]
    NotPlaying(GameState),
    #[error("{0} already standing")]
    AlreadyStanding(Seat),
    #[error("opening cards already dealt")]
    OpeningAlreadyDealt,
    #[error("deck contains {0} more than once")]
    DuplicateCard(Card),
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// What the computer did on a `computer_hit` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComputerMove {
    Hit(Card),
    Stand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum EventVerb {
    Deal,
    Hit,
    Stand,
    Bust,
    Natural,
    Win,
    Draw,
    Reshuffle,
}

impl EventVerb {
    pub fn label(self) -> &'static str {
        match self {
            EventVerb::Deal => "Dealt",
            EventVerb::Hit => "Hit",
            EventVerb::Stand => "Stand",
            EventVerb::Bust => "Bust",
            EventVerb::Natural => "Blackjack",
            EventVerb::Win => "Win",
            EventVerb::Draw => "Draw",
            EventVerb::Reshuffle => "Reshuffle",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct GameEvent {
    /// `None` for table-level events (draws, reshuffles).
    pub seat: Option<Seat>,
    pub verb: EventVerb,
    pub card: Option<Card>,
}

/// The rules engine: one deck, a human and a computer player, and the state machine.
#[derive(Debug)]
#[non_exhaustive]
pub struct Game {
    pub(crate) rules: Rules,
    pub(crate) next_rules: Option<Rules>,
    pub(crate) deck: Deck,
    pub(crate) human: Player,
    pub(crate) computer: Player,
    pub(crate) state: GameState,
    /// Decision rolled by `check_computer_wants_to_hit`, committed by the next `computer_hit`.
    pub(crate) pending_computer: Option<bool>,
    rng: ChaCha8Rng,
    history: Vec<GameEvent>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self::with_rules(Rules::default())
    }

    pub fn with_rules(rules: Rules) -> Self {
        let (rng, policy) = seeded_sources(rules.seed);
        Self {
            rules,
            next_rules: None,
            deck: Deck::standard(),
            human: Player::human(),
            computer: Player::computer(policy),
            state: GameState::NotStarted,
            pending_computer: None,
            rng,
            history: Vec::new(),
        }
    }

    /// Returns the rules of the current game
    pub fn rules(&self) -> Rules {
        self.rules
    }

    /// Queue rules for the next `start_game`.
    pub fn set_rules(&mut self, rules: Rules) {
        self.next_rules = Some(rules);
    }

    /// Returns the current game state
    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn human(&self) -> &Player {
        &self.human
    }

    pub fn computer(&self) -> &Player {
        &self.computer
    }

    pub fn player(&self, seat: Seat) -> &Player {
        match seat {
            Seat::Human => &self.human,
            Seat::Computer => &self.computer,
        }
    }

    pub fn human_hand(&self) -> &[Card] {
        self.human.hand()
    }

    pub fn computer_hand(&self) -> &[Card] {
        self.computer.hand()
    }

    pub fn human_score(&self) -> u32 {
        self.human.score(self.rules.scoring)
    }

    pub fn computer_score(&self) -> u32 {
        self.computer.score(self.rules.scoring)
    }

    /// Cards left to draw before the shoe is rebuilt
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    /// The decision announced by `check_computer_wants_to_hit`, not yet committed.
    pub fn pending_computer_decision(&self) -> Option<bool> {
        self.pending_computer
    }

    /// True once the game is decided, or while both sides stand awaiting `finalize_game`.
    pub fn is_game_over(&self) -> bool {
        self.state != GameState::Playing || (self.human.standing && self.computer.standing)
    }

    pub fn history(&self) -> &[GameEvent] {
        &self.history
    }

    pub fn history_recent(&self, n: usize) -> Vec<GameEvent> {
        if n == 0 {
            return Vec::new();
        }
        let len = self.history.len();
        let start = len.saturating_sub(n);
        self.history[start..].to_vec()
    }

    pub fn history_recent_offset(&self, n: usize, offset: usize) -> Vec<GameEvent> {
        if n == 0 {
            return Vec::new();
        }
        let len = self.history.len();
        if len == 0 {
            return Vec::new();
        }
        let max_offset = len.saturating_sub(n);
        let offset = offset.min(max_offset);
        let end = len.saturating_sub(offset);
        let start = end.saturating_sub(n);
        self.history[start..end].to_vec()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Reset both players, shuffle a fresh deck and deal the opening cards.
    pub fn start_game(&mut self) {
        self.apply_next_rules();
        let deck = Deck::new_shuffled(&mut self.rng);
        // A full 52-card deck always covers the opening deal.
        if let Err(err) = self.begin(deck) {
            log::error!("failed to deal a fresh deck: {err}");
        }
    }

    /// Like `start_game`, dealing from `deck` in its given order instead of a shuffled one.
    pub fn start_with_deck(&mut self, deck: Deck) -> Result<(), ActionError> {
        let mut seen = HashSet::with_capacity(deck.len());
        for card in deck.remaining() {
            if !seen.insert(card) {
                return Err(ActionError::DuplicateCard(card));
            }
        }
        self.apply_next_rules();
        self.begin(deck)
    }

    fn apply_next_rules(&mut self) {
        let Some(next) = self.next_rules.take() else {
            return;
        };
        if next.seed.is_some() && next.seed != self.rules.seed {
            let (rng, policy) = seeded_sources(next.seed);
            self.rng = rng;
            self.computer.policy = Some(policy);
        }
        self.rules = next;
    }

    fn begin(&mut self, deck: Deck) -> Result<(), ActionError> {
        self.human.reset();
        self.computer.reset();
        self.pending_computer = None;
        self.history.clear();
        self.deck = deck;
        self.state = GameState::Playing;
        for _ in 0..self.rules.opening.cards() {
            self.deal_to(Seat::Human)?;
            self.deal_to(Seat::Computer)?;
        }
        log::info!(
            "new game: human {} ({}), computer holds {} card(s)",
            crate::cards::format_cards(self.human.hand()),
            self.human_score(),
            self.computer.hand.len()
        );
        if self.rules.opening == OpeningDeal::Double {
            self.check_natural();
        }
        Ok(())
    }

    fn ensure_playing(&self) -> Result<(), ActionError> {
        if self.state != GameState::Playing {
            return Err(ActionError::NotPlaying(self.state));
        }
        Ok(())
    }

    /// Draw the top card, rebuilding the shoe from cards not in play when it runs dry.
    fn draw_card(&mut self) -> Result<Card, DeckError> {
        match self.deck.try_draw() {
            Ok(card) => Ok(card),
            Err(DeckError::Exhausted) => {
                let held: Vec<Card> =
                    self.human.hand.iter().chain(self.computer.hand.iter()).copied().collect();
                log::warn!("deck exhausted; reshuffling {} cards not in play", DECK_SIZE - held.len());
                self.deck = Deck::standard_excluding(&held);
                self.deck.shuffle_with(&mut self.rng);
                self.record(None, EventVerb::Reshuffle, None);
                self.deck.try_draw()
            }
        }
    }

    fn player_mut(&mut self, seat: Seat) -> &mut Player {
        match seat {
            Seat::Human => &mut self.human,
            Seat::Computer => &mut self.computer,
        }
    }

    fn deal_to(&mut self, seat: Seat) -> Result<Card, ActionError> {
        let card = self.draw_card()?;
        if seat == Seat::Computer {
            // An announced decision was rolled against the old total.
            self.pending_computer = None;
        }
        self.player_mut(seat).add_card(card);
        self.record(Some(seat), EventVerb::Deal, Some(card));
        Ok(card)
    }

    /// Deal the second opening card to both sides.
    pub fn deal_second_initial_card(&mut self) -> Result<(), ActionError> {
        self.ensure_playing()?;
        if self.human.hand.len() != 1 || self.computer.hand.len() != 1 {
            return Err(ActionError::OpeningAlreadyDealt);
        }
        self.deal_to(Seat::Human)?;
        self.deal_to(Seat::Computer)?;
        self.check_natural();
        Ok(())
    }

    /// Top the computer up to two cards. Returns the card dealt, or `None`
    /// when the computer already holds more than one.
    pub fn deal_computer_second_card(&mut self) -> Result<Option<Card>, ActionError> {
        self.ensure_playing()?;
        if self.computer.hand.len() != 1 {
            return Ok(None);
        }
        let card = self.deal_to(Seat::Computer)?;
        self.check_natural();
        Ok(Some(card))
    }

    fn check_natural(&mut self) {
        if !self.rules.natural_blackjack || self.state != GameState::Playing {
            return;
        }
        let scoring = self.rules.scoring;
        let human = scoring.is_natural(&self.human.hand);
        let computer = scoring.is_natural(&self.computer.hand);
        if human {
            self.record(Some(Seat::Human), EventVerb::Natural, None);
        }
        if computer {
            self.record(Some(Seat::Computer), EventVerb::Natural, None);
        }
        match (human, computer) {
            (true, true) => self.conclude(GameState::Draw),
            (true, false) => self.conclude(GameState::HumanWin),
            (false, true) => self.conclude(GameState::ComputerWin),
            (false, false) => {}
        }
    }

    pub fn human_hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_playing()?;
        if self.human.standing {
            return Err(ActionError::AlreadyStanding(Seat::Human));
        }
        let card = self.draw_card()?;
        self.human.add_card(card);
        self.record(Some(Seat::Human), EventVerb::Hit, Some(card));
        let score = self.human_score();
        log::debug!("human hits {card}, total {score}");
        if score > TWENTY_ONE {
            self.record(Some(Seat::Human), EventVerb::Bust, None);
            self.conclude(GameState::HumanBust);
        }
        Ok(card)
    }

    /// Standing again is accepted and changes nothing.
    pub fn human_stand(&mut self) -> Result<(), ActionError> {
        self.ensure_playing()?;
        if !self.human.standing {
            self.human.stand();
            self.record(Some(Seat::Human), EventVerb::Stand, None);
            log::debug!("human stands on {}", self.human_score());
        }
        Ok(())
    }

    /// Roll the computer's next decision without acting on it. Repeated calls
    /// return the same answer until `computer_hit` commits it.
    pub fn check_computer_wants_to_hit(&mut self) -> Result<bool, ActionError> {
        self.ensure_playing()?;
        if self.computer.standing {
            return Err(ActionError::AlreadyStanding(Seat::Computer));
        }
        if let Some(decision) = self.pending_computer {
            return Ok(decision);
        }
        let decision = self.computer.wants_hit(self.rules.scoring).unwrap_or(false);
        self.pending_computer = Some(decision);
        Ok(decision)
    }

    /// Let the computer hit or stand, committing a pending decision if one was announced.
    pub fn computer_hit(&mut self) -> Result<ComputerMove, ActionError> {
        let wants_hit = self.check_computer_wants_to_hit()?;
        self.pending_computer = None;
        if !wants_hit {
            self.computer.stand();
            self.record(Some(Seat::Computer), EventVerb::Stand, None);
            log::debug!("computer stands on {}", self.computer_score());
            return Ok(ComputerMove::Stand);
        }
        let card = self.draw_card()?;
        self.computer.add_card(card);
        self.record(Some(Seat::Computer), EventVerb::Hit, Some(card));
        let score = self.computer_score();
        log::debug!("computer hits {card}, total {score}");
        if score > TWENTY_ONE {
            self.record(Some(Seat::Computer), EventVerb::Bust, None);
            self.conclude(GameState::ComputerBust);
        }
        Ok(ComputerMove::Hit(card))
    }

    /// Run `computer_hit` until the computer stands or the game is decided.
    pub fn play_computer_turn(&mut self) -> Result<Vec<ComputerMove>, ActionError> {
        let mut moves = Vec::new();
        while self.state == GameState::Playing && !self.computer.standing {
            moves.push(self.computer_hit()?);
        }
        Ok(moves)
    }

    /// Compare totals once both sides stand. No-op in any other situation.
    pub fn finalize_game(&mut self) -> GameState {
        if self.state == GameState::Playing && self.human.standing && self.computer.standing {
            let human = self.human_score();
            let computer = self.computer_score();
            let outcome = match human.cmp(&computer) {
                std::cmp::Ordering::Greater => GameState::HumanWin,
                std::cmp::Ordering::Less => GameState::ComputerWin,
                std::cmp::Ordering::Equal => GameState::Draw,
            };
            self.conclude(outcome);
        }
        self.state
    }

    fn conclude(&mut self, outcome: GameState) {
        self.state = outcome;
        self.pending_computer = None;
        match outcome.winner() {
            Some(seat) => self.record(Some(seat), EventVerb::Win, None),
            None => self.record(None, EventVerb::Draw, None),
        }
        log::info!(
            "game over: {} (human {}, computer {})",
            outcome.label(),
            self.human_score(),
            self.computer_score()
        );
    }

    fn record(&mut self, seat: Option<Seat>, verb: EventVerb, card: Option<Card>) {
        self.history.push(GameEvent { seat, verb, card });
    }

    /// Overwrite every piece of game state at once; used by snapshot restore.
    pub(crate) fn replace_state(
        &mut self,
        rules: Rules,
        state: GameState,
        human: (Vec<Card>, bool),
        computer: (Vec<Card>, bool),
        deck: Deck,
    ) {
        self.rules = rules;
        self.next_rules = None;
        self.state = state;
        self.human.hand = human.0;
        self.human.standing = human.1;
        self.computer.hand = computer.0;
        self.computer.standing = computer.1;
        self.deck = deck;
        self.pending_computer = None;
        self.history.clear();
    }
}

fn seeded_sources(seed: Option<u64>) -> (ChaCha8Rng, ComputerPolicy) {
    match seed {
        Some(s) => (ChaCha8Rng::seed_from_u64(s), ComputerPolicy::with_seed(s.rotate_left(32))),
        None => {
            let mut seed = [0u8; 32];
            rand::rng().fill_bytes(&mut seed);
            (ChaCha8Rng::from_seed(seed), ComputerPolicy::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn stacked(s: &str) -> Deck {
        Deck::from_cards(parse_cards(s).unwrap())
    }

    fn mk_game(rules: Rules) -> Game {
        Game::with_rules(rules.with_seed(11))
    }

    #[test]
    fn new_game_is_not_started() {
        let g = Game::new();
        assert_eq!(g.state(), GameState::NotStarted);
        assert!(g.is_game_over());
        assert!(g.human_hand().is_empty());
    }

    #[test]
    fn start_deals_one_card_each_by_default() {
        let mut g = mk_game(Rules::default());
        g.start_game();
        assert_eq!(g.state(), GameState::Playing);
        assert_eq!(g.human_hand().len(), 1);
        assert_eq!(g.computer_hand().len(), 1);
        assert_eq!(g.deck_len(), 50);
        assert_eq!(g.history_len(), 2);
    }

    #[test]
    fn actions_rejected_before_start() {
        let mut g = mk_game(Rules::default());
        assert_eq!(g.human_hit(), Err(ActionError::NotPlaying(GameState::NotStarted)));
        assert_eq!(g.human_stand(), Err(ActionError::NotPlaying(GameState::NotStarted)));
        assert!(g.computer_hit().is_err());
        assert_eq!(g.finalize_game(), GameState::NotStarted);
    }

    #[test]
    fn human_bust_is_immediate_and_blocks_further_hits() {
        let mut g = mk_game(Rules::default());
        g.start_with_deck(stacked("10h 5c 9d 4s 5s")).unwrap();
        g.human_hit().unwrap();
        assert_eq!(g.state(), GameState::Playing);
        g.human_hit().unwrap();
        assert_eq!(g.human_score(), 23);
        assert_eq!(g.state(), GameState::HumanBust);
        assert_eq!(g.human_hit(), Err(ActionError::NotPlaying(GameState::HumanBust)));
        assert_eq!(g.human_hand().len(), 3);
    }

    #[test]
    fn hit_after_stand_is_rejected() {
        let mut g = mk_game(Rules::default());
        g.start_game();
        g.human_stand().unwrap();
        assert_eq!(g.human_hit(), Err(ActionError::AlreadyStanding(Seat::Human)));
        // a second stand is harmless
        g.human_stand().unwrap();
        assert_eq!(g.state(), GameState::Playing);
    }

    #[test]
    fn announced_decision_is_the_one_committed() {
        let mut g = mk_game(Rules::default());
        g.start_game();
        for _ in 0..10 {
            if g.state() != GameState::Playing || g.computer().is_standing() {
                break;
            }
            let announced = g.check_computer_wants_to_hit().unwrap();
            assert_eq!(g.check_computer_wants_to_hit().unwrap(), announced);
            let mv = g.computer_hit().unwrap();
            assert_eq!(matches!(mv, ComputerMove::Hit(_)), announced);
            assert_eq!(g.pending_computer_decision(), None);
        }
    }

    #[test]
    fn finalize_compares_totals_and_is_idempotent() {
        let mut g = mk_game(Rules::default().with_opening(OpeningDeal::Double));
        g.start_with_deck(stacked("10h 10s 7d 7c")).unwrap();
        g.human_stand().unwrap();
        g.computer.stand();
        assert!(g.is_game_over());
        assert_eq!(g.finalize_game(), GameState::Draw);
        assert_eq!(g.finalize_game(), GameState::Draw);
        assert_eq!(g.history().last().map(|e| e.verb), Some(EventVerb::Draw));
    }

    #[test]
    fn finalize_waits_for_both_sides() {
        let mut g = mk_game(Rules::default());
        g.start_game();
        g.human_stand().unwrap();
        assert!(!g.is_game_over());
        assert_eq!(g.finalize_game(), GameState::Playing);
    }

    #[test]
    fn exhausted_deck_rebuilds_without_cards_in_play() {
        let mut g = mk_game(Rules::default());
        g.start_with_deck(stacked("2h 3c")).unwrap();
        let card = g.human_hit().unwrap();
        let held: Vec<Card> = parse_cards("2h 3c").unwrap();
        assert!(!held.contains(&card));
        assert_eq!(g.deck_len(), 49);
        assert!(g.history().iter().any(|e| e.verb == EventVerb::Reshuffle));
    }

    #[test]
    fn duplicate_cards_in_a_supplied_deck_are_rejected() {
        let mut g = mk_game(Rules::default());
        let err = g.start_with_deck(stacked("2h 3c 2h")).unwrap_err();
        assert!(matches!(err, ActionError::DuplicateCard(_)));
        assert_eq!(g.state(), GameState::NotStarted);
    }

    #[test]
    fn queued_rules_apply_on_next_start() {
        let mut g = mk_game(Rules::default());
        g.start_game();
        g.set_rules(Rules::default().with_scoring(Scoring::RawRank));
        assert_eq!(g.rules().scoring, Scoring::Standard);
        g.start_game();
        assert_eq!(g.rules().scoring, Scoring::RawRank);
    }

    #[test]
    fn computer_second_card_only_tops_up_a_single_card() {
        let mut g = mk_game(Rules::default());
        g.start_with_deck(stacked("9h 4c 6d 8s")).unwrap();
        assert!(g.deal_computer_second_card().unwrap().is_some());
        assert_eq!(g.computer_hand().len(), 2);
        assert_eq!(g.deal_computer_second_card().unwrap(), None);
        assert_eq!(g.deal_second_initial_card(), Err(ActionError::OpeningAlreadyDealt));
    }

    #[test]
    fn topping_up_discards_a_decision_rolled_on_the_old_total() {
        let mut g = mk_game(Rules::default());
        g.start_with_deck(stacked("5h 10c Ac 9d")).unwrap();
        assert!(g.check_computer_wants_to_hit().unwrap(), "a lone ten always hits");
        g.deal_computer_second_card().unwrap();
        assert_eq!(g.computer_score(), 21);
        assert_eq!(g.pending_computer_decision(), None);
        assert_eq!(g.computer_hit().unwrap(), ComputerMove::Stand);
    }

    #[test]
    fn second_opening_card_discards_a_pending_decision() {
        let mut g = mk_game(Rules::default());
        g.start_with_deck(stacked("5h 10c 6d Ac 9d")).unwrap();
        assert!(g.check_computer_wants_to_hit().unwrap());
        g.deal_second_initial_card().unwrap();
        assert_eq!(g.computer_score(), 21);
        assert_eq!(g.computer_hit().unwrap(), ComputerMove::Stand);
        assert_eq!(g.computer_hand().len(), 2);
    }

    #[test]
    fn recent_history_returns_the_tail() {
        let mut g = mk_game(Rules::default());
        g.start_with_deck(stacked("5h 10c 6d")).unwrap();
        g.human_hit().unwrap();
        let recent = g.history_recent(2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[1].verb, EventVerb::Hit);
        assert_eq!(recent[0].seat, Some(Seat::Computer));
        assert_eq!(g.history_recent(10).len(), 3);
        assert!(g.history_recent(0).is_empty());
    }

    #[test]
    fn state_bytes_cover_all_states() {
        for s in GameState::ALL {
            assert_eq!(GameState::from_byte(s.to_byte()), Some(s));
        }
        assert_eq!(GameState::from_byte(7), None);
    }
}
