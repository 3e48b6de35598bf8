use crate::cards::Card;
use crate::policy::ComputerPolicy;
use crate::scoring::Scoring;
use std::fmt;

/// The two sides of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    Human,
    Computer,
}

impl Seat {
    pub fn label(self) -> &'static str {
        match self {
            Seat::Human => "You",
            Seat::Computer => "Computer",
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A hand plus a standing flag. The computer carries a [`ComputerPolicy`]; the
/// human has none and is driven from outside.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Player {
    pub(crate) seat: Seat,
    pub(crate) hand: Vec<Card>,
    pub(crate) standing: bool,
    pub(crate) policy: Option<ComputerPolicy>,
}

impl Player {
    pub fn human() -> Self {
        Self { seat: Seat::Human, hand: Vec::new(), standing: false, policy: None }
    }

    pub fn computer(policy: ComputerPolicy) -> Self {
        Self { seat: Seat::Computer, hand: Vec::new(), standing: false, policy: Some(policy) }
    }

    pub fn seat(&self) -> Seat {
        self.seat
    }

    /// Returns the cards held, in the order they were dealt
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn is_standing(&self) -> bool {
        self.standing
    }

    pub fn score(&self, scoring: Scoring) -> u32 {
        scoring.score(&self.hand)
    }

    pub fn is_computer(&self) -> bool {
        self.policy.is_some()
    }

    pub(crate) fn add_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    pub(crate) fn stand(&mut self) {
        self.standing = true;
    }

    /// Clears the hand and the standing flag; the policy and its RNG stream are kept.
    pub(crate) fn reset(&mut self) {
        self.hand.clear();
        self.standing = false;
    }

    /// Ask the policy for a decision. `None` for the human.
    pub(crate) fn wants_hit(&mut self, scoring: Scoring) -> Option<bool> {
        let score = scoring.score(&self.hand);
        self.policy.as_mut().map(|p| p.should_hit(score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    #[test]
    fn reset_clears_hand_and_standing() {
        let mut p = Player::human();
        for c in parse_cards("10h 9d").unwrap() {
            p.add_card(c);
        }
        p.stand();
        assert_eq!(p.score(Scoring::Standard), 19);
        assert!(p.is_standing());
        p.reset();
        assert!(p.hand().is_empty());
        assert!(!p.is_standing());
    }

    #[test]
    fn only_the_computer_decides() {
        let mut h = Player::human();
        let mut c = Player::computer(ComputerPolicy::with_seed(3));
        assert_eq!(h.wants_hit(Scoring::Standard), None);
        // empty hand scores 0 and always hits
        assert_eq!(c.wants_hit(Scoring::Standard), Some(true));
        assert!(c.is_computer());
        assert!(!h.is_computer());
    }
}
