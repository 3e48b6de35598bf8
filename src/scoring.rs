//! Hand totals.
//!
//! Two interpretations are supported and chosen per game through
//! [`Rules::scoring`](crate::game::Rules):
//!
//! - [`Scoring::RawRank`]: every card counts its raw rank, so Ace=1 and
//!   Jack/Queen/King count 11/12/13.
//! - [`Scoring::Standard`]: 2-10 at face value, Jack/Queen/King count 10, and
//!   each Ace counts 11 while that keeps the total at or below 21, else 1.
//!
//! ```
//! use blackjack_rs::cards::parse_cards;
//! use blackjack_rs::scoring::Scoring;
//!
//! let hand = parse_cards("Ah 2d").unwrap();
//! assert_eq!(Scoring::RawRank.score(&hand), 3);
//! assert_eq!(Scoring::Standard.score(&hand), 13);
//! ```

use crate::cards::{Card, Rank};

/// Bust threshold and natural total.
pub const TWENTY_ONE: u32 = 21;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scoring {
    RawRank,
    #[default]
    Standard,
}

impl Scoring {
    pub const ALL: [Scoring; 2] = [Scoring::RawRank, Scoring::Standard];

    pub fn label(self) -> &'static str {
        match self {
            Scoring::RawRank => "Raw rank",
            Scoring::Standard => "Standard",
        }
    }

    /// Value a single card contributes before any Ace promotion.
    pub fn card_value(self, card: Card) -> u32 {
        let rank = card.rank();
        match self {
            Scoring::RawRank => u32::from(rank.value()),
            Scoring::Standard => u32::from(rank.value().min(10)),
        }
    }

    pub fn score(self, cards: &[Card]) -> u32 {
        match self {
            Scoring::RawRank => cards.iter().map(|&c| self.card_value(c)).sum(),
            Scoring::Standard => standard_total(cards).0,
        }
    }

    /// True when an Ace is currently counted as 11.
    pub fn is_soft(self, cards: &[Card]) -> bool {
        match self {
            Scoring::RawRank => false,
            Scoring::Standard => standard_total(cards).1,
        }
    }

    pub fn is_bust(self, cards: &[Card]) -> bool {
        self.score(cards) > TWENTY_ONE
    }

    /// A two-card 21.
    pub fn is_natural(self, cards: &[Card]) -> bool {
        cards.len() == 2 && self.score(cards) == TWENTY_ONE
    }
}

/// Returns the best total and whether it is soft.
fn standard_total(cards: &[Card]) -> (u32, bool) {
    let hard: u32 = cards.iter().map(|&c| Scoring::Standard.card_value(c)).sum();
    let has_ace = cards.iter().any(|c| c.rank() == Rank::Ace);
    // At most one Ace can ever count 11 without busting.
    if has_ace && hard + 10 <= TWENTY_ONE {
        (hard + 10, true)
    } else {
        (hard, false)
    }
}
