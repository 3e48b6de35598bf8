//! Versioned save format for a game in progress.
//!
//! Layout (version 1, little-endian):
//!
//! ```text
//! magic "BJ21" | u16 version | u8 state | u8 scoring | u8 opening | u8 flags
//! u8 n + n card bytes   (human hand)
//! u8 n + n card bytes   (computer hand)
//! u8 n + n card bytes   (deck, next card first)
//! ```
//!
//! `flags`: bit 0 natural-blackjack rule, bit 1 human standing, bit 2 computer standing.
//! A card byte is `suit << 4 | rank`.

use crate::cards::Card;
use crate::deck::{Deck, DECK_SIZE};
use crate::game::{Game, GameState, OpeningDeal, Rules};
use crate::scoring::Scoring;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

pub const MAGIC: [u8; 4] = *b"BJ21";
pub const SNAPSHOT_VERSION: u16 = 1;

const FLAG_NATURAL: u8 = 1 << 0;
const FLAG_HUMAN_STANDING: u8 = 1 << 1;
const FLAG_COMPUTER_STANDING: u8 = 1 << 2;

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum SnapshotError {
    #[error("snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("not a snapshot (bad magic)")]
    BadMagic,
    #[error("unsupported snapshot version: {0}")]
    UnsupportedVersion(u16),
    #[error("snapshot truncated")]
    Truncated,
    #[error("invalid {field} byte: {value:#04x}")]
    InvalidByte { field: &'static str, value: u8 },
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
    #[error("{0} trailing byte(s) after snapshot")]
    TrailingBytes(usize),
    #[error("{list} holds {len} cards, more than a deck")]
    TooManyCards { list: &'static str, len: usize },
}

/// Everything needed to resume a game. RNG streams are not captured; a restored
/// game keeps drawing randomness from the engine it is loaded into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub state: GameState,
    pub scoring: Scoring,
    pub opening: OpeningDeal,
    pub natural_blackjack: bool,
    pub human_hand: Vec<Card>,
    pub human_standing: bool,
    pub computer_hand: Vec<Card>,
    pub computer_standing: bool,
    /// Remaining deck, next card first.
    pub deck: Vec<Card>,
}

impl Snapshot {
    pub fn encode(&self) -> Result<Vec<u8>, SnapshotError> {
        let cards = self.human_hand.len() + self.computer_hand.len() + self.deck.len();
        let mut out = Vec::with_capacity(10 + 3 + cards);
        out.extend_from_slice(&MAGIC);
        out.extend_from_slice(&SNAPSHOT_VERSION.to_le_bytes());
        out.push(self.state.to_byte());
        out.push(match self.scoring {
            Scoring::RawRank => 0,
            Scoring::Standard => 1,
        });
        out.push(match self.opening {
            OpeningDeal::Single => 1,
            OpeningDeal::Double => 2,
        });
        let mut flags = 0u8;
        if self.natural_blackjack {
            flags |= FLAG_NATURAL;
        }
        if self.human_standing {
            flags |= FLAG_HUMAN_STANDING;
        }
        if self.computer_standing {
            flags |= FLAG_COMPUTER_STANDING;
        }
        out.push(flags);
        let lists = [
            ("human hand", &self.human_hand),
            ("computer hand", &self.computer_hand),
            ("deck", &self.deck),
        ];
        for (name, list) in lists {
            let len = list.len();
            if len > DECK_SIZE {
                return Err(SnapshotError::TooManyCards { list: name, len });
            }
            // Bounded by DECK_SIZE above.
            out.push(len as u8);
            out.extend(list.iter().map(|c| c.to_byte()));
        }
        Ok(out)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let mut c = Cursor::new(bytes);
        if c.take(4)? != MAGIC {
            return Err(SnapshotError::BadMagic);
        }
        let version = c.read_u16()?;
        if version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion(version));
        }
        let b = c.read_u8()?;
        let state =
            GameState::from_byte(b).ok_or(SnapshotError::InvalidByte { field: "state", value: b })?;
        let scoring = match c.read_u8()? {
            0 => Scoring::RawRank,
            1 => Scoring::Standard,
            value => return Err(SnapshotError::InvalidByte { field: "scoring", value }),
        };
        let opening = match c.read_u8()? {
            1 => OpeningDeal::Single,
            2 => OpeningDeal::Double,
            value => return Err(SnapshotError::InvalidByte { field: "opening", value }),
        };
        let flags = c.read_u8()?;
        if flags & !(FLAG_NATURAL | FLAG_HUMAN_STANDING | FLAG_COMPUTER_STANDING) != 0 {
            return Err(SnapshotError::InvalidByte { field: "flags", value: flags });
        }
        let human_hand = c.read_cards()?;
        let computer_hand = c.read_cards()?;
        let deck = c.read_cards()?;
        if c.remaining() > 0 {
            return Err(SnapshotError::TrailingBytes(c.remaining()));
        }

        let snap = Self {
            state,
            scoring,
            opening,
            natural_blackjack: flags & FLAG_NATURAL != 0,
            human_hand,
            human_standing: flags & FLAG_HUMAN_STANDING != 0,
            computer_hand,
            computer_standing: flags & FLAG_COMPUTER_STANDING != 0,
            deck,
        };
        snap.validate()?;
        Ok(snap)
    }

    /// No card may appear twice across both hands and the deck.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        let mut seen = HashSet::new();
        for &card in self.human_hand.iter().chain(&self.computer_hand).chain(&self.deck) {
            if !seen.insert(card) {
                return Err(SnapshotError::DuplicateCard(card));
            }
        }
        Ok(())
    }
}

struct Cursor<'a> {
    bytes: &'a [u8],
    off: usize,
}

impl<'a> Cursor<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, off: 0 }
    }

    fn remaining(&self) -> usize {
        self.bytes.len() - self.off
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], SnapshotError> {
        if n > self.remaining() {
            return Err(SnapshotError::Truncated);
        }
        let s = &self.bytes[self.off..self.off + n];
        self.off += n;
        Ok(s)
    }

    fn read_u8(&mut self) -> Result<u8, SnapshotError> {
        Ok(self.take(1)?[0])
    }

    fn read_u16(&mut self) -> Result<u16, SnapshotError> {
        let b = self.take(2)?;
        Ok(u16::from_le_bytes([b[0], b[1]]))
    }

    fn read_cards(&mut self) -> Result<Vec<Card>, SnapshotError> {
        let n = usize::from(self.read_u8()?);
        self.take(n)?
            .iter()
            .map(|&value| Card::from_byte(value).ok_or(SnapshotError::InvalidByte { field: "card", value }))
            .collect()
    }
}

impl Game {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state,
            scoring: self.rules.scoring,
            opening: self.rules.opening,
            natural_blackjack: self.rules.natural_blackjack,
            human_hand: self.human.hand.clone(),
            human_standing: self.human.standing,
            computer_hand: self.computer.hand.clone(),
            computer_standing: self.computer.standing,
            deck: self.deck.remaining(),
        }
    }

    /// Replace the game with `snap`. Nothing changes when validation fails.
    pub fn restore(&mut self, snap: &Snapshot) -> Result<(), SnapshotError> {
        snap.validate()?;
        let rules = Rules {
            scoring: snap.scoring,
            opening: snap.opening,
            natural_blackjack: snap.natural_blackjack,
            seed: self.rules.seed,
        };
        self.replace_state(
            rules,
            snap.state,
            (snap.human_hand.clone(), snap.human_standing),
            (snap.computer_hand.clone(), snap.computer_standing),
            Deck::from_cards(snap.deck.iter().copied()),
        );
        log::info!("restored game in state {:?}", snap.state);
        Ok(())
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
        let path = path.as_ref();
        fs::write(path, self.snapshot().encode()?)?;
        log::info!("saved game to {}", path.display());
        Ok(())
    }

    /// Load a saved game. On any error the current game is left untouched.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
        let path = path.as_ref();
        let snap = fs::read(path).map_err(SnapshotError::from).and_then(|b| Snapshot::decode(&b));
        match snap {
            Ok(snap) => self.restore(&snap),
            Err(err) => {
                log::warn!("could not load {}: {err}", path.display());
                Err(err)
            }
        }
    }
}
