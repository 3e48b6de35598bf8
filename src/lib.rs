//! blackjack-rs: a two-player Blackjack (21) engine, human against computer.
//!
//! Goals:
//! - A single rules engine ([`game::Game`]) that any front-end drives through
//!   [`engine::GameEngine`]
//! - Deterministic play when seeded, for tests and replays
//! - No panics for invalid moves; use `Result` for recoverable errors
//!
//! ## Quick start: play a game
//! ```
//! use blackjack_rs::game::{Game, GameState, Rules};
//!
//! let mut game = Game::with_rules(Rules::default().with_seed(7));
//! game.start_game();
//! while game.state() == GameState::Playing && game.human_score() < 17 {
//!     game.human_hit().unwrap();
//! }
//! if game.state() == GameState::Playing {
//!     game.human_stand().unwrap();
//!     game.play_computer_turn().unwrap();
//!     game.finalize_game();
//! }
//! assert!(game.state().is_terminal());
//! ```
//!
//! ## TUI
//! Run the interactive TUI with:
//! ```sh
//! cargo run --bin blackjack -- --opening double --natural
//! ```

pub mod agents;
pub mod cards;
pub mod deck;
pub mod engine;
pub mod game;
pub mod logging;
pub mod player;
pub mod policy;
pub mod scoring;
pub mod snapshot;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
