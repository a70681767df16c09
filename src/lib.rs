//! A card game War engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that deals a 52-card deck between two
//! players one pair at a time. The higher rank wins the round and a point;
//! equal ranks win nothing. Once the deck can no longer supply a pair, the
//! player with more points wins the game.
//!
//! # Example
//!
//! ```
//! use warrs::{Game, GameEvent};
//!
//! let game = Game::new("Chuck", "Bob", "Jane", 42);
//! for event in game.play() {
//!     match event {
//!         GameEvent::Round(round) => {
//!             let _ = (round.player1_card, round.player2_card, round.round_winner);
//!         }
//!         GameEvent::Finished(report) => {
//!             assert_eq!(report.rounds_played, 26);
//!         }
//!     }
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod player;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit, full_deck};
pub use deck::Deck;
pub use error::{DeckError, SetupError};
pub use game::{Dealer, Game, GameState, Play};
pub use options::GameOptions;
pub use player::Player;
pub use result::{FinalReport, GameEvent, GameOutcome, RoundOutcome, RoundReport};
