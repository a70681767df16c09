//! Error types for game setup.
//!
//! Running out of cards is not an error: draws return `None` and the game
//! simply finishes.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur when building a deck from explicit cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The same card appears more than once.
    #[error("duplicate card in deck: {card}")]
    DuplicateCard {
        /// The repeated card.
        card: Card,
    },
}

/// Errors that can occur when creating a game from options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// Points per round is zero.
    #[error("points per round is zero")]
    ZeroPointsPerRound,
    /// The configured cards do not form a valid deck.
    #[error(transparent)]
    Deck(#[from] DeckError),
}
