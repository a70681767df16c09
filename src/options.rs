//! Game configuration options.

use alloc::vec::Vec;

use crate::card::Card;

/// Configuration options for a game of War.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use warrs::GameOptions;
///
/// let options = GameOptions::default().with_points_per_round(2);
/// assert_eq!(options.points_per_round, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Points awarded to the winner of a round.
    pub points_per_round: u32,
    /// Starting cards. `None` uses a full 52-card deck.
    pub cards: Option<Vec<Card>>,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            points_per_round: 1,
            cards: None,
        }
    }
}

impl GameOptions {
    /// Sets the points awarded to the winner of a round.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_points_per_round(3);
    /// assert_eq!(options.points_per_round, 3);
    /// ```
    #[must_use]
    pub const fn with_points_per_round(mut self, points: u32) -> Self {
        self.points_per_round = points;
        self
    }

    /// Sets the cards the dealer starts with.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::{Card, GameOptions, Rank, Suit};
    ///
    /// let cards = vec![
    ///     Card::new(Suit::Spades, Rank::Ace),
    ///     Card::new(Suit::Hearts, Rank::Two),
    /// ];
    /// let options = GameOptions::default().with_cards(cards.clone());
    /// assert_eq!(options.cards, Some(cards));
    /// ```
    #[must_use]
    pub fn with_cards(mut self, cards: Vec<Card>) -> Self {
        self.cards = Some(cards);
        self
    }
}
