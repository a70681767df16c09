//! A deck that deals uniformly random cards without replacement.

use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, full_deck};
use crate::error::DeckError;

/// A collection of undealt cards.
///
/// Cards live in a single buffer split into a live prefix and a dealt suffix.
/// Drawing picks a random live slot, swaps it with the last live slot and
/// shrinks the prefix by one, so no card can be drawn twice and every
/// remaining card is equally likely on each draw.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Live cards in `cards[..remaining]`, dealt cards after that.
    cards: Vec<Card>,
    /// Number of undealt cards.
    remaining: usize,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a full 52-card deck with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::Deck;
    ///
    /// let mut deck = Deck::new(42);
    /// assert_eq!(deck.remaining(), 52);
    /// assert!(deck.draw().is_some());
    /// assert_eq!(deck.remaining(), 51);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_parts(full_deck(), seed)
    }

    /// Creates a deck holding exactly the given cards.
    ///
    /// The deck may be empty or hold an odd number of cards.
    ///
    /// # Errors
    ///
    /// Returns an error if a card appears more than once.
    pub fn from_cards(cards: Vec<Card>, seed: u64) -> Result<Self, DeckError> {
        let mut sorted = cards.clone();
        sorted.sort_unstable();
        if let Some(pair) = sorted.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(DeckError::DuplicateCard { card: pair[0] });
        }

        Ok(Self::from_parts(cards, seed))
    }

    fn from_parts(cards: Vec<Card>, seed: u64) -> Self {
        let remaining = cards.len();
        Self {
            cards,
            remaining,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the number of undealt cards.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.remaining
    }

    /// Returns whether every card has been dealt.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    /// Draws a random card.
    ///
    /// Returns `None` once the deck is empty; an empty deck is left untouched.
    pub fn draw(&mut self) -> Option<Card> {
        if self.remaining == 0 {
            return None;
        }

        let index = self.rng.random_range(0..self.remaining);
        let last = self.remaining - 1;
        self.cards.swap(index, last);
        self.remaining = last;

        Some(self.cards[last])
    }

    /// Returns the cards dealt so far, most recent first.
    #[must_use]
    pub fn dealt(&self) -> &[Card] {
        &self.cards[self.remaining..]
    }
}
