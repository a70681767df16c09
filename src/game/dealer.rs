//! The dealer and the deck they deal from.

use alloc::string::String;

use crate::card::Card;
use crate::deck::Deck;

/// A named dealer that owns one deck for the lifetime of a game.
#[derive(Debug, Clone)]
pub struct Dealer {
    /// Dealer name.
    name: String,
    /// The deck being dealt.
    deck: Deck,
}

impl Dealer {
    /// Creates a dealer with a fresh 52-card deck.
    #[must_use]
    pub fn new(name: impl Into<String>, seed: u64) -> Self {
        Self::with_deck(name, Deck::new(seed))
    }

    /// Creates a dealer that deals from the given deck.
    #[must_use]
    pub fn with_deck(name: impl Into<String>, deck: Deck) -> Self {
        Self {
            name: name.into(),
            deck,
        }
    }

    /// Returns the dealer's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub const fn cards_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Deals one random card, or `None` once the deck is exhausted.
    pub fn deal_card(&mut self) -> Option<Card> {
        let card = self.deck.draw();
        if let Some(card) = card {
            tracing::trace!(dealer = %self.name, %card, remaining = self.deck.remaining(), "dealt card");
        }
        card
    }
}
