//! Game engine and state management.

use alloc::string::String;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::SetupError;
use crate::options::GameOptions;
use crate::player::Player;

mod dealer;
mod play;
mod round;
pub mod state;

pub use dealer::Dealer;
pub use play::Play;
pub use state::GameState;

/// A game of War between two players.
///
/// The game owns the dealer (and through it the deck) and both players. It is
/// played exactly once: rounds are dealt until the deck can no longer supply a
/// pair of cards. Use [`Game::play`] to consume the game as a sequence of
/// events, or [`Game::play_round`] to drive it one round at a time.
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    options: GameOptions,
    /// The dealer.
    dealer: Dealer,
    /// The first player. Always dealt first.
    player1: Player,
    /// The second player.
    player2: Player,
    /// Current game state.
    state: GameState,
    /// Number of scored rounds.
    rounds_played: usize,
}

impl Game {
    /// Creates a new game with default options and the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::Game;
    ///
    /// let game = Game::new("Chuck", "Bob", "Jane", 42);
    /// assert_eq!(game.dealer().name(), "Chuck");
    /// assert_eq!(game.cards_remaining(), 52);
    /// ```
    #[must_use]
    pub fn new(
        dealer_name: impl Into<String>,
        player1_name: impl Into<String>,
        player2_name: impl Into<String>,
        seed: u64,
    ) -> Self {
        Self::from_parts(
            GameOptions::default(),
            Dealer::new(dealer_name, seed),
            player1_name,
            player2_name,
        )
    }

    /// Creates a new game with the given options and seed.
    ///
    /// # Errors
    ///
    /// Returns an error if `points_per_round` is zero or the configured
    /// cards contain a duplicate.
    pub fn with_options(
        options: GameOptions,
        dealer_name: impl Into<String>,
        player1_name: impl Into<String>,
        player2_name: impl Into<String>,
        seed: u64,
    ) -> Result<Self, SetupError> {
        if options.points_per_round == 0 {
            return Err(SetupError::ZeroPointsPerRound);
        }

        let deck = match &options.cards {
            Some(cards) => Deck::from_cards(cards.clone(), seed)?,
            None => Deck::new(seed),
        };
        let dealer = Dealer::with_deck(dealer_name, deck);

        Ok(Self::from_parts(options, dealer, player1_name, player2_name))
    }

    fn from_parts(
        options: GameOptions,
        dealer: Dealer,
        player1_name: impl Into<String>,
        player2_name: impl Into<String>,
    ) -> Self {
        Self {
            options,
            dealer,
            player1: Player::new(player1_name),
            player2: Player::new(player2_name),
            state: GameState::RoundInProgress,
            rounds_played: 0,
        }
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// Returns the first player.
    #[must_use]
    pub const fn player1(&self) -> &Player {
        &self.player1
    }

    /// Returns the second player.
    #[must_use]
    pub const fn player2(&self) -> &Player {
        &self.player2
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the number of rounds scored so far.
    #[must_use]
    pub const fn rounds_played(&self) -> usize {
        self.rounds_played
    }

    /// Returns the number of cards remaining in the dealer's deck.
    #[must_use]
    pub const fn cards_remaining(&self) -> usize {
        self.dealer.cards_remaining()
    }

    /// Deals one card to each player, player 1 first.
    ///
    /// Returns `None` if either deal came up empty.
    fn deal_pair(&mut self) -> Option<(Card, Card)> {
        let player1_card = self.dealer.deal_card();
        let player2_card = self.dealer.deal_card();

        match (player1_card, player2_card) {
            (Some(first), Some(second)) => Some((first, second)),
            (Some(unpaired), None) => {
                tracing::debug!(card = %unpaired, "discarding unpaired card");
                None
            }
            (None, _) => None,
        }
    }
}
