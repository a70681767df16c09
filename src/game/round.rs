use alloc::string::String;
use core::cmp::Ordering;

use crate::result::{FinalReport, GameOutcome, RoundOutcome, RoundReport};

use super::{Game, GameState};

impl Game {
    /// Plays the next round.
    ///
    /// Deals one card to player 1 and then one to player 2. The player with
    /// the higher rank is awarded the configured points; equal ranks award
    /// nothing. If the deck runs out before both cards are dealt, the leftover
    /// card is discarded without a report.
    ///
    /// Returns `None` once the deck can no longer supply a pair, at which
    /// point the game is [`GameState::Finished`].
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::{Game, GameState};
    ///
    /// let mut game = Game::new("Chuck", "Bob", "Jane", 1);
    /// let report = game.play_round().unwrap();
    /// assert_eq!(report.round, 1);
    /// assert_eq!(report.cards_remaining, 50);
    ///
    /// while game.play_round().is_some() {}
    /// assert_eq!(game.state(), GameState::Finished);
    /// ```
    pub fn play_round(&mut self) -> Option<RoundReport> {
        while self.state == GameState::RoundInProgress && self.dealer.cards_remaining() > 0 {
            let Some((player1_card, player2_card)) = self.deal_pair() else {
                continue;
            };

            let points = self.options.points_per_round;
            let outcome = match player1_card.rank.cmp(&player2_card.rank) {
                Ordering::Greater => {
                    self.player1.award_points(points);
                    RoundOutcome::Player1
                }
                Ordering::Less => {
                    self.player2.award_points(points);
                    RoundOutcome::Player2
                }
                Ordering::Equal => RoundOutcome::Tie,
            };
            self.rounds_played += 1;

            let round_winner = match outcome {
                RoundOutcome::Player1 => Some(String::from(self.player1.name())),
                RoundOutcome::Player2 => Some(String::from(self.player2.name())),
                RoundOutcome::Tie => None,
            };

            tracing::debug!(
                round = self.rounds_played,
                player1_card = %player1_card,
                player2_card = %player2_card,
                ?outcome,
                player1_points = self.player1.points(),
                player2_points = self.player2.points(),
                cards_remaining = self.dealer.cards_remaining(),
                "round scored"
            );

            return Some(RoundReport {
                round: self.rounds_played,
                dealer_name: String::from(self.dealer.name()),
                player1_name: String::from(self.player1.name()),
                player1_card,
                player2_name: String::from(self.player2.name()),
                player2_card,
                outcome,
                round_winner,
                player1_points: self.player1.points(),
                player2_points: self.player2.points(),
                cards_remaining: self.dealer.cards_remaining(),
            });
        }

        if self.state == GameState::RoundInProgress {
            self.state = GameState::Finished;
            tracing::info!(
                rounds = self.rounds_played,
                player1_points = self.player1.points(),
                player2_points = self.player2.points(),
                "game finished"
            );
        }

        None
    }

    /// Returns the final scores and overall winner.
    ///
    /// Returns `None` while rounds are still in progress.
    #[must_use]
    pub fn final_report(&self) -> Option<FinalReport> {
        if self.state != GameState::Finished {
            return None;
        }

        let outcome = match self.player1.points().cmp(&self.player2.points()) {
            Ordering::Greater => GameOutcome::Player1,
            Ordering::Less => GameOutcome::Player2,
            Ordering::Equal => GameOutcome::Tie,
        };
        let winner = match outcome {
            GameOutcome::Player1 => Some(String::from(self.player1.name())),
            GameOutcome::Player2 => Some(String::from(self.player2.name())),
            GameOutcome::Tie => None,
        };

        Some(FinalReport {
            player1_name: String::from(self.player1.name()),
            player1_points: self.player1.points(),
            player2_name: String::from(self.player2.name()),
            player2_points: self.player2.points(),
            outcome,
            winner,
            rounds_played: self.rounds_played,
        })
    }
}
