//! Round and game reports.

extern crate alloc;

use alloc::string::String;

use crate::card::Card;

/// Outcome of a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundOutcome {
    /// Player 1 dealt the higher card.
    Player1,
    /// Player 2 dealt the higher card.
    Player2,
    /// Both cards had the same rank. No points are awarded.
    Tie,
}

/// Outcome of a whole game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    /// Player 1 finished with more points.
    Player1,
    /// Player 2 finished with more points.
    Player2,
    /// Both players finished with the same points.
    Tie,
}

/// Result of one scored round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    /// Round number, starting at 1.
    pub round: usize,
    /// The dealer's name.
    pub dealer_name: String,
    /// Player 1's name.
    pub player1_name: String,
    /// The card dealt to player 1.
    pub player1_card: Card,
    /// Player 2's name.
    pub player2_name: String,
    /// The card dealt to player 2.
    pub player2_card: Card,
    /// Who won the round.
    pub outcome: RoundOutcome,
    /// Name of the round winner, or `None` on a tie.
    pub round_winner: Option<String>,
    /// Player 1's points after this round.
    pub player1_points: u32,
    /// Player 2's points after this round.
    pub player2_points: u32,
    /// Cards left in the dealer's deck after this round.
    pub cards_remaining: usize,
}

/// Result of a finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalReport {
    /// Player 1's name.
    pub player1_name: String,
    /// Player 1's final points.
    pub player1_points: u32,
    /// Player 2's name.
    pub player2_name: String,
    /// Player 2's final points.
    pub player2_points: u32,
    /// Who won the game.
    pub outcome: GameOutcome,
    /// Name of the overall winner, or `None` on a tie.
    pub winner: Option<String>,
    /// Number of scored rounds.
    pub rounds_played: usize,
}

/// An event produced while playing a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A round was dealt and scored.
    Round(RoundReport),
    /// The deck can no longer supply a pair and the game is over.
    Finished(FinalReport),
}
