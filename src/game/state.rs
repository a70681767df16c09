//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// The dealer still holds cards and rounds are being played.
    RoundInProgress,
    /// The deck can no longer supply a pair of cards.
    Finished,
}
