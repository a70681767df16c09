//! Player state.

use alloc::string::String;

/// A player and the points they have won.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Player name.
    name: String,
    /// Accumulated points.
    points: u32,
}

impl Player {
    /// Creates a new player with zero points.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            points: 0,
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's points.
    #[must_use]
    pub const fn points(&self) -> u32 {
        self.points
    }

    /// Adds points to the player's score.
    pub const fn award_points(&mut self, points: u32) {
        self.points = self.points.saturating_add(points);
    }
}
