use core::iter::FusedIterator;

use crate::result::GameEvent;

use super::Game;

/// A game being played, one event at a time.
///
/// Yields a [`GameEvent::Round`] for every scored round, then a single
/// [`GameEvent::Finished`], then nothing. Created by [`Game::play`].
///
/// A `Play` cannot be cloned, so the remaining events can only be consumed
/// once:
///
/// ```compile_fail
/// use warrs::Game;
///
/// let play = Game::new("Chuck", "Bob", "Jane", 7).play();
/// let _replay = play.clone();
/// ```
#[derive(Debug)]
pub struct Play {
    game: Game,
    done: bool,
}

impl Game {
    /// Consumes the game and returns its events in round order.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::{Game, GameEvent};
    ///
    /// let events: Vec<GameEvent> = Game::new("Chuck", "Bob", "Jane", 7).play().collect();
    /// assert_eq!(events.len(), 27);
    /// assert!(matches!(events.last(), Some(GameEvent::Finished(_))));
    /// ```
    #[must_use]
    pub fn play(self) -> Play {
        Play {
            game: self,
            done: false,
        }
    }
}

impl Play {
    /// Returns the game being played.
    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }
}

impl Iterator for Play {
    type Item = GameEvent;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if let Some(report) = self.game.play_round() {
            return Some(GameEvent::Round(report));
        }

        self.done = true;
        self.game.final_report().map(GameEvent::Finished)
    }
}

impl FusedIterator for Play {}
