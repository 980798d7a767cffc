//! Callbacks from the round controller to a presentation layer.

use crate::core::CardPosition;

/// Receives round events as clicks are resolved.
///
/// All methods default to doing nothing; implement only what you need.
/// Called synchronously from [`super::RoundController::click_with`] after the
/// click has been applied.
pub trait RoundObserver {
    /// A pair attempt finished; `moves` is the new move count.
    fn on_move_completed(&mut self, moves: u32) {
        let _ = moves;
    }

    /// Two cards were matched.
    fn on_pair_found(&mut self, first: CardPosition, second: CardPosition) {
        let _ = (first, second);
    }

    /// Every pair has been found.
    fn on_round_over(&mut self, moves: u32) {
        let _ = moves;
    }
}

/// Observer that ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl RoundObserver for NoopObserver {}

/// Observer that records every event, for tests and replays.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordingObserver {
    /// Move counts reported by `on_move_completed`, in order.
    pub moves: Vec<u32>,
    /// Pairs reported by `on_pair_found`, in order.
    pub pairs: Vec<(CardPosition, CardPosition)>,
    /// Move counts reported by `on_round_over`.
    pub rounds_over: Vec<u32>,
}

impl RoundObserver for RecordingObserver {
    fn on_move_completed(&mut self, moves: u32) {
        self.moves.push(moves);
    }

    fn on_pair_found(&mut self, first: CardPosition, second: CardPosition) {
        self.pairs.push((first, second));
    }

    fn on_round_over(&mut self, moves: u32) {
        self.rounds_over.push(moves);
    }
}
