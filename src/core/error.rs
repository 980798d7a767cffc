//! Error type shared by every fallible operation in the crate.

use super::position::{CardPosition, CardValue};

/// Errors raised by board construction, turn resolution and round control.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MemoryError {
    /// Card count is zero or odd.
    #[error("invalid card count {count}: must be even and at least 2")]
    InvalidCardCount {
        /// Rejected card count.
        count: usize,
    },

    /// Clicked position is outside the board.
    #[error("{position} is out of range (board has {card_count} cards)")]
    CardOutOfRange {
        /// Rejected position.
        position: CardPosition,
        /// Number of cards on the board.
        card_count: usize,
    },

    /// Board arrays have different lengths.
    #[error("board length mismatch: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Length of the value assignment.
        expected: usize,
        /// Length of the offending flag array.
        actual: usize,
    },

    /// A value does not appear on exactly two positions, or lies outside `0..N/2`.
    #[error("value {value} is not dealt as exactly one pair")]
    InvalidPairing {
        /// Offending value.
        value: CardValue,
    },

    /// A matched card is not face-up.
    #[error("{position} is marked found but is face-down")]
    FoundNotFaceUp {
        /// Offending position.
        position: CardPosition,
    },

    /// Click history does not belong to the round it was captured with.
    #[error("click history does not match round {generation} with {moves} moves")]
    HistoryMismatch {
        /// Round counter of the snapshot.
        generation: u32,
        /// Move count of the snapshot.
        moves: u32,
    },
}
