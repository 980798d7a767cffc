//! Card positions and card values.
//!
//! ## CardPosition
//!
//! Fixed 0-based index into the board. A board of `N` cards has positions
//! `0..N`; positions never move during a round.
//!
//! ## CardValue
//!
//! The face printed on a card. A board of `N` cards uses values `0..N/2`,
//! each on exactly two positions.

use serde::{Deserialize, Serialize};

/// Fixed index of a card on the board.
///
/// ```
/// use memory_match::core::CardPosition;
///
/// let positions: Vec<_> = CardPosition::all(4).collect();
/// assert_eq!(positions.len(), 4);
/// assert_eq!(positions[3], CardPosition::new(3));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardPosition(pub usize);

impl CardPosition {
    /// Create a new card position.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw board index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }

    /// Iterate over every position of a board with `card_count` cards.
    pub fn all(card_count: usize) -> impl Iterator<Item = CardPosition> {
        (0..card_count).map(CardPosition)
    }
}

impl std::fmt::Display for CardPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card {}", self.0)
    }
}

impl From<usize> for CardPosition {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

/// Value shown on a card's face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardValue(pub u32);

impl CardValue {
    /// Create a new card value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
