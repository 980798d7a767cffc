//! Game configuration.
//!
//! The only tunable is the number of cards on the board. It must be even
//! (every value is dealt as a pair) and at least 2.

use serde::{Deserialize, Serialize};

use super::error::MemoryError;

/// Card count used by [`MemoryConfig::default`].
pub const DEFAULT_CARD_COUNT: usize = 16;

/// Validated game configuration.
///
/// ```
/// use memory_match::core::MemoryConfig;
///
/// let config = MemoryConfig::new(12).unwrap();
/// assert_eq!(config.card_count(), 12);
/// assert_eq!(config.pair_count(), 6);
///
/// assert!(MemoryConfig::new(7).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMemoryConfig")]
pub struct MemoryConfig {
    card_count: usize,
}

impl MemoryConfig {
    /// Create a configuration for a board of `card_count` cards.
    ///
    /// Fails with [`MemoryError::InvalidCardCount`] if `card_count` is zero or odd.
    pub fn new(card_count: usize) -> Result<Self, MemoryError> {
        Self::validate(card_count)?;
        Ok(Self { card_count })
    }

    /// Check that `card_count` can be dealt as pairs.
    pub fn validate(card_count: usize) -> Result<(), MemoryError> {
        if card_count < 2 || card_count % 2 != 0 {
            return Err(MemoryError::InvalidCardCount { count: card_count });
        }
        Ok(())
    }

    /// Number of cards on the board.
    #[must_use]
    pub const fn card_count(&self) -> usize {
        self.card_count
    }

    /// Number of distinct values (pairs) on the board.
    #[must_use]
    pub const fn pair_count(&self) -> usize {
        self.card_count / 2
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            card_count: DEFAULT_CARD_COUNT,
        }
    }
}

/// Unvalidated wire form; deserialization goes through [`MemoryConfig::new`].
#[derive(Deserialize)]
struct RawMemoryConfig {
    card_count: usize,
}

impl TryFrom<RawMemoryConfig> for MemoryConfig {
    type Error = MemoryError;

    fn try_from(raw: RawMemoryConfig) -> Result<Self, Self::Error> {
        Self::new(raw.card_count)
    }
}
