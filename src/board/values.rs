//! Value assignment: which value sits under which card.
//!
//! A board of `N` cards carries values `0..N/2`, each on exactly two
//! positions. The assignment is dealt once per round and never changes
//! until the next deal.

use serde::{Deserialize, Serialize};

use crate::core::{CardPosition, CardValue, GameRng, MemoryConfig, MemoryError};

/// Immutable sequence of card values, one per board position.
///
/// Constructed by [`ValueAssignment::deal`] or validated via
/// [`ValueAssignment::from_values`], so every instance is a valid pairing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CardValue>", into = "Vec<CardValue>")]
pub struct ValueAssignment {
    values: Vec<CardValue>,
}

impl ValueAssignment {
    /// Deal a fresh random pairing for `config.card_count()` cards.
    #[must_use]
    pub fn deal(config: &MemoryConfig, rng: &mut GameRng) -> Self {
        let mut values: Vec<CardValue> = (0..config.pair_count() as u32)
            .flat_map(|v| [CardValue(v), CardValue(v)])
            .collect();
        rng.shuffle(&mut values);
        Self { values }
    }

    /// Build an assignment from explicit values, checking the pairing.
    ///
    /// ```
    /// use memory_match::board::ValueAssignment;
    ///
    /// assert!(ValueAssignment::from_raw(&[0, 1, 1, 0]).is_ok());
    /// assert!(ValueAssignment::from_raw(&[0, 0, 0, 1]).is_err());
    /// ```
    pub fn from_values(values: Vec<CardValue>) -> Result<Self, MemoryError> {
        MemoryConfig::validate(values.len())?;

        let pairs = values.len() / 2;
        let mut counts = vec![0u8; pairs];
        for &value in &values {
            let slot = counts
                .get_mut(value.raw() as usize)
                .ok_or(MemoryError::InvalidPairing { value })?;
            *slot = slot.saturating_add(1);
        }

        if let Some(v) = counts.iter().position(|&c| c != 2) {
            return Err(MemoryError::InvalidPairing {
                value: CardValue(v as u32),
            });
        }

        Ok(Self { values })
    }

    /// Convenience wrapper around [`ValueAssignment::from_values`] for raw integers.
    pub fn from_raw(values: &[u32]) -> Result<Self, MemoryError> {
        Self::from_values(values.iter().copied().map(CardValue).collect())
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; an assignment has at least one pair.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at a position, or `None` if out of range.
    #[must_use]
    pub fn get(&self, position: CardPosition) -> Option<CardValue> {
        self.values.get(position.index()).copied()
    }

    /// All values in position order.
    #[must_use]
    pub fn as_slice(&self) -> &[CardValue] {
        &self.values
    }
}

impl TryFrom<Vec<CardValue>> for ValueAssignment {
    type Error = MemoryError;

    fn try_from(values: Vec<CardValue>) -> Result<Self, Self::Error> {
        Self::from_values(values)
    }
}

impl From<ValueAssignment> for Vec<CardValue> {
    fn from(assignment: ValueAssignment) -> Self {
        assignment.values
    }
}
