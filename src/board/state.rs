//! Board state: value assignment plus per-card face-up and matched flags.
//!
//! ## Invariants
//!
//! - `flipped`, `found` and the value assignment have the same length
//! - `found[i]` implies `flipped[i]`
//!
//! Both are checked on construction from parts and preserved by
//! [`BoardState::apply`].

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::values::ValueAssignment;
use crate::core::{CardPosition, CardValue, MemoryError};
use crate::rules::Resolution;

/// Positions that are face-up but not yet matched.
///
/// Normal play never has more than two.
pub type UnresolvedCards = SmallVec<[CardPosition; 2]>;

/// What a presentation layer shows for one card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardView {
    /// Face-down.
    Covered,
    /// Face-up, waiting for its partner (or for dismissal).
    Showing(CardValue),
    /// Permanently matched.
    Found(CardValue),
}

impl CardView {
    /// Whether clicking this card can change anything.
    #[must_use]
    pub fn is_clickable(self) -> bool {
        matches!(self, CardView::Covered)
    }
}

/// Complete board for one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoardState")]
pub struct BoardState {
    values: ValueAssignment,
    flipped: Vec<bool>,
    found: Vec<bool>,
}

impl BoardState {
    /// Fresh board: every card face-down, nothing matched.
    #[must_use]
    pub fn new(values: ValueAssignment) -> Self {
        let n = values.len();
        Self {
            values,
            flipped: vec![false; n],
            found: vec![false; n],
        }
    }

    /// Rebuild a board from its parts, checking lengths and `found ⟹ flipped`.
    pub fn from_parts(
        values: ValueAssignment,
        flipped: Vec<bool>,
        found: Vec<bool>,
    ) -> Result<Self, MemoryError> {
        let expected = values.len();
        for actual in [flipped.len(), found.len()] {
            if actual != expected {
                return Err(MemoryError::LengthMismatch { expected, actual });
            }
        }

        if let Some(i) = (0..expected).find(|&i| found[i] && !flipped[i]) {
            return Err(MemoryError::FoundNotFaceUp {
                position: CardPosition(i),
            });
        }

        Ok(Self {
            values,
            flipped,
            found,
        })
    }

    /// Number of cards.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.values.len()
    }

    /// Value assignment for this board.
    #[must_use]
    pub fn values(&self) -> &ValueAssignment {
        &self.values
    }

    /// Face-up flags in position order.
    #[must_use]
    pub fn flipped(&self) -> &[bool] {
        &self.flipped
    }

    /// Matched flags in position order.
    #[must_use]
    pub fn found(&self) -> &[bool] {
        &self.found
    }

    /// Fail with [`MemoryError::CardOutOfRange`] if `position` is off the board.
    pub fn check_position(&self, position: CardPosition) -> Result<(), MemoryError> {
        if position.index() >= self.card_count() {
            return Err(MemoryError::CardOutOfRange {
                position,
                card_count: self.card_count(),
            });
        }
        Ok(())
    }

    /// Whether the card is face-up. Out-of-range positions are face-down.
    #[must_use]
    pub fn is_flipped(&self, position: CardPosition) -> bool {
        self.flipped.get(position.index()).copied().unwrap_or(false)
    }

    /// Whether the card has been matched.
    #[must_use]
    pub fn is_found(&self, position: CardPosition) -> bool {
        self.found.get(position.index()).copied().unwrap_or(false)
    }

    /// Face-up cards not yet matched, in position order.
    #[must_use]
    pub fn unresolved_face_up(&self) -> UnresolvedCards {
        self.flipped
            .iter()
            .zip(&self.found)
            .enumerate()
            .filter(|&(_, (&up, &done))| up && !done)
            .map(|(i, _)| CardPosition(i))
            .collect()
    }

    /// Number of face-up cards, matched ones included.
    #[must_use]
    pub fn face_up_count(&self) -> usize {
        self.flipped.iter().filter(|&&up| up).count()
    }

    /// Number of matched pairs.
    #[must_use]
    pub fn pairs_found(&self) -> usize {
        self.found.iter().filter(|&&f| f).count() / 2
    }

    /// True once every card is matched.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.found.iter().all(|&f| f)
    }

    /// What to show for one card.
    #[must_use]
    pub fn view(&self, position: CardPosition) -> Option<CardView> {
        let value = self.values.get(position)?;
        let i = position.index();
        Some(if self.found[i] {
            CardView::Found(value)
        } else if self.flipped[i] {
            CardView::Showing(value)
        } else {
            CardView::Covered
        })
    }

    /// Views of every card in position order.
    pub fn views(&self) -> impl Iterator<Item = CardView> + '_ {
        CardPosition::all(self.card_count()).filter_map(|p| self.view(p))
    }

    /// Apply a resolution produced by [`crate::rules::resolve`] for this board.
    ///
    /// Replaces the face-up set and marks the new pair, if any, as found.
    pub fn apply(&mut self, resolution: &Resolution) -> Result<(), MemoryError> {
        if resolution.flipped.len() != self.card_count() {
            return Err(MemoryError::LengthMismatch {
                expected: self.card_count(),
                actual: resolution.flipped.len(),
            });
        }

        if let Some((a, b)) = resolution.newly_found {
            for p in [a, b] {
                self.check_position(p)?;
                if !resolution.flipped[p.index()] {
                    return Err(MemoryError::FoundNotFaceUp { position: p });
                }
            }
        }

        // Matched cards can't be turned back down, even by a stale resolution.
        if let Some(i) =
            (0..self.card_count()).find(|&i| self.found[i] && !resolution.flipped[i])
        {
            return Err(MemoryError::FoundNotFaceUp {
                position: CardPosition(i),
            });
        }

        if let Some((a, b)) = resolution.newly_found {
            self.found[a.index()] = true;
            self.found[b.index()] = true;
        }

        self.flipped.clone_from(&resolution.flipped);
        debug_assert!(self.holds_found_invariant());
        Ok(())
    }

    /// `found[i] ⟹ flipped[i]` for every position.
    #[must_use]
    pub fn holds_found_invariant(&self) -> bool {
        self.found
            .iter()
            .zip(&self.flipped)
            .all(|(&done, &up)| !done || up)
    }
}

#[derive(Deserialize)]
struct RawBoardState {
    values: ValueAssignment,
    flipped: Vec<bool>,
    found: Vec<bool>,
}

impl TryFrom<RawBoardState> for BoardState {
    type Error = MemoryError;

    fn try_from(raw: RawBoardState) -> Result<Self, Self::Error> {
        Self::from_parts(raw.values, raw.flipped, raw.found)
    }
}
