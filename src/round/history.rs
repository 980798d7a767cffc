//! Per-round click history.
//!
//! Every resolved click is recorded with the round generation, its sequence
//! number within the round, and the move count after the click. Backed by
//! `im::Vector`, so cloning a controller (or taking a snapshot) is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::CardPosition;
use crate::rules::ClickKind;

/// One resolved click.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickRecord {
    /// Round the click belongs to.
    pub generation: u32,

    /// 0-based index of the click within the round.
    pub sequence: u32,

    /// Clicked card.
    pub position: CardPosition,

    /// How the click was resolved.
    pub kind: ClickKind,

    /// Move count after the click.
    pub moves_after: u32,
}

/// Ordered clicks of the current round.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickHistory {
    records: Vector<ClickRecord>,
}

impl ClickHistory {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a click; its sequence number is the current length.
    pub fn record(
        &mut self,
        generation: u32,
        position: CardPosition,
        kind: ClickKind,
        moves_after: u32,
    ) -> &ClickRecord {
        let sequence = self.records.len() as u32;
        self.records.push_back(ClickRecord {
            generation,
            sequence,
            position,
            kind,
            moves_after,
        });
        &self.records[self.records.len() - 1]
    }

    /// Drop every record (start of a new round).
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Number of clicks recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if no click has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Most recent click.
    #[must_use]
    pub fn last(&self) -> Option<&ClickRecord> {
        self.records.last()
    }

    /// Iterate in click order.
    pub fn iter(&self) -> impl Iterator<Item = &ClickRecord> {
        self.records.iter()
    }

    /// Whether these records can belong to round `generation` with `moves` moves.
    ///
    /// Every record must carry `generation`, sequence numbers must run
    /// `0..len`, `moves_after` must never decrease, and the last record must
    /// end on `moves` (an empty history means no moves).
    #[must_use]
    pub fn matches_round(&self, generation: u32, moves: u32) -> bool {
        let mut prev_moves = 0;
        for (i, record) in self.iter().enumerate() {
            if record.generation != generation
                || record.sequence as usize != i
                || record.moves_after < prev_moves
            {
                return false;
            }
            prev_moves = record.moves_after;
        }
        prev_moves == moves
    }

    /// Number of recorded clicks of a given kind.
    #[must_use]
    pub fn count(&self, kind: ClickKind) -> usize {
        self.records.iter().filter(|r| r.kind == kind).count()
    }
}
