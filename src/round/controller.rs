//! Round controller: owns the board for one round at a time.
//!
//! ## Responsibilities
//!
//! - Deal a value assignment at round start and on reset
//! - Forward clicks to [`resolve`] and apply the result
//! - Count moves (one per completed pair attempt)
//! - Detect the end of the round right after each click
//!
//! ## Round State Machine
//!
//! `InProgress → Over` the moment every card is matched. [`RoundController::reset`]
//! starts the next round in `InProgress`. Clicks after `Over` are accepted
//! but can't change anything, since every card is face-up.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::history::ClickHistory;
use super::observer::{NoopObserver, RoundObserver};
use crate::board::{BoardState, CardView, ValueAssignment};
use crate::core::{CardPosition, GameRng, GameRngState, MemoryConfig, MemoryError};
use crate::rules::{resolve, ClickKind, Resolution};

/// Whether the current round is still being played.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundStatus {
    /// At least one pair remains hidden.
    #[default]
    InProgress,
    /// Every pair has been found.
    Over,
}

/// Result of one click, after it has been applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClickOutcome {
    /// What the resolver decided.
    pub resolution: Resolution,
    /// How the click was classified.
    pub kind: ClickKind,
    /// Move count after the click.
    pub moves: u32,
    /// Round status after the click.
    pub status: RoundStatus,
    /// True only on the click that ended the round.
    pub round_ended: bool,
}

/// Owns the board, RNG and counters for the current round.
#[derive(Clone, Debug)]
pub struct RoundController {
    config: MemoryConfig,
    rng: GameRng,
    board: BoardState,
    moves: u32,
    generation: u32,
    status: RoundStatus,
    history: ClickHistory,
}

impl RoundController {
    /// Start a round with a freshly dealt board.
    #[must_use]
    pub fn new(config: MemoryConfig, seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let board = BoardState::new(ValueAssignment::deal(&config, &mut rng));

        info!(cards = config.card_count(), seed, "memory round started");

        Self {
            config,
            rng,
            board,
            moves: 0,
            generation: 0,
            status: RoundStatus::InProgress,
            history: ClickHistory::new(),
        }
    }

    /// Start a round with a fixed value assignment.
    ///
    /// Later rounds (after [`RoundController::reset`]) are dealt from `seed`.
    pub fn with_values(values: ValueAssignment, seed: u64) -> Result<Self, MemoryError> {
        let config = MemoryConfig::new(values.len())?;
        Ok(Self {
            config,
            rng: GameRng::new(seed),
            board: BoardState::new(values),
            moves: 0,
            generation: 0,
            status: RoundStatus::InProgress,
            history: ClickHistory::new(),
        })
    }

    // === Accessors ===

    /// Configuration the controller deals with.
    #[must_use]
    pub fn config(&self) -> &MemoryConfig {
        &self.config
    }

    /// Current board.
    #[must_use]
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// Value assignment of the current round.
    #[must_use]
    pub fn values(&self) -> &ValueAssignment {
        self.board.values()
    }

    /// Completed pair attempts this round.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Round counter, starting at 0 and bumped on every reset.
    #[must_use]
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Current round status.
    #[must_use]
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    /// True once every pair is found.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status == RoundStatus::Over
    }

    /// Clicks of the current round.
    #[must_use]
    pub fn history(&self) -> &ClickHistory {
        &self.history
    }

    /// What to show for one card.
    #[must_use]
    pub fn view(&self, position: CardPosition) -> Option<CardView> {
        self.board.view(position)
    }

    // === Play ===

    /// Handle a click without observing events.
    pub fn click(&mut self, position: CardPosition) -> Result<ClickOutcome, MemoryError> {
        self.click_with(position, &mut NoopObserver)
    }

    /// Handle a click, reporting moves, pairs and round end to `observer`.
    pub fn click_with(
        &mut self,
        position: CardPosition,
        observer: &mut dyn RoundObserver,
    ) -> Result<ClickOutcome, MemoryError> {
        let (resolution, kind) = resolve(position, &self.board)?;
        self.board.apply(&resolution)?;

        if resolution.move_completed {
            self.moves += 1;
            observer.on_move_completed(self.moves);
        }

        if let Some((first, second)) = resolution.newly_found {
            debug!(%first, %second, "pair found");
            observer.on_pair_found(first, second);
        }

        self.history.record(self.generation, position, kind, self.moves);

        let round_ended = self.status == RoundStatus::InProgress && self.board.is_complete();
        if round_ended {
            self.status = RoundStatus::Over;
            info!(
                generation = self.generation,
                moves = self.moves,
                "memory round over"
            );
            observer.on_round_over(self.moves);
        }

        Ok(ClickOutcome {
            resolution,
            kind,
            moves: self.moves,
            status: self.status,
            round_ended,
        })
    }

    /// Start the next round: new deal, every card face-down, moves back to 0.
    pub fn reset(&mut self) {
        self.board = BoardState::new(ValueAssignment::deal(&self.config, &mut self.rng));
        self.moves = 0;
        self.generation += 1;
        self.status = RoundStatus::InProgress;
        self.history.clear();

        info!(generation = self.generation, "memory round reset");
    }

    // === Snapshots ===

    /// Capture the whole controller state.
    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            config: self.config,
            board: self.board.clone(),
            moves: self.moves,
            generation: self.generation,
            rng: self.rng.state(),
            history: self.history.clone(),
        }
    }

    /// Resume from a snapshot.
    ///
    /// The board must match the configured card count and the history must
    /// belong to the captured round and move count. The status is derived
    /// from the board, and later deals continue the captured RNG stream.
    pub fn restore(snapshot: RoundSnapshot) -> Result<Self, MemoryError> {
        let RoundSnapshot {
            config,
            board,
            moves,
            generation,
            rng,
            history,
        } = snapshot;

        if board.card_count() != config.card_count() {
            return Err(MemoryError::LengthMismatch {
                expected: config.card_count(),
                actual: board.card_count(),
            });
        }

        if !history.matches_round(generation, moves) {
            return Err(MemoryError::HistoryMismatch { generation, moves });
        }

        let status = if board.is_complete() {
            RoundStatus::Over
        } else {
            RoundStatus::InProgress
        };

        debug!(generation, moves, ?status, "memory round restored");

        Ok(Self {
            config,
            rng: GameRng::from_state(&rng),
            board,
            moves,
            generation,
            status,
            history,
        })
    }
}

/// Serializable capture of a [`RoundController`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    /// Deal configuration.
    pub config: MemoryConfig,
    /// Board of the current round.
    pub board: BoardState,
    /// Move count.
    pub moves: u32,
    /// Round counter.
    pub generation: u32,
    /// RNG position for later deals.
    pub rng: GameRngState,
    /// Clicks of the current round.
    pub history: ClickHistory,
}
