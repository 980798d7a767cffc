//! # memory-match
//!
//! Engine for a memory-matching card game: cards are dealt face-down in
//! pairs, the player reveals two per move, matches stay face-up, mismatches
//! are turned back down on the next click, and the round ends when every
//! pair is found.
//!
//! ## Design Principles
//!
//! 1. **Pure Resolution**: `rules::resolve` maps (click, board) to a
//!    `Resolution` without touching the board. Applying it is a separate,
//!    explicit step.
//!
//! 2. **Single Owner**: `RoundController` owns the board for the whole round
//!    and is the only thing that mutates it. Round end is checked
//!    synchronously after every click.
//!
//! 3. **Deterministic Deals**: values are shuffled with a seeded ChaCha8 RNG,
//!    so the same seed always produces the same rounds.
//!
//! ## Modules
//!
//! - `core`: Card positions and values, configuration, errors, RNG
//! - `board`: Value assignment, face-up and matched flags, card views
//! - `rules`: Turn resolution
//! - `round`: Round controller, observer callbacks, click history, snapshots
//!
//! ## Example
//!
//! ```
//! use memory_match::{CardPosition, RoundController, RoundStatus, ValueAssignment};
//!
//! let values = ValueAssignment::from_raw(&[0, 1, 1, 0]).unwrap();
//! let mut round = RoundController::with_values(values, 7).unwrap();
//!
//! for i in [0, 3, 1, 2] {
//!     round.click(CardPosition::new(i)).unwrap();
//! }
//!
//! assert_eq!(round.status(), RoundStatus::Over);
//! assert_eq!(round.moves(), 2);
//! ```

pub mod core;
pub mod board;
pub mod rules;
pub mod round;

// Re-export commonly used types
pub use crate::core::{
    CardPosition, CardValue,
    MemoryConfig, MemoryError, DEFAULT_CARD_COUNT,
    GameRng, GameRngState,
};

pub use crate::board::{BoardState, CardView, ValueAssignment};

pub use crate::rules::{resolve, ClickKind, Resolution};

pub use crate::round::{
    ClickHistory, ClickOutcome, ClickRecord,
    RoundController, RoundSnapshot, RoundStatus,
    NoopObserver, RecordingObserver, RoundObserver,
};
