//! Round control: owns board state, counts moves, detects round end, resets.
//!
//! The controller is the only thing that mutates a `BoardState` during play.
//! Presentation layers drive it with `click` / `reset` and either inspect the
//! returned `ClickOutcome` or pass a `RoundObserver`.

pub mod controller;
pub mod history;
pub mod observer;

pub use controller::{ClickOutcome, RoundController, RoundSnapshot, RoundStatus};
pub use history::{ClickHistory, ClickRecord};
pub use observer::{NoopObserver, RecordingObserver, RoundObserver};
