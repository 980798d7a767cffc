//! Core types: card positions and values, configuration, errors, RNG.
//!
//! Everything else in the crate is built from these.

pub mod position;
pub mod config;
pub mod error;
pub mod rng;

pub use position::{CardPosition, CardValue};
pub use config::{MemoryConfig, DEFAULT_CARD_COUNT};
pub use error::MemoryError;
pub use rng::{GameRng, GameRngState};
