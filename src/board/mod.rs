//! Board state and value assignment.
//!
//! - `ValueAssignment`: which value sits under each card, dealt per round
//! - `BoardState`: the assignment plus face-up and matched flags
//! - `CardView`: per-card summary for presentation layers

pub mod values;
pub mod state;

pub use values::ValueAssignment;
pub use state::{BoardState, CardView, UnresolvedCards};
