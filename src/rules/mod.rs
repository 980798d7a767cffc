//! Turn resolution.
//!
//! `resolve` is a pure function from (click, board) to a `Resolution`.
//! The round controller applies the result; nothing here mutates state.

pub mod resolver;

pub use resolver::{resolve, ClickKind, Resolution};
