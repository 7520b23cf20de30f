//! Kuba rules.
//!
//! - `push`: the push mechanic on a single row or column
//! - `engine`: `MoveEngine`, which validates and plays moves
//! - `outcome`: game results and win conditions
//!
//! The engine is the only writer of `GameState`.

pub mod engine;
pub mod outcome;
pub mod push;

pub use engine::{MoveEngine, MoveList, MoveOutcome};
pub use outcome::{GameResult, WinReason};
pub use push::Push;
