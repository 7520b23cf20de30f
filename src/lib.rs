//! # kuba-engine
//!
//! Rules engine for Kuba, the two-player marble-pushing game on a 7x7 board.
//!
//! ## Rules in brief
//!
//! - Each player owns 8 marbles (White or Black); 13 neutral Red marbles sit
//!   in the middle.
//! - A move pushes one of your marbles one square along its row or column,
//!   shoving the marbles in front of it. The square behind the marble must be
//!   empty or off the board.
//! - A marble pushed off the edge is captured. You may never push off your
//!   own color, and you may not recreate the board your own previous move
//!   left behind (ko).
//! - You win by capturing 7 Red marbles, by capturing all 8 opponent
//!   marbles, or when your opponent has no legal move.
//!
//! ## Design
//!
//! - **Plain values**: `GameState` is an owned, cloneable value with no
//!   global state. Hosts that share a game across threads wrap it in a lock.
//!
//! - **One writer**: `rules::MoveEngine` is the only code that mutates a
//!   `GameState`. Rejected moves leave it untouched.
//!
//! - **Enumerated rejections**: every rejected move carries a `MoveError`;
//!   `Result::is_ok` is the accepted/rejected answer.
//!
//! ## Modules
//!
//! - `core`: cells, board, players, moves, state, configuration, errors
//! - `rules`: push mechanic, move engine, win conditions
//! - `python` (feature `python`): PyO3 bindings
//!
//! ## Example
//!
//! ```
//! use kuba_engine::{new_game, Direction, MarbleColor};
//!
//! let mut game = new_game(("PlayerA", MarbleColor::White), ("PlayerB", MarbleColor::Black))?;
//!
//! game.make_move("PlayerA", 6, 5, Direction::Forward)?;
//! assert_eq!(game.current_turn(), Some("PlayerB"));
//! assert!(game.make_move("PlayerA", 5, 5, Direction::Forward).is_err());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod core;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Bank, Board, BoardError, Cell, Direction, GameConfig, GameState, MarbleColor, MarbleCounts,
    Move, MoveError, ParseError, Player, PlayerId, PlayerSeat, Position, SetupError,
    StateError,
};

pub use crate::rules::{GameResult, MoveEngine, MoveOutcome, WinReason};

/// Start a game on the canonical board.
///
/// Exactly one player must take White and the other Black, in either order.
/// Names must be distinct and non-empty.
pub fn new_game(
    first: (impl Into<String>, MarbleColor),
    second: (impl Into<String>, MarbleColor),
) -> Result<GameState, SetupError> {
    GameState::new(GameConfig::new(
        PlayerSeat::new(first.0, first.1),
        PlayerSeat::new(second.0, second.1),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_either_color_order() {
        let game = new_game(("PlayerA", MarbleColor::Black), ("PlayerB", MarbleColor::White)).unwrap();

        assert_eq!(game.player(PlayerId::new(0)).color(), MarbleColor::Black);
        assert_eq!(game.marble_counts().into_tuple(), (8, 8, 13));
    }

    #[test]
    fn test_new_game_rejects_same_color() {
        assert_eq!(
            new_game(("PlayerA", MarbleColor::White), ("PlayerB", MarbleColor::White)),
            Err(SetupError::SameColor(MarbleColor::White))
        );
    }
}
