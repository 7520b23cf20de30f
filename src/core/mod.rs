//! Core game types: cells, board, players, moves, state, configuration.
//!
//! Nothing in this module knows the rules of a move; see `rules` for that.

pub mod board;
pub mod cell;
pub mod config;
pub mod error;
pub mod moves;
pub mod player;
pub mod state;

pub use board::{Board, Line, Position};
pub use cell::{Cell, MarbleColor};
pub use config::{
    GameConfig, PlayerSeat, BOARD_SIZE, MARBLES_PER_COLOR, OPPONENT_CAPTURES_TO_WIN, RED_CAPTURES_TO_WIN,
    RED_MARBLES,
};
pub use error::{BoardError, MoveError, ParseError, SetupError, StateError};
pub use moves::{Axis, Direction, Move};
pub use player::{Bank, Player, PlayerId, PlayerMap};
pub use state::{GameState, MarbleCounts};
