//! Move representation: a marble position plus a push direction.
//!
//! Directions are fixed to the board axes:
//! - `Forward`: toward row 0
//! - `Backward`: toward row 6
//! - `Left`: toward column 0
//! - `Right`: toward column 6
//!
//! Text tokens are `F`, `B`, `L` and `R`.
//!
//! ```
//! use kuba_engine::core::{Direction, Move, Position};
//!
//! let mv: Move = Move::new(6, 5, "F".parse().unwrap());
//! assert_eq!(mv.position, Position::new(6, 5));
//! assert_eq!(mv.direction, Direction::Forward);
//! assert_eq!(mv.to_string(), "(6, 5) F");
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::board::Position;
use super::config::BOARD_SIZE;
use super::error::ParseError;

/// Board axis a push travels along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Along a row (Left / Right).
    Row,
    /// Along a column (Forward / Backward).
    Column,
}

/// Push direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Forward,
    Backward,
    Left,
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::Forward,
        Direction::Backward,
        Direction::Left,
        Direction::Right,
    ];

    /// Single-character token.
    #[must_use]
    pub const fn token(self) -> char {
        match self {
            Direction::Forward => 'F',
            Direction::Backward => 'B',
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }

    /// Axis the push travels along.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Direction::Forward | Direction::Backward => Axis::Column,
            Direction::Left | Direction::Right => Axis::Row,
        }
    }

    /// True when the push moves toward lower row/column indices.
    #[must_use]
    pub const fn toward_origin(self) -> bool {
        matches!(self, Direction::Forward | Direction::Left)
    }

    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// The neighbouring square one step in this direction, or None past the
    /// board edge.
    #[must_use]
    pub fn step(self, pos: Position) -> Option<Position> {
        let Position { row, col } = pos;
        let next = match self {
            Direction::Forward => Position::new(row.checked_sub(1)?, col),
            Direction::Backward => Position::new(row + 1, col),
            Direction::Left => Position::new(row, col.checked_sub(1)?),
            Direction::Right => Position::new(row, col + 1),
        };
        (next.row < BOARD_SIZE && next.col < BOARD_SIZE).then_some(next)
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl FromStr for Direction {
    type Err = ParseError;

    /// Accepts the tokens `F`, `B`, `L`, `R` and the full direction names,
    /// in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "f" | "forward" => Ok(Direction::Forward),
            "b" | "backward" => Ok(Direction::Backward),
            "l" | "left" => Ok(Direction::Left),
            "r" | "right" => Ok(Direction::Right),
            _ => Err(ParseError::Direction(s.to_string())),
        }
    }
}

/// A proposed move: push the marble at `position` in `direction`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: Position,
    pub direction: Direction,
}

impl Move {
    /// Create a move. Coordinates are not checked until the move is played.
    #[must_use]
    pub const fn new(row: usize, col: usize, direction: Direction) -> Self {
        Self {
            position: Position::new(row, col),
            direction,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.position, self.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_tokens() {
        for dir in Direction::ALL {
            assert_eq!(dir.token().to_string().parse::<Direction>(), Ok(dir));
        }
        assert_eq!("left".parse::<Direction>(), Ok(Direction::Left));
        assert_eq!("Forward".parse::<Direction>(), Ok(Direction::Forward));
        assert_eq!(
            "D".parse::<Direction>(),
            Err(ParseError::Direction("D".to_string()))
        );
    }

    #[test]
    fn test_direction_axis() {
        assert_eq!(Direction::Forward.axis(), Axis::Column);
        assert_eq!(Direction::Backward.axis(), Axis::Column);
        assert_eq!(Direction::Left.axis(), Axis::Row);
        assert_eq!(Direction::Right.axis(), Axis::Row);

        assert!(Direction::Forward.toward_origin());
        assert!(Direction::Left.toward_origin());
        assert!(!Direction::Backward.toward_origin());
        assert!(!Direction::Right.toward_origin());
    }

    #[test]
    fn test_direction_step() {
        let corner = Position::new(0, 6);

        assert_eq!(Direction::Forward.step(corner), None);
        assert_eq!(Direction::Right.step(corner), None);
        assert_eq!(Direction::Backward.step(corner), Some(Position::new(1, 6)));
        assert_eq!(Direction::Left.step(corner), Some(Position::new(0, 5)));
    }

    #[test]
    fn test_direction_reverse() {
        for dir in Direction::ALL {
            assert_ne!(dir, dir.reverse());
            assert_eq!(dir, dir.reverse().reverse());
            assert_eq!(dir.axis(), dir.reverse().axis());
        }
    }

    #[test]
    fn test_move_serialization() {
        let mv = Move::new(3, 4, Direction::Left);
        let json = serde_json::to_string(&mv).unwrap();
        let deserialized: Move = serde_json::from_str(&json).unwrap();

        assert_eq!(mv, deserialized);
    }
}
