//! The push mechanic.
//!
//! A push only ever touches the row or column holding the pushed marble.
//! The line is oriented so the push travels toward its far end, the chain of
//! marbles starting at the mover slides one slot, and the line is written
//! back. When the chain reaches the far edge with no gap, the far-end marble
//! falls off the board and is reported as captured.
//!
//! Legality (whose turn, ownership, self-capture, ko) is the engine's job;
//! this module only computes the resulting board.

use crate::core::board::{Board, Line, Position};
use crate::core::cell::Cell;
use crate::core::config::BOARD_SIZE;
use crate::core::moves::{Axis, Direction};

/// Board produced by a push, before any legality check on the result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Push {
    /// The board after the push.
    pub board: Board,

    /// Marble ejected off the far edge, if any.
    pub captured: Option<Cell>,
}

/// Push the marble at `from` one step in `direction`.
///
/// `from` must be on the board.
#[must_use]
pub fn push(board: &Board, from: Position, direction: Direction) -> Push {
    let (mut line, index) = match direction.axis() {
        Axis::Row => (board.row_view(from.row), from.col),
        Axis::Column => (board.col_view(from.col), from.row),
    };

    let captured = if direction.toward_origin() {
        line.reverse();
        let captured = push_line(&mut line, BOARD_SIZE - 1 - index);
        line.reverse();
        captured
    } else {
        push_line(&mut line, index)
    };

    let mut next = *board;
    match direction.axis() {
        Axis::Row => next.set_row(from.row, &line),
        Axis::Column => next.set_col(from.col, &line),
    }

    Push {
        board: next,
        captured,
    }
}

/// Slide the chain starting at `from` one slot toward the end of the line.
///
/// The chain stops at the first empty cell, which it fills. With no empty
/// cell the last cell is pushed out and returned.
pub fn push_line(line: &mut Line, from: usize) -> Option<Cell> {
    let (end, captured) = match line[from..].iter().position(|c| c.is_empty()) {
        Some(offset) => (from + offset, None),
        None => (BOARD_SIZE - 1, Some(line[BOARD_SIZE - 1])),
    };

    line.copy_within(from..end, from + 1);
    line[from] = Cell::Empty;
    captured
}

#[cfg(test)]
mod tests {
    use super::*;
    use Cell::{Black as B, Empty as X, Red as R, White as W};

    #[test]
    fn test_push_line_into_gap() {
        let mut line = [W, W, X, R, X, B, B];
        assert_eq!(push_line(&mut line, 0), None);
        assert_eq!(line, [X, W, W, R, X, B, B]);
    }

    #[test]
    fn test_push_line_stops_at_first_gap() {
        let mut line = [X, W, R, X, R, X, X];
        assert_eq!(push_line(&mut line, 1), None);
        assert_eq!(line, [X, X, W, R, R, X, X]);
    }

    #[test]
    fn test_push_line_ejects_far_marble() {
        let mut line = [X, X, W, R, R, B, R];
        assert_eq!(push_line(&mut line, 2), Some(R));
        assert_eq!(line, [X, X, X, W, R, R, B]);
    }

    #[test]
    fn test_push_line_from_edge() {
        let mut line = [X, X, X, X, X, X, W];
        assert_eq!(push_line(&mut line, 6), Some(W));
        assert_eq!(line, [X; BOARD_SIZE]);
    }

    #[test]
    fn test_push_forward_from_bottom_edge() {
        let board = Board::new();
        let result = push(&board, Position::new(6, 5), Direction::Forward);

        assert_eq!(result.captured, None);
        assert_eq!(result.board.col_view(5), [B, B, X, R, W, W, X]);
        // Only column 5 changed.
        for col in (0..BOARD_SIZE).filter(|&c| c != 5) {
            assert_eq!(result.board.col_view(col), board.col_view(col));
        }
    }

    #[test]
    fn test_push_left_along_row() {
        let board = Board::new();
        let result = push(&board, Position::new(5, 6), Direction::Left);

        assert_eq!(result.captured, None);
        assert_eq!(result.board.row_view(5), [B, B, X, R, W, W, X]);
    }

    #[test]
    fn test_push_backward_ejects_bottom_marble() {
        let board: Board = "\
            X X X X X X X
            X X X W X X X
            X X X R X X X
            X X X B X X X
            X X X R X X X
            X X X R X X X
            X X X B X X X"
            .parse()
            .unwrap();

        let result = push(&board, Position::new(1, 3), Direction::Backward);

        assert_eq!(result.captured, Some(B));
        assert_eq!(result.board.col_view(3), [X, X, W, R, B, R, R]);
    }

    #[test]
    fn test_push_right_ejects_own_color() {
        let board: Board = "\
            X X X X X X X
            X X X X X X X
            X X X X X X X
            X X X X X X X
            X X X X X X X
            X X X X W R W
            X X X X X X X"
            .parse()
            .unwrap();

        let result = push(&board, Position::new(5, 4), Direction::Right);

        assert_eq!(result.captured, Some(W));
        assert_eq!(result.board.row_view(5), [X, X, X, X, X, W, R]);
    }
}
