//! The 7x7 board.
//!
//! Pure storage plus whole-line access. The board knows nothing about moves:
//! the rules engine reads a row or column with `row_view` / `col_view`,
//! rewrites it, and stores it back with `set_row` / `set_col`.
//!
//! Row 0 is the top row and column 0 the leftmost column.
//!
//! ## Text form
//!
//! Seven lines of seven space-separated tokens (`X`, `W`, `B`, `R`). The
//! starting board renders as:
//!
//! ```text
//! W W X X X B B
//! W W X R X B B
//! X X R R R X X
//! X R R R R R X
//! X X R R R X X
//! B B X R X W W
//! B B X X X W W
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::cell::Cell;
use super::config::BOARD_SIZE;
use super::error::{BoardError, ParseError};

/// One full row or column, index 0 = leftmost / topmost.
pub type Line = [Cell; BOARD_SIZE];

/// A square on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check that the position lies on the board.
    pub const fn checked(row: usize, col: usize) -> Result<Self, BoardError> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Ok(Self { row, col })
        } else {
            Err(BoardError::OutOfRange { row, col })
        }
    }

    /// Every square in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position { row, col }))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

const STARTING_LAYOUT: [[Cell; BOARD_SIZE]; BOARD_SIZE] = {
    use Cell::{Black as B, Empty as X, Red as R, White as W};
    [
        [W, W, X, X, X, B, B],
        [W, W, X, R, X, B, B],
        [X, X, R, R, R, X, X],
        [X, R, R, R, R, R, X],
        [X, X, R, R, R, X, X],
        [B, B, X, R, X, W, W],
        [B, B, X, X, X, W, W],
    ]
};

/// Fixed-size 7x7 grid of cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// The canonical starting board: 8 White, 8 Black, 13 Red.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: STARTING_LAYOUT,
        }
    }

    /// A board with every square empty.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Get the cell at a position, checking bounds.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        let pos = Position::checked(row, col)?;
        Ok(self[pos])
    }

    /// Copy of row `r`, left to right.
    ///
    /// Panics if `r` is off the board.
    #[must_use]
    pub fn row_view(&self, r: usize) -> Line {
        self.cells[r]
    }

    /// Copy of column `c`, top to bottom.
    ///
    /// Panics if `c` is off the board.
    #[must_use]
    pub fn col_view(&self, c: usize) -> Line {
        std::array::from_fn(|r| self.cells[r][c])
    }

    /// Replace row `r`.
    pub fn set_row(&mut self, r: usize, line: &Line) {
        self.cells[r] = *line;
    }

    /// Replace column `c`.
    pub fn set_col(&mut self, c: usize, line: &Line) {
        for (row, cell) in self.cells.iter_mut().zip(line) {
            row[c] = *cell;
        }
    }

    /// Number of squares holding `cell`.
    #[must_use]
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == cell).count()
    }

    /// Positions of every square holding `cell`, row-major.
    pub fn positions_of(&self, cell: Cell) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(move |&pos| self[pos] == cell)
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &Line> {
        self.cells.iter()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<Position> for Board {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.row][pos.col]
    }
}

impl std::ops::IndexMut<Position> for Board {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        &mut self.cells[pos.row][pos.col]
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.rows().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell)?;
            }
            if r + 1 < BOARD_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseError;

    /// Parse the text form. Blank lines are skipped and tokens may be
    /// separated by any whitespace or not at all.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::empty();
        let mut rows = 0;

        for (line_no, line) in s.lines().enumerate() {
            let tokens: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if tokens.is_empty() {
                continue;
            }
            if tokens.len() != BOARD_SIZE {
                return Err(ParseError::RowWidth {
                    line: line_no + 1,
                    found: tokens.len(),
                });
            }
            if rows == BOARD_SIZE {
                return Err(ParseError::RowCount(rows + 1));
            }
            for (col, token) in tokens.into_iter().enumerate() {
                board.cells[rows][col] =
                    Cell::from_token(token).ok_or_else(|| ParseError::Cell(token.to_string()))?;
            }
            rows += 1;
        }

        if rows != BOARD_SIZE {
            return Err(ParseError::RowCount(rows));
        }
        Ok(board)
    }
}
