//! Cell contents and marble colors.
//!
//! ## Cell
//!
//! What a board square holds: nothing, a player marble (White or Black), or a
//! neutral Red marble. The text form is one character per cell: `X` for an
//! empty square, `W`, `B` and `R` for marbles.
//!
//! ## MarbleColor
//!
//! The two colors a player can be assigned. Red is never a player color, so
//! it has no `MarbleColor`.
//!
//! ```
//! use kuba_engine::core::{Cell, MarbleColor};
//!
//! assert_eq!(MarbleColor::White.cell(), Cell::White);
//! assert_eq!(MarbleColor::White.opponent(), MarbleColor::Black);
//! assert_eq!("R".parse::<Cell>().unwrap(), Cell::Red);
//! assert_eq!(Cell::Empty.to_string(), "X");
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::ParseError;

/// Contents of one board square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    White,
    Black,
    /// Neutral marble, never owned by a player.
    Red,
}

impl Cell {
    /// Single-character token used in the text form.
    #[must_use]
    pub const fn token(self) -> char {
        match self {
            Cell::Empty => 'X',
            Cell::White => 'W',
            Cell::Black => 'B',
            Cell::Red => 'R',
        }
    }

    /// Parse a single-character token.
    #[must_use]
    pub const fn from_token(token: char) -> Option<Self> {
        match token {
            'X' | '.' => Some(Cell::Empty),
            'W' => Some(Cell::White),
            'B' => Some(Cell::Black),
            'R' => Some(Cell::Red),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The player color of this marble, if it is a player marble.
    #[must_use]
    pub const fn color(self) -> Option<MarbleColor> {
        match self {
            Cell::White => Some(MarbleColor::White),
            Cell::Black => Some(MarbleColor::Black),
            Cell::Empty | Cell::Red => None,
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl FromStr for Cell {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Cell::from_token(c).ok_or_else(|| ParseError::Cell(s.to_string())),
            _ => Err(ParseError::Cell(s.to_string())),
        }
    }
}

/// Marble color assigned to a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarbleColor {
    White,
    Black,
}

impl MarbleColor {
    /// Both player colors.
    pub const ALL: [MarbleColor; 2] = [MarbleColor::White, MarbleColor::Black];

    /// The board cell holding a marble of this color.
    #[must_use]
    pub const fn cell(self) -> Cell {
        match self {
            MarbleColor::White => Cell::White,
            MarbleColor::Black => Cell::Black,
        }
    }

    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            MarbleColor::White => MarbleColor::Black,
            MarbleColor::Black => MarbleColor::White,
        }
    }
}

impl std::fmt::Display for MarbleColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarbleColor::White => write!(f, "white"),
            MarbleColor::Black => write!(f, "black"),
        }
    }
}

impl FromStr for MarbleColor {
    type Err = ParseError;

    /// Accepts the board tokens `W` / `B` and the words `white` / `black`
    /// in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "w" | "white" => Ok(MarbleColor::White),
            "b" | "black" => Ok(MarbleColor::Black),
            _ => Err(ParseError::Color(s.to_string())),
        }
    }
}

impl From<MarbleColor> for Cell {
    fn from(color: MarbleColor) -> Self {
        color.cell()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_tokens() {
        for cell in [Cell::Empty, Cell::White, Cell::Black, Cell::Red] {
            assert_eq!(Cell::from_token(cell.token()), Some(cell));
        }
        assert_eq!(Cell::from_token('.'), Some(Cell::Empty));
        assert_eq!(Cell::from_token('Q'), None);
    }

    #[test]
    fn test_cell_from_str_rejects_multiple_chars() {
        assert!("WW".parse::<Cell>().is_err());
        assert!("".parse::<Cell>().is_err());
        assert_eq!("B".parse::<Cell>(), Ok(Cell::Black));
    }

    #[test]
    fn test_cell_color() {
        assert_eq!(Cell::White.color(), Some(MarbleColor::White));
        assert_eq!(Cell::Black.color(), Some(MarbleColor::Black));
        assert_eq!(Cell::Red.color(), None);
        assert_eq!(Cell::Empty.color(), None);
        assert!(Cell::default().is_empty());
    }

    #[test]
    fn test_marble_color_parse() {
        assert_eq!("W".parse::<MarbleColor>(), Ok(MarbleColor::White));
        assert_eq!("black".parse::<MarbleColor>(), Ok(MarbleColor::Black));
        assert_eq!(
            "R".parse::<MarbleColor>(),
            Err(ParseError::Color("R".to_string()))
        );
    }

    #[test]
    fn test_marble_color_opponent() {
        for color in MarbleColor::ALL {
            assert_ne!(color, color.opponent());
            assert_eq!(color, color.opponent().opponent());
            assert_eq!(Cell::from(color).color(), Some(color));
        }
    }
}
