//! Game configuration and rule constants.
//!
//! A game is configured once at startup with two `PlayerSeat`s. The board
//! size and marble counts are fixed by the rules and exposed as constants.
//!
//! `GameConfig::validate` rejects seatings that would leave the rules
//! undefined: both players on the same color, duplicate names, empty names.

use serde::{Deserialize, Serialize};

use super::cell::MarbleColor;
use super::error::SetupError;
use super::player::PlayerId;

/// Width and height of the board.
pub const BOARD_SIZE: usize = 7;

/// White (and Black) marbles on the starting board.
pub const MARBLES_PER_COLOR: u8 = 8;

/// Neutral Red marbles on the starting board.
pub const RED_MARBLES: u8 = 13;

/// Captured Red marbles needed to win.
pub const RED_CAPTURES_TO_WIN: u8 = 7;

/// Captured opponent marbles needed to win (all of them).
pub const OPPONENT_CAPTURES_TO_WIN: u8 = MARBLES_PER_COLOR;

/// One player's seat: a name and the marble color they play.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerSeat {
    /// Unique player name.
    pub name: String,

    /// Marble color the player owns.
    pub color: MarbleColor,
}

impl PlayerSeat {
    /// Create a new seat.
    pub fn new(name: impl Into<String>, color: MarbleColor) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

impl<S: Into<String>> From<(S, MarbleColor)> for PlayerSeat {
    fn from((name, color): (S, MarbleColor)) -> Self {
        Self::new(name, color)
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seats indexed by `PlayerId`: seat 0 is the first player given.
    pub seats: [PlayerSeat; 2],
}

impl GameConfig {
    /// Create a configuration from two seats. Call `validate` before use.
    pub fn new(first: impl Into<PlayerSeat>, second: impl Into<PlayerSeat>) -> Self {
        Self {
            seats: [first.into(), second.into()],
        }
    }

    /// Get a seat by player.
    #[must_use]
    pub fn seat(&self, player: PlayerId) -> &PlayerSeat {
        &self.seats[player.index()]
    }

    /// Check that the two seats describe a playable game.
    ///
    /// ```
    /// use kuba_engine::core::{GameConfig, MarbleColor, SetupError};
    ///
    /// let ok = GameConfig::new(("PlayerA", MarbleColor::White), ("PlayerB", MarbleColor::Black));
    /// assert!(ok.validate().is_ok());
    ///
    /// let clash = GameConfig::new(("PlayerA", MarbleColor::Black), ("PlayerB", MarbleColor::Black));
    /// assert_eq!(clash.validate(), Err(SetupError::SameColor(MarbleColor::Black)));
    /// ```
    pub fn validate(&self) -> Result<(), SetupError> {
        let [first, second] = &self.seats;

        if first.name.is_empty() || second.name.is_empty() {
            return Err(SetupError::EmptyName);
        }
        if first.name == second.name {
            return Err(SetupError::DuplicateName(first.name.clone()));
        }
        if first.color == second.color {
            return Err(SetupError::SameColor(first.color));
        }

        Ok(())
    }
}
