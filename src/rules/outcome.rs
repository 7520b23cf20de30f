//! Game results and win conditions.
//!
//! Kuba has no draws. A game ends in exactly one of three ways:
//! - the mover captures their 7th Red marble (`RedMarbles`)
//! - the mover captures the last of the opponent's 8 marbles (`Elimination`)
//! - the player to move has no legal move (`Blockade`)
//!
//! The first two are checked by the engine after every capturing move. The
//! third is only evaluated when a caller asks for it.

use serde::{Deserialize, Serialize};

use crate::core::config::{OPPONENT_CAPTURES_TO_WIN, RED_CAPTURES_TO_WIN};
use crate::core::player::{Bank, PlayerId};

/// How the game was won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinReason {
    /// Captured 7 neutral Red marbles.
    RedMarbles,
    /// Captured all 8 of the opponent's marbles.
    Elimination,
    /// The opponent had no legal move on their turn.
    Blockade,
}

impl std::fmt::Display for WinReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WinReason::RedMarbles => write!(f, "captured {} red marbles", RED_CAPTURES_TO_WIN),
            WinReason::Elimination => write!(f, "captured every opponent marble"),
            WinReason::Blockade => write!(f, "opponent has no legal move"),
        }
    }
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: PlayerId,
    pub reason: WinReason,
}

impl GameResult {
    #[must_use]
    pub const fn new(winner: PlayerId, reason: WinReason) -> Self {
        Self { winner, reason }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }

    /// Capture-based win for `player`, if their bank has reached a threshold.
    ///
    /// ```
    /// use kuba_engine::core::{Bank, PlayerId};
    /// use kuba_engine::rules::{GameResult, WinReason};
    ///
    /// let p0 = PlayerId::new(0);
    /// assert_eq!(GameResult::from_bank(p0, &Bank { red: 6, opponent: 7 }), None);
    /// assert_eq!(
    ///     GameResult::from_bank(p0, &Bank { red: 7, opponent: 0 }),
    ///     Some(GameResult::new(p0, WinReason::RedMarbles))
    /// );
    /// ```
    #[must_use]
    pub fn from_bank(player: PlayerId, bank: &Bank) -> Option<Self> {
        if bank.red >= RED_CAPTURES_TO_WIN {
            Some(Self::new(player, WinReason::RedMarbles))
        } else if bank.opponent >= OPPONENT_CAPTURES_TO_WIN {
            Some(Self::new(player, WinReason::Elimination))
        } else {
            None
        }
    }
}
