//! Game state.
//!
//! ## GameState
//!
//! Everything needed to continue a game:
//! - The board
//! - Both players and their capture banks
//! - One ko snapshot per player (the board right after that player's last
//!   accepted move)
//! - Whose turn it is (`None` until the first move is accepted)
//! - The result, once the game is won
//!
//! Read access is public. Only `rules::MoveEngine` mutates the state; the
//! `make_move` convenience method here delegates to it.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::cell::{Cell, MarbleColor};
use super::config::{GameConfig, PlayerSeat, MARBLES_PER_COLOR, RED_MARBLES};
use super::error::{BoardError, MoveError, SetupError, StateError};
use super::moves::{Direction, Move};
use super::player::{Bank, Player, PlayerId, PlayerMap};
use crate::rules::{GameResult, MoveEngine, MoveOutcome};

/// Marbles still on the board, per color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarbleCounts {
    pub white: u8,
    pub black: u8,
    pub red: u8,
}

impl MarbleCounts {
    /// Marbles remaining for a cell type; 0 for `Cell::Empty`.
    #[must_use]
    pub fn remaining(&self, cell: Cell) -> u8 {
        match cell {
            Cell::White => self.white,
            Cell::Black => self.black,
            Cell::Red => self.red,
            Cell::Empty => 0,
        }
    }

    /// `(white, black, red)`.
    #[must_use]
    pub fn into_tuple(self) -> (u8, u8, u8) {
        self.into()
    }
}

impl From<MarbleCounts> for (u8, u8, u8) {
    fn from(counts: MarbleCounts) -> Self {
        (counts.white, counts.black, counts.red)
    }
}

/// Complete state of one Kuba game.
///
/// Deserializing runs the same seating checks as `GameState::new` and
/// rejects capture banks larger than the starting marble totals.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SavedState")]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) players: PlayerMap<Player>,
    pub(crate) banks: PlayerMap<Bank>,
    pub(crate) snapshots: PlayerMap<Board>,
    pub(crate) current: Option<PlayerId>,
    pub(crate) result: Option<GameResult>,
    pub(crate) ply: u32,
}

/// A `GameState` as read from storage, before it is checked.
#[derive(Deserialize)]
struct SavedState {
    board: Board,
    players: PlayerMap<Player>,
    banks: PlayerMap<Bank>,
    snapshots: PlayerMap<Board>,
    current: Option<PlayerId>,
    result: Option<GameResult>,
    ply: u32,
}

impl TryFrom<SavedState> for GameState {
    type Error = StateError;

    fn try_from(saved: SavedState) -> Result<Self, Self::Error> {
        let seat = |p: PlayerId| {
            let player = &saved.players[p];
            PlayerSeat::new(player.name(), player.color())
        };
        GameConfig::new(seat(PlayerId(0)), seat(PlayerId(1))).validate()?;

        let red: u16 = saved.banks.iter().map(|(_, bank)| u16::from(bank.red)).sum();
        let opponent_overflow = saved
            .banks
            .iter()
            .any(|(_, bank)| bank.opponent > MARBLES_PER_COLOR);
        if red > u16::from(RED_MARBLES) || opponent_overflow {
            return Err(StateError::Bank);
        }

        Ok(Self {
            board: saved.board,
            players: saved.players,
            banks: saved.banks,
            snapshots: saved.snapshots,
            current: saved.current,
            result: saved.result,
            ply: saved.ply,
        })
    }
}

impl GameState {
    /// Create a new game on the starting board.
    ///
    /// ```
    /// use kuba_engine::core::{GameConfig, GameState, MarbleColor};
    ///
    /// let config = GameConfig::new(("PlayerA", MarbleColor::White), ("PlayerB", MarbleColor::Black));
    /// let state = GameState::new(config).unwrap();
    ///
    /// assert_eq!(state.current_turn(), None);
    /// assert_eq!(state.winner(), None);
    /// assert_eq!(state.marble_counts().into_tuple(), (8, 8, 13));
    /// ```
    pub fn new(config: GameConfig) -> Result<Self, SetupError> {
        Self::with_board(config, Board::new())
    }

    /// Create a game from an arbitrary position.
    ///
    /// Marble counts are derived from the starting totals, so positions with
    /// marbles missing only make sense for rule tests.
    pub(crate) fn with_board(config: GameConfig, board: Board) -> Result<Self, SetupError> {
        config.validate()?;
        let [first, second] = config.seats;
        let players = PlayerMap::new(|p| {
            let seat = if p.index() == 0 { &first } else { &second };
            Player::new(seat.name.clone(), seat.color)
        });

        Ok(Self {
            board,
            players,
            banks: PlayerMap::with_default(),
            snapshots: PlayerMap::with_value(board),
            current: None,
            result: None,
            ply: 0,
        })
    }

    // === Board ===

    /// The current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cell at `(row, col)`.
    pub fn marble_at(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        self.board.get(row, col)
    }

    /// The board as it stood right after `player`'s last accepted move.
    #[must_use]
    pub fn snapshot(&self, player: PlayerId) -> &Board {
        &self.snapshots[player]
    }

    // === Players ===

    /// Get a player by seat.
    #[must_use]
    pub fn player(&self, player: PlayerId) -> &Player {
        &self.players[player]
    }

    /// Iterate over (PlayerId, &Player) pairs.
    pub fn players(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.players.iter()
    }

    /// Look up a player by name.
    #[must_use]
    pub fn player_id(&self, name: &str) -> Option<PlayerId> {
        self.players.position(|p| p.name() == name)
    }

    /// The player who owns `color`.
    #[must_use]
    pub fn owner_of(&self, color: MarbleColor) -> Option<PlayerId> {
        self.players.position(|p| p.color() == color)
    }

    // === Banks ===

    /// A player's capture bank.
    #[must_use]
    pub fn bank(&self, player: PlayerId) -> Bank {
        self.banks[player]
    }

    /// Red marbles captured by the named player, or None for unknown names.
    #[must_use]
    pub fn captured_red(&self, name: &str) -> Option<u8> {
        self.player_id(name).map(|p| self.banks[p].red)
    }

    /// Opponent marbles captured by the named player, or None for unknown names.
    #[must_use]
    pub fn captured_opponent(&self, name: &str) -> Option<u8> {
        self.player_id(name).map(|p| self.banks[p].opponent)
    }

    /// Marbles of each color still on the board.
    #[must_use]
    pub fn marble_counts(&self) -> MarbleCounts {
        let mut counts = MarbleCounts {
            white: MARBLES_PER_COLOR,
            black: MARBLES_PER_COLOR,
            red: RED_MARBLES,
        };

        for (player, bank) in self.banks.iter() {
            counts.red -= bank.red;
            match self.players[player].color().opponent() {
                MarbleColor::White => counts.white -= bank.opponent,
                MarbleColor::Black => counts.black -= bank.opponent,
            }
        }
        counts
    }

    // === Turn and result ===

    /// The player whose turn it is, or None before the first move.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        self.current
    }

    /// Name of the player whose turn it is, or None before the first move.
    #[must_use]
    pub fn current_turn(&self) -> Option<&str> {
        self.current.map(|p| self.players[p].name())
    }

    /// The recorded result, once the game is won.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Name of the winner, if the game is won.
    #[must_use]
    pub fn winner(&self) -> Option<&str> {
        self.result.map(|r| self.players[r.winner].name())
    }

    /// True once a winner is recorded. No further move is accepted.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.result.is_some()
    }

    /// Number of accepted moves.
    #[must_use]
    pub fn ply(&self) -> u32 {
        self.ply
    }

    // === Moves ===

    /// Play a move for the named player.
    ///
    /// Rejected moves leave the state untouched; `is_ok()` is the
    /// accepted/rejected answer.
    ///
    /// ```
    /// use kuba_engine::core::{Cell, Direction, MoveError};
    /// use kuba_engine::{new_game, MarbleColor};
    ///
    /// let mut game = new_game(("PlayerA", MarbleColor::White), ("PlayerB", MarbleColor::Black)).unwrap();
    ///
    /// assert!(game.make_move("PlayerA", 6, 5, Direction::Forward).is_ok());
    /// assert_eq!(game.marble_at(5, 5), Ok(Cell::White));
    /// assert_eq!(
    ///     game.make_move("PlayerA", 6, 5, Direction::Left),
    ///     Err(MoveError::WrongTurn)
    /// );
    /// ```
    pub fn make_move(
        &mut self,
        player_name: &str,
        row: usize,
        col: usize,
        direction: Direction,
    ) -> Result<MoveOutcome, MoveError> {
        MoveEngine::new().make_move(self, player_name, Move::new(row, col, direction))
    }
}
