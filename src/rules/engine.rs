//! The move engine: the only code that mutates a `GameState`.
//!
//! A move is checked in a fixed order and rejected at the first failure:
//!
//! 1. the game is not over
//! 2. the player is seated and it is their turn (anyone may open)
//! 3. the coordinates are on the board
//! 4. the square holds the player's own marble
//! 5. the square behind the marble is off the board or empty
//! 6. the push does not eject the player's own marble
//! 7. the resulting board differs from the player's last post-move board (ko)
//!
//! Checks 6 and 7 run against a candidate board computed on a copy, so a
//! rejection never touches the state.

use smallvec::SmallVec;
use tracing::{debug, info, instrument};

use crate::core::board::Position;
use crate::core::cell::Cell;
use crate::core::error::MoveError;
use crate::core::moves::{Direction, Move};
use crate::core::player::PlayerId;
use crate::core::state::GameState;

use super::outcome::{GameResult, WinReason};
use super::push::{push, Push};

/// Legal moves of one player. At most 8 marbles x 4 directions.
pub type MoveList = SmallVec<[Move; 32]>;

/// Summary of an accepted move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Who moved.
    pub player: PlayerId,

    /// The move played.
    pub mv: Move,

    /// Marble pushed off the board, if any.
    pub captured: Option<Cell>,

    /// Set when this move won the game.
    pub result: Option<GameResult>,
}

/// Kuba rules engine.
///
/// Stateless: all game data lives in `GameState`.
#[derive(Clone, Copy, Debug, Default)]
pub struct MoveEngine;

impl MoveEngine {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Play a move for the named player.
    ///
    /// On success the board, banks, ko snapshot and turn are updated and the
    /// win conditions evaluated. On rejection the state is unchanged.
    #[instrument(level = "debug", skip(self, state), fields(ply = state.ply()))]
    pub fn make_move(
        &self,
        state: &mut GameState,
        player_name: &str,
        mv: Move,
    ) -> Result<MoveOutcome, MoveError> {
        let played = if state.is_terminal() {
            Err(MoveError::GameOver)
        } else {
            state
                .player_id(player_name)
                .ok_or(MoveError::UnknownPlayer)
                .and_then(|player| self.play(state, player, mv))
        };

        if let Err(err) = &played {
            debug!(%err, "move rejected");
        }
        played
    }

    /// Play a move for a seated player.
    pub fn play(
        &self,
        state: &mut GameState,
        player: PlayerId,
        mv: Move,
    ) -> Result<MoveOutcome, MoveError> {
        let push = self.check(state, player, mv)?;
        Ok(self.commit(state, player, mv, push))
    }

    /// Check a move without playing it.
    ///
    /// This is the full legality predicate: `Ok` means `play` would accept the
    /// move. The returned `Push` holds the board the move would produce.
    pub fn check(&self, state: &GameState, player: PlayerId, mv: Move) -> Result<Push, MoveError> {
        if state.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if state.current_player().is_some_and(|current| current != player) {
            return Err(MoveError::WrongTurn);
        }

        let pos = Position::checked(mv.position.row, mv.position.col)?;
        let own = state.player(player).color().cell();
        let board = state.board();

        if board[pos] != own {
            return Err(MoveError::WrongMarble);
        }
        if let Some(behind) = mv.direction.reverse().step(pos) {
            if !board[behind].is_empty() {
                return Err(MoveError::IllegalDirection);
            }
        }

        let push = push(board, pos, mv.direction);
        if push.captured == Some(own) {
            return Err(MoveError::SelfCapture);
        }
        if push.board == *state.snapshot(player) {
            return Err(MoveError::KoViolation);
        }

        Ok(push)
    }

    /// Apply a checked push: board, ko snapshot, bank, result and turn.
    fn commit(&self, state: &mut GameState, player: PlayerId, mv: Move, push: Push) -> MoveOutcome {
        state.board = push.board;
        state.snapshots[player] = push.board;
        state.ply += 1;

        let mut result = None;
        if let Some(captured) = push.captured {
            let color = state.players[player].color();
            state.banks[player].record(color, captured);
            debug!(%player, %captured, bank = ?state.banks[player], "marble captured");
            result = GameResult::from_bank(player, &state.banks[player]);
        }

        match result {
            Some(won) => {
                info!(winner = state.players[player].name(), reason = %won.reason, "game won");
                state.result = Some(won);
                state.current = Some(player);
            }
            None => state.current = Some(player.opponent()),
        }

        MoveOutcome {
            player,
            mv,
            captured: push.captured,
            result,
        }
    }

    /// Every move `player` could legally play right now.
    ///
    /// Empty when the game is over or it is the other player's turn.
    pub fn legal_moves(&self, state: &GameState, player: PlayerId) -> MoveList {
        let own = state.player(player).color().cell();

        state
            .board()
            .positions_of(own)
            .flat_map(|pos| Direction::ALL.map(|dir| Move::new(pos.row, pos.col, dir)))
            .filter(|&mv| self.check(state, player, mv).is_ok())
            .collect()
    }

    /// Whether `player` has at least one legal move.
    pub fn has_legal_move(&self, state: &GameState, player: PlayerId) -> bool {
        let own = state.player(player).color().cell();

        state.board().positions_of(own).any(|pos| {
            Direction::ALL
                .into_iter()
                .any(|dir| self.check(state, player, Move::new(pos.row, pos.col, dir)).is_ok())
        })
    }

    /// Check if the game is over.
    ///
    /// Returns the recorded result, or a `Blockade` win for the opponent when
    /// the player to move has no legal move. Never mutates the state.
    pub fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        if let Some(result) = state.result() {
            return Some(result);
        }

        let to_move = state.current_player()?;
        (!self.has_legal_move(state, to_move))
            .then(|| GameResult::new(to_move.opponent(), WinReason::Blockade))
    }

    /// Record a `Blockade` win when the player to move has no legal move.
    ///
    /// `make_move` never does this on its own; hosts call it between moves.
    /// Returns the game result, if any.
    pub fn resolve_blockade(&self, state: &mut GameState) -> Option<GameResult> {
        let result = self.is_terminal(state)?;
        if state.result.is_none() {
            info!(
                winner = state.players[result.winner].name(),
                reason = %result.reason,
                "game won"
            );
            state.result = Some(result);
        }
        Some(result)
    }
}
