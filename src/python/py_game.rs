//! Game bindings for Python.

use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::prelude::*;

use crate::core::{Direction, GameConfig, GameState, MarbleColor, Move, ParseError, PlayerId, PlayerSeat};
use crate::rules::MoveEngine;

/// Python wrapper for a Kuba game.
///
/// Mirrors the classic `KubaGame` object API: moves answer True/False and
/// marbles are reported as "W", "B", "R" or "X".
#[pyclass(name = "KubaGame")]
#[derive(Clone)]
pub struct PyKubaGame {
    state: GameState,
}

fn seat(player: (String, String)) -> PyResult<PlayerSeat> {
    let (name, color) = player;
    let color: MarbleColor = color
        .parse()
        .map_err(|e: ParseError| PyValueError::new_err(e.to_string()))?;
    Ok(PlayerSeat::new(name, color))
}

/// A `(row, col)` pair of non-negative ints that fit in `usize`.
///
/// Negative ints, ints of any size past `usize`, and anything that is not a
/// pair of ints give None.
fn coordinates(coordinates: &Bound<'_, PyAny>) -> Option<(usize, usize)> {
    coordinates.extract().ok()
}

/// Players whose moves `legal_moves` lists: the named player, else the
/// player to move, else both seats while either may still open.
fn movers(state: &GameState, player_name: Option<&str>) -> Vec<PlayerId> {
    match (player_name, state.current_player()) {
        (Some(name), _) => state.player_id(name).into_iter().collect(),
        (None, Some(current)) => vec![current],
        (None, None) => PlayerId::all().collect(),
    }
}

#[pymethods]
impl PyKubaGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - player1: (name, color) with color "W" or "B"
    /// - player2: (name, color), the other color
    ///
    /// Raises ValueError for an unknown color, both players on the same
    /// color, or duplicate / empty names.
    #[new]
    fn new(player1: (String, String), player2: (String, String)) -> PyResult<Self> {
        let config = GameConfig::new(seat(player1)?, seat(player2)?);
        let state = GameState::new(config).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { state })
    }

    /// Name of the player whose turn it is, or None before the first move.
    fn get_current_turn(&self) -> Option<String> {
        self.state.current_turn().map(str::to_string)
    }

    /// Push the marble at `coordinates` in `direction` ("F", "B", "L", "R").
    ///
    /// Returns True if the move was played, False if it was rejected.
    fn make_move(
        &mut self,
        player_name: &str,
        coordinates: &Bound<'_, PyAny>,
        direction: &str,
    ) -> bool {
        let Ok(direction) = direction.parse::<Direction>() else {
            return false;
        };
        let Some((row, col)) = self::coordinates(coordinates) else {
            return false;
        };
        MoveEngine::new()
            .make_move(&mut self.state, player_name, Move::new(row, col, direction))
            .is_ok()
    }

    /// Name of the winner, or None while the game is running.
    fn get_winner(&self) -> Option<String> {
        self.state.winner().map(str::to_string)
    }

    /// Red marbles captured by the player, or None for unknown names.
    fn get_captured(&self, player_name: &str) -> Option<u8> {
        self.state.captured_red(player_name)
    }

    /// The marble at `coordinates`: "W", "B", "R", or "X" for an empty square.
    ///
    /// Raises IndexError for coordinates off the board.
    fn get_marble(&self, coordinates: &Bound<'_, PyAny>) -> PyResult<String> {
        let (row, col) = self::coordinates(coordinates)
            .ok_or_else(|| PyIndexError::new_err("coordinates are off the board"))?;
        self.state
            .marble_at(row, col)
            .map(|cell| cell.to_string())
            .map_err(|e| PyIndexError::new_err(e.to_string()))
    }

    /// Marbles left on the board as (white, black, red).
    fn get_marble_count(&self) -> (u8, u8, u8) {
        self.state.marble_counts().into()
    }

    /// Legal moves as ((row, col), direction) pairs.
    ///
    /// With a name, lists that player's moves (empty when it is not their
    /// turn or the name is unknown). Without one, lists the moves of the
    /// player to move, or of both players before the first move.
    #[pyo3(signature = (player_name=None))]
    fn legal_moves(&self, player_name: Option<&str>) -> Vec<((usize, usize), String)> {
        let engine = MoveEngine::new();
        movers(&self.state, player_name)
            .into_iter()
            .flat_map(|player| engine.legal_moves(&self.state, player))
            .map(|mv| ((mv.position.row, mv.position.col), mv.direction.to_string()))
            .collect()
    }

    /// Record a win for the opponent if the player to move has no legal move.
    ///
    /// Returns the winner's name, if the game is over.
    fn resolve_blockade(&mut self) -> Option<String> {
        MoveEngine::new()
            .resolve_blockade(&mut self.state)
            .map(|result| self.state.player(result.winner).name().to_string())
    }

    /// The board as seven lines of space-separated tokens.
    fn get_board(&self) -> String {
        self.state.board().to_string()
    }

    /// Copy the game state.
    fn copy(&self) -> Self {
        self.clone()
    }

    fn __repr__(&self) -> String {
        let status = match self.state.winner() {
            Some(winner) => format!("winner={}", winner),
            None => format!("turn={}", self.state.current_turn().unwrap_or("None")),
        };
        let (white, black, red) = self.state.marble_counts().into_tuple();
        format!(
            "KubaGame({}, marbles=(W={}, B={}, R={}))",
            status, white, black, red
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> GameState {
        GameState::new(GameConfig::new(
            ("PlayerA", MarbleColor::White),
            ("PlayerB", MarbleColor::Black),
        ))
        .unwrap()
    }

    #[test]
    fn test_movers_before_and_after_opening() {
        let mut state = game();

        assert_eq!(movers(&state, None), vec![PlayerId::new(0), PlayerId::new(1)]);
        assert_eq!(movers(&state, Some("PlayerB")), vec![PlayerId::new(1)]);
        assert!(movers(&state, Some("nobody")).is_empty());

        state.make_move("PlayerB", 0, 6, Direction::Backward).unwrap();
        assert_eq!(movers(&state, None), vec![PlayerId::new(0)]);
    }

    #[test]
    fn test_coordinates_out_of_any_int_range() {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(|py| {
            let eval = |code: &str| py.eval_bound(code, None, None).unwrap();

            assert_eq!(coordinates(&eval("(6, 5)")), Some((6, 5)));
            assert_eq!(coordinates(&eval("(-1, 0)")), None);
            assert_eq!(coordinates(&eval("(2**70, 0)")), None);
            assert_eq!(coordinates(&eval("(0, -(2**70))")), None);
            assert_eq!(coordinates(&eval("('a', 0)")), None);
            assert_eq!(coordinates(&eval("(1, 2, 3)")), None);
        });
    }

    #[test]
    fn test_make_move_with_huge_coordinates_is_rejected() {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(|py| {
            let mut game = PyKubaGame { state: game() };
            let huge = py.eval_bound("(2**70, 5)", None, None).unwrap();
            let opening = py.eval_bound("(6, 5)", None, None).unwrap();

            assert!(!game.make_move("PlayerA", &huge, "F"));
            assert!(game.get_marble(&huge).is_err());
            assert_eq!(game.state.current_turn(), None);
            assert!(game.make_move("PlayerA", &opening, "F"));
        });
    }

    #[test]
    fn test_legal_moves_before_opening_cover_both_players() {
        let game = PyKubaGame { state: game() };

        assert_eq!(game.legal_moves(None).len(), 16);
        assert_eq!(game.legal_moves(Some("PlayerA")).len(), 8);
        assert!(game.legal_moves(Some("nobody")).is_empty());
    }
}
