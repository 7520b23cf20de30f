//! Error types.
//!
//! Every rejected move maps to one `MoveError` variant. A rejection never
//! leaves a partially applied move behind: callers that only care about the
//! accept/reject contract can use `Result::is_ok`.

/// Reasons a move is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum MoveError {
    #[error("the game is already over")]
    GameOver,

    #[error("no player with that name is seated in this game")]
    UnknownPlayer,

    #[error("it is not this player's turn")]
    WrongTurn,

    #[error("coordinates ({row}, {col}) are off the board")]
    OutOfRange { row: usize, col: usize },

    #[error("the square does not hold one of the player's marbles")]
    WrongMarble,

    #[error("the square behind the marble is occupied")]
    IllegalDirection,

    #[error("the push would eject one of the player's own marbles")]
    SelfCapture,

    #[error("the move repeats the player's previous board position")]
    KoViolation,
}

/// Errors raised while seating the two players.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("both players were assigned the {0} marbles")]
    SameColor(crate::core::MarbleColor),

    #[error("both players are named {0:?}")]
    DuplicateName(String),

    #[error("player names must not be empty")]
    EmptyName,
}

/// Errors raised by checked board access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("coordinates ({row}, {col}) are off the board")]
    OutOfRange { row: usize, col: usize },
}

impl From<BoardError> for MoveError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::OutOfRange { row, col } => MoveError::OutOfRange { row, col },
        }
    }
}

/// Errors raised when restoring a saved game.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("seat index {0} is out of range (expected 0 or 1)")]
    Seat(u8),

    #[error(transparent)]
    Setup(#[from] SetupError),

    #[error("capture banks hold more marbles than the game started with")]
    Bank,
}

/// Errors raised when parsing the text forms of cells, colors, directions
/// and boards.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown direction token {0:?} (expected F, B, L or R)")]
    Direction(String),

    #[error("unknown marble color {0:?} (expected W or B)")]
    Color(String),

    #[error("unknown cell token {0:?} (expected W, B, R or X)")]
    Cell(String),

    #[error("board text must have 7 rows of 7 cells, found a row of {found} cells at line {line}")]
    RowWidth { line: usize, found: usize },

    #[error("board text must have 7 rows, found {0}")]
    RowCount(usize),
}
