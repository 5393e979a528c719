use std::path::PathBuf;

/// Raised by `Board::next_open_row` on a full column. Callers are expected to
/// check `Board::is_valid_column` first, so seeing this is a bug.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("column {column} is full")]
pub struct ColumnFullError {
    pub column: usize,
}

/// Errors from parsing a text board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardParseError {
    #[error("expected 6 rows, got {0}")]
    RowCount(usize),

    #[error("row {row} has {width} cells, expected 7")]
    RowWidth { row: usize, width: usize },

    #[error("unknown cell symbol '{0}'")]
    UnknownSymbol(char),

    #[error("piece at row {row}, column {col} has an empty cell below it")]
    FloatingPiece { row: usize, col: usize },
}

/// Errors returned when a move is submitted to a match session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is out of range")]
    InvalidColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("the match is already over")]
    GameOver,

    #[error("it is not {0}'s turn")]
    NotYourTurn(&'static str),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
