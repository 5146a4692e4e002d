//! Error types for the board, the search and configuration loading

use std::path::PathBuf;

/// Errors raised by a board when a drop cannot be applied
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("column {0} is out of range")]
    ColumnOutOfRange(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("the game is already over")]
    GameOver,
}

/// Errors raised by the search
///
/// Every variant is a configuration mistake or a broken board contract, never a
/// transient condition, so none of them are worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("search depth must be at least 0, got {0}")]
    NegativeDepth(i32),

    #[error("board is not terminal but reports no legal columns")]
    NoLegalMoves,

    #[error("cannot choose a move, the game is already over")]
    GameOver,

    #[error("board rejected a legal column: {0}")]
    Board(#[from] BoardError),
}

/// Errors that can occur when loading configuration
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
