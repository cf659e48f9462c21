use std::io;

use thiserror::Error;

/// Failures raised by a rules engine while the search drives it
#[derive(Debug, Error)]
pub enum RulesError {
    #[error("illegal move: {0}")]
    IllegalMove(String),

    #[error("undo requested with no move to take back")]
    NothingToUndo,

    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// Catch-all for rules engines that detect their own corruption
    #[error("rules engine inconsistency: {0}")]
    Inconsistent(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("selection thread panicked")]
    Panicked,
}
