use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum FormatProblem {
    #[error("not an integer: {0:?}")]
    NotAnInteger(String),

    #[error("value {0} is not a move (expected 0, 1 or 2)")]
    OutOfRange(String),

    #[error("{0} integers cannot be grouped into (player, computer) pairs")]
    OddCount(usize),
}

#[derive(Error, Debug)]
pub enum LogError {
    #[error("cannot open game log {}: {source}", path.display())]
    NotFound {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("bad line {line} {content:?}: {problem}")]
    Format {
        line: usize,
        content: String,
        problem: FormatProblem,
    },

    #[error("failed reading game log: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LogError>;
