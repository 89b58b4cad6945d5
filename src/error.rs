//! Errors raised by the driver and command-line surface.
//!
//! The turn engine itself has no recoverable errors; these cover building
//! decks from explicit orders, reading configuration, and writing reports.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LandfallError {
    #[error("deck order must be a permutation of 1..=16, got {0:?}")]
    InvalidDeckOrder(Vec<u8>),

    #[error("unknown argument: '{0}'")]
    UnknownArgument(String),

    #[error("missing value for {0}")]
    MissingValue(String),

    #[error("invalid value for {flag}: '{value}'")]
    InvalidValue { flag: String, value: String },

    #[error("invalid turn range: min {min} is greater than max {max}")]
    InvalidTurnRange { min: usize, max: usize },

    #[error("{0} must be at least 1")]
    Zero(&'static str),

    #[error("failed to read config '{path}': {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
