//! Error types for the fallible edges of the crate.
//!
//! The rules engine itself is total: move generation, legality, check and
//! status queries always return a definite answer. Errors only arise where
//! text or storage crosses into the crate: algebraic squares, placement
//! strings, the key-value store, account validation and configuration.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("invalid algebraic square: {0}")]
    InvalidSquare(String),

    #[error("invalid algebraic file: {0}")]
    InvalidFile(char),

    #[error("invalid algebraic rank: {0}")]
    InvalidRank(char),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("placement must contain 8 ranks, found {0}")]
    WrongRankCount(usize),

    #[error("invalid empty-square count '{0}'")]
    InvalidEmptyCount(char),

    #[error("invalid piece character '{0}' in placement")]
    InvalidPiece(char),

    #[error("rank {rank} does not sum to 8 files")]
    WrongFileCount { rank: usize },
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("store record is malformed: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("password hashing failed: {0}")]
    PasswordHash(String),
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("username must be at least {0} characters")]
    UsernameTooShort(usize),

    #[error("password must be at least {0} characters")]
    PasswordTooShort(usize),

    #[error("passwords do not match")]
    PasswordMismatch,

    #[error("username already exists")]
    UsernameTaken,

    #[error("username and password are required")]
    MissingCredentials,

    #[error("invalid username or password")]
    InvalidCredentials,

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{name} is not a valid number: {value}")]
    InvalidNumber { name: &'static str, value: String },

    #[error("{0} must be greater than zero")]
    Zero(&'static str),
}
