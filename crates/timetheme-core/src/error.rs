//! Error types for Timetheme Core

use thiserror::Error;

/// Main error type for Timetheme operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Theme error: {0}")]
    Theme(#[from] ThemeError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Errors raised at the engine boundary when input cannot be represented
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    #[error("Hour out of range 0-23: {0}")]
    InvalidHour(u32),

    #[error("Not an hour: {0:?}")]
    UnparsableHour(String),

    #[error("Unknown theme period: {0:?}")]
    InvalidPeriod(String),
}

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    #[error("Connection pool error: {0}")]
    Pool(String),
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Error::Storage(StorageError::Database(err.to_string()))
    }
}

impl From<r2d2::Error> for Error {
    fn from(err: r2d2::Error) -> Self {
        Error::Storage(StorageError::Pool(err.to_string()))
    }
}

impl serde::Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;
