//! Error types shared by the persistence collaborators.

use thiserror::Error;

/// Errors emitted by card stores and deck snapshots.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StoreError {
    #[error("card service returned status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
    #[error("card store lock poisoned")]
    Poisoned,
    #[error("unknown card '{0}'")]
    UnknownCard(String),
    #[error("invalid deck json: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
