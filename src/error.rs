use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Word bank has no words of length {length}")]
    EmptyWordBank { length: usize },
    #[error("Failed to read word bank from '{}': {source}", path.display())]
    WordBankIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Board cell must hold at most one letter, got {0:?}")]
    InvalidCell(String),
}

/// Failures of a [`PersistenceStore`](crate::persistence::PersistenceStore) backend.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("Stored value is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
