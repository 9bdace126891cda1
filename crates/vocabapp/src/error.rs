use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum VocabError {
    #[error("{0}")]
    Validation(String),

    #[error("The word '{0}' already exists")]
    Duplicate(String),

    #[error("Invalid index {index}: expected a number between 1 and {len}")]
    Range { index: usize, len: usize },

    #[error("The word list is empty")]
    EmptyList,

    #[error("Word not found: {0}")]
    NotFound(Uuid),

    #[error("Failed to save {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] confique::Error),
}

impl VocabError {
    /// Notices are expected outcomes the user should simply be told about.
    pub fn is_notice(&self) -> bool {
        matches!(self, VocabError::EmptyList)
    }
}

pub type Result<T> = std::result::Result<T, VocabError>;
