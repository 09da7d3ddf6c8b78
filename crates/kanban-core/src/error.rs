use thiserror::Error;

#[derive(Error, Debug)]
pub enum KanbanError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl KanbanError {
    /// True for errors the caller caused with bad input, as opposed to
    /// environment failures such as a full disk.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

