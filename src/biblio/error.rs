use crate::model::BookId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BiblioError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Book not found with id: {0}")]
    NotFound(BookId),

    #[error("Store error: {0}")]
    Store(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BiblioError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput(reason.into())
    }

    /// HTTP-equivalent status for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidInput(_) => 400,
            Self::NotFound(_) => 404,
            Self::Store(_) | Self::Io(_) | Self::Serialization(_) => 500,
        }
    }
}

pub type Result<T> = std::result::Result<T, BiblioError>;
