use thiserror::Error;

use crate::application::error::ApplicationError;

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("Invalid filename: {0:?}")]
    InvalidFilename(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<MediaError> for ApplicationError {
    fn from(error: MediaError) -> Self {
        ApplicationError::StorageError(error.to_string())
    }
}
