use std::fmt::Display;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Rejected input; the message is returned to the client as-is.
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Storage error: {0}")]
    StorageError(String),
    /// `message` names the failed operation for the client, `detail` is only logged.
    #[error("{message}: {detail}")]
    DatabaseError { message: String, detail: String },
}

impl ApplicationError {
    pub fn database(message: &str, detail: impl Display) -> Self {
        ApplicationError::DatabaseError {
            message: message.to_string(),
            detail: detail.to_string(),
        }
    }
}
