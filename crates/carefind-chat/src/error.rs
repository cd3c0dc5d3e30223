//! Error types for the conversation engine and session adapter.

use carefind_core::error::CareFindError;

/// Errors from the chat engine.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("message cannot be empty")]
    EmptyMessage,
    #[error("message exceeds maximum length of {0} characters")]
    MessageTooLong(usize),
    #[error("hospital not found: {0}")]
    HospitalNotFound(String),
    #[error("directory error: {0}")]
    Directory(String),
}

impl From<CareFindError> for ChatError {
    fn from(err: CareFindError) -> Self {
        ChatError::Directory(err.to_string())
    }
}
