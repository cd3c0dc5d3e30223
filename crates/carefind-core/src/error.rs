use thiserror::Error;

/// Top-level error type for CareFind.
///
/// The chat crate defines its own `ChatError` and converts from this type so
/// that the `?` operator works across crate boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CareFindError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Directory error: {0}")]
    Directory(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for CareFindError {
    fn from(err: toml::de::Error) -> Self {
        CareFindError::Config(err.to_string())
    }
}

/// A specialized `Result` type for CareFind operations.
pub type Result<T> = std::result::Result<T, CareFindError>;
