/// Storage-specific errors
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Database connection error
    #[error("Database connection error: {0}")]
    Connection(String),

    /// Stored document does not map onto a user record
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Error reported by the MongoDB driver
    #[error(transparent)]
    Database(#[from] mongodb::error::Error),
}

impl From<StorageError> for roster_core::RosterError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Connection(msg) => roster_core::RosterError::connection(msg),
            StorageError::Database(ref e)
                if matches!(*e.kind, mongodb::error::ErrorKind::ServerSelection { .. }) =>
            {
                roster_core::RosterError::connection(e.to_string())
            }
            other => roster_core::RosterError::database(other.to_string()),
        }
    }
}
