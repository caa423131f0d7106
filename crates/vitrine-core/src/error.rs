//! Error types for Vitrine

use thiserror::Error;

/// Main error type for Vitrine operations
///
/// Interactive operations (filtering, stepping the lightbox, animating
/// counters) never fail. Errors only surface at the edges: the preference
/// store and the content loader.
#[derive(Error, Debug)]
pub enum VitrineError {
    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Content document could not be deserialized
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A theme string other than "light" or "dark"
    #[error("Invalid theme: {0}")]
    InvalidTheme(String),

    /// A content entry is missing a required field
    #[error("Malformed entry #{index}: {reason}")]
    MalformedEntry { index: usize, reason: String },
}

impl From<serde_json::Error> for VitrineError {
    fn from(err: serde_json::Error) -> Self {
        VitrineError::Serialization(err.to_string())
    }
}

/// Result type alias using VitrineError
pub type VitrineResult<T> = Result<T, VitrineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VitrineError::InvalidTheme("sepia".to_string());
        assert_eq!(format!("{}", err), "Invalid theme: sepia");

        let err = VitrineError::MalformedEntry {
            index: 3,
            reason: "missing title".to_string(),
        };
        assert_eq!(format!("{}", err), "Malformed entry #3: missing title");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: VitrineError = io_err.into();
        assert!(matches!(err, VitrineError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err: VitrineError = json_err.into();
        assert!(matches!(err, VitrineError::Serialization(_)));
    }
}
