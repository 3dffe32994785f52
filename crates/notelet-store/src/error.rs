//! Error types for the storage layer.

use thiserror::Error;
use uuid::Uuid;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during storage operations.
///
/// `NoteNotFound`, `UserNotFound`, `EmailTaken`, and `DuplicateShare` are
/// expected, typed outcomes that callers translate into API responses.
/// `Connection` wraps everything unexpected from the database and is
/// reported as an internal failure.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database connection or query error.
    #[error("database error: {0}")]
    Connection(#[from] sqlx::Error),

    /// Note not found.
    #[error("note not found: {0}")]
    NoteNotFound(Uuid),

    /// User not found.
    #[error("user not found: {0}")]
    UserNotFound(Uuid),

    /// Email already registered.
    #[error("email already registered: {0}")]
    EmailTaken(String),

    /// The note is already shared with this user.
    #[error("note {note_id} already shared with user {user_id}")]
    DuplicateShare { note_id: Uuid, user_id: Uuid },

    /// A row carried a value the domain layer rejects.
    #[error("corrupt row: {0}")]
    CorruptRow(String),

    /// Migration error.
    #[error("migration error: {0}")]
    MigrationError(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    ConfigError(String),
}
