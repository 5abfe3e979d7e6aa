use thiserror::Error;

/// Errors that can occur when interacting with the store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A database error occurred.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A database migration error occurred.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A persisted row could not be mapped back to a record.
    #[error("Corrupt row in table {table}: {reason}")]
    CorruptRow { table: &'static str, reason: String },
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StorageError>;
