//! Error types for the games loader
//!
//! The crate result is an `anyhow::Result`; the specific failure modes callers
//! may want to branch on are variants of [`LoaderError`] and can be recovered
//! with `downcast_ref`.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific loader scenarios
#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    #[error("MDB file not found: {path}")]
    SourceNotFound { path: String },

    #[error("Table could not be exported: {table}: {reason}")]
    TableExportFailed { table: String, reason: String },

    #[error("Table not loaded: {table}")]
    TableNotLoaded { table: String },

    #[error("Games table not built; run clean_games first")]
    GamesNotBuilt,

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}

impl LoaderError {
    /// True for the errors raised when an operation runs before the state it needs exists
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            LoaderError::TableNotLoaded { .. } | LoaderError::GamesNotBuilt
        )
    }
}
