//! Error types for the kona application.
//!
//! A single enum covers every failure the service can surface, and each
//! variant knows which HTTP status it maps to.

use axum::http::StatusCode;
use thiserror::Error;

/// The main error type for kona operations.
#[derive(Error, Debug)]
pub enum KonaError {
    /// SQLite errors (opening the database or running a query)
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Invalid request parameter errors
    #[error("Invalid parameter: {param} - {message}")]
    InvalidParameter { param: String, message: String },

    /// Data not found errors
    #[error("Data not found: {message}")]
    DataNotFound { message: String },

    /// Stored data that does not have the expected shape
    #[error("Invalid data: {message}")]
    InvalidData { message: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Server errors
    #[error("Server error: {message}")]
    Server { message: String },
}

impl KonaError {
    /// HTTP status code reported to the client for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            KonaError::InvalidParameter { .. } => StatusCode::BAD_REQUEST,
            KonaError::DataNotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Convenience type alias for Results with KonaError
pub type Result<T> = std::result::Result<T, KonaError>;
