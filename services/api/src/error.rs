//! services/api/src/error.rs
//!
//! Defines the primary error type for the entire API service, and the mapping
//! from core port errors onto HTTP responses.

use crate::config::ConfigError;
use axum::http::StatusCode;
use quran_reader_core::integrity::IntegrityError;
use quran_reader_core::ports::PortError;
use tracing::error;

/// The primary error type for the `api` service.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Represents an error that occurred during configuration loading.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Represents an error that propagated up from the storage port.
    #[error("Service Port Error: {0}")]
    Port(#[from] PortError),

    /// Represents an error from the underlying database library.
    #[error("Database Error: {0}")]
    Database(#[from] sqlx::Error),

    /// Represents a failure while applying the embedded migrations.
    #[error("Migration Error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// The stored reference tables failed validation.
    #[error("Reference data integrity error: {0}")]
    Integrity(#[from] IntegrityError),

    /// Represents a standard Input/Output error (e.g., binding to a network socket).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// The rejection type every handler returns.
pub type HandlerError = (StatusCode, String);

/// Maps a port error onto a response, logging anything that is not the caller's fault.
pub fn port_error_response(context: &str, err: PortError) -> HandlerError {
    match err {
        PortError::NotFound(message) => (StatusCode::NOT_FOUND, message),
        PortError::InvalidInput(message) => (StatusCode::BAD_REQUEST, message),
        PortError::Unexpected(_) => {
            error!("{}: {:?}", context, err);
            (StatusCode::INTERNAL_SERVER_ERROR, context.to_string())
        }
    }
}
