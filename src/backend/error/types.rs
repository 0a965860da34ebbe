/**
 * Backend Error Types
 *
 * This module defines the error type used by the server outside of the
 * request handlers: configuration, binding and serving. The `/sms` handlers
 * themselves cannot fail; the only error a client ever sees is a 404 for an
 * unknown path.
 */

use thiserror::Error;
use axum::http::StatusCode;
use crate::shared::ConfigError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use smsrelay::backend::error::BackendError;
///
/// let err = BackendError::not_found("/nope");
/// assert_eq!(err.status_code().as_u16(), 404);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Invalid configuration
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Listener or connection failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No route or static file for the path
    #[error("Not found: {path}")]
    NotFound {
        /// Requested path
        path: String,
    },
}

impl BackendError {
    /// Create a new not-found error
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `NotFound` - 404 Not Found
    /// - everything else - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Config(_) | Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        self.to_string()
    }
}
