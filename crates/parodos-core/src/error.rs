// Error taxonomy for the registry ports
//
// One tagged enum instead of one type per kind: transports classify by
// matching the variant, so a wrapped cause can never change the outcome.

use thiserror::Error;

/// Result type alias for registry port operations
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Errors returned by the workflow registry ports
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Caller supplied invalid or missing input
    #[error("{message}")]
    BadRequest {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// Identifier was well formed but matched nothing in the registry
    #[error("{message}")]
    NotFound {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// Anything else, wrapped for diagnostics
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl RegistryError {
    /// Create a bad-request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        RegistryError::BadRequest {
            message: message.into(),
            source: None,
        }
    }

    /// Create a bad-request error wrapping an underlying cause
    pub fn bad_request_with(message: impl Into<String>, cause: impl Into<anyhow::Error>) -> Self {
        RegistryError::BadRequest {
            message: message.into(),
            source: Some(cause.into()),
        }
    }

    /// Create a not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        RegistryError::NotFound {
            message: message.into(),
            source: None,
        }
    }

    /// Create a not-found error wrapping an underlying cause
    pub fn not_found_with(message: impl Into<String>, cause: impl Into<anyhow::Error>) -> Self {
        RegistryError::NotFound {
            message: message.into(),
            source: Some(cause.into()),
        }
    }
}
