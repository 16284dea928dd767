//! Transport error types for the Chainstarters SDK.
//!
//! This module contains the errors the HTTP layer can produce while
//! executing a GraphQL request.
//!
//! # Error Handling
//!
//! - [`HttpResponseError`]: The upstream answered with a status other than 200
//! - [`TransportError`]: Unified error type for the single outbound POST
//!
//! # Example
//!
//! ```rust
//! use chainstarters::clients::{HttpResponseError, TransportError};
//!
//! let error = TransportError::Response(HttpResponseError {
//!     code: 500,
//!     message: "internal error".to_string(),
//! });
//!
//! assert_eq!(error.to_string(), "internal error");
//! assert_eq!(error.code(), Some(500));
//! ```

use thiserror::Error;

/// Message reported for every failure that happened below the HTTP status line.
pub const EXECUTE_QUERY_FAILED: &str = "Error executing query.";

/// Error returned when the upstream responds with a non-200 status.
///
/// The message is the raw response body, unmodified.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The raw response body.
    pub message: String,
}

/// Unified error type for the HTTP exchange.
///
/// Network-level faults and undecodable bodies share the message
/// `"Error executing query."` and keep the original fault as their source.
/// Non-200 responses surface the raw body and carry no source.
///
/// # Example
///
/// ```rust,ignore
/// use chainstarters::clients::TransportError;
///
/// match error {
///     TransportError::Response(e) => println!("Upstream said {}: {}", e.code, e.message),
///     TransportError::Network(e) => println!("Could not reach upstream: {e}"),
///     TransportError::Decode(e) => println!("Upstream sent invalid JSON: {e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum TransportError {
    /// A non-200 response was received.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// DNS, connection, TLS, timeout, or body read failure.
    #[error("{}", EXECUTE_QUERY_FAILED)]
    Network(#[source] reqwest::Error),

    /// A 200 response whose body is not a JSON envelope.
    #[error("{}", EXECUTE_QUERY_FAILED)]
    Decode(#[source] serde_json::Error),
}

impl TransportError {
    /// Returns the HTTP status code for non-200 responses.
    #[must_use]
    pub const fn code(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        Self::Network(error)
    }
}

impl From<serde_json::Error> for TransportError {
    fn from(error: serde_json::Error) -> Self {
        Self::Decode(error)
    }
}
