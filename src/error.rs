//! Error types for the Chainstarters SDK.
//!
//! Every failure the SDK can produce is one of three conditions:
//!
//! - [`ConfigError`]: configuration was incomplete or invalid, raised before
//!   any client exists
//! - [`TransportError`]: the single outbound POST failed, either at the
//!   network level or because the upstream answered with a non-200 status
//! - [`OperationError`]: an operation method failed and wrapped the
//!   underlying transport error with an operation-specific message
//!
//! [`SdkError`] unifies the three so callers can handle the whole family
//! with one type.
//!
//! # Example
//!
//! ```rust
//! use chainstarters::{ChainstartersConfig, ConfigError, OwnerApiKey};
//!
//! let result = ChainstartersConfig::builder()
//!     .owner_api_key(OwnerApiKey::new("key").unwrap())
//!     .build();
//! assert!(matches!(
//!     result,
//!     Err(ConfigError::MissingRequiredField { field: "project_id" })
//! ));
//! ```

use thiserror::Error;

use crate::clients::TransportError;
use crate::operations::OperationError;

/// Errors that can occur while configuring the SDK.
///
/// Each variant names the offending key or value so the message is
/// actionable without further context.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required configuration key is missing.
    #[error("Missing required field: '{field}'. This field must be set before constructing the client.")]
    MissingRequiredField {
        /// The name of the missing key.
        field: &'static str,
    },

    /// Project ID cannot be empty.
    #[error("Project ID cannot be empty. Please provide a valid Chainstarters project ID.")]
    EmptyProjectId,

    /// Owner API key cannot be empty.
    #[error("Owner API key cannot be empty. Please provide a valid Chainstarters owner API key.")]
    EmptyOwnerApiKey,

    /// Owner API key contains characters that cannot appear in a header.
    #[error("Owner API key contains characters that are not allowed in an HTTP header value.")]
    InvalidOwnerApiKey,

    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://proxy.example.com').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// The underlying HTTP client could not be created.
    #[error("Failed to initialize HTTP client: {reason}")]
    HttpClientInit {
        /// Why initialization failed.
        reason: String,
    },
}

/// Unified error type for everything the SDK returns.
///
/// # Example
///
/// ```rust,ignore
/// use chainstarters::SdkError;
///
/// match client.get_user_wallet("a@example.com").await {
///     Ok(Some(wallet)) => println!("Wallet: {wallet}"),
///     Ok(None) => println!("No wallet for that email"),
///     Err(SdkError::Operation(e)) => {
///         println!("{e} (caused by: {})", e.transport());
///     }
///     Err(other) => println!("SDK error: {other}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum SdkError {
    /// Configuration failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The HTTP exchange failed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// An operation method failed.
    #[error(transparent)]
    Operation(#[from] OperationError),
}

impl SdkError {
    /// Returns the upstream HTTP status code, when one was received.
    ///
    /// Only non-200 responses carry a code; configuration and network
    /// failures return `None`.
    #[must_use]
    pub const fn code(&self) -> Option<u16> {
        match self {
            Self::Config(_) => None,
            Self::Transport(e) => e.code(),
            Self::Operation(e) => e.transport().code(),
        }
    }
}

// Verify error types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ConfigError>();
    assert_send_sync::<SdkError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;
    use crate::operations::Operation;

    #[test]
    fn test_missing_required_field_error_names_field() {
        let error = ConfigError::MissingRequiredField {
            field: "owner_api_key",
        };
        let message = error.to_string();
        assert!(message.contains("owner_api_key"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_empty_project_id_error_message() {
        let message = ConfigError::EmptyProjectId.to_string();
        assert!(message.contains("Project ID cannot be empty"));
    }

    #[test]
    fn test_invalid_host_url_error_includes_url() {
        let error = ConfigError::InvalidHostUrl {
            url: "not a url".to_string(),
        };
        assert!(error.to_string().contains("not a url"));
    }

    #[test]
    fn test_sdk_error_is_transparent_over_config_error() {
        let error: SdkError = ConfigError::EmptyOwnerApiKey.into();
        assert_eq!(error.to_string(), ConfigError::EmptyOwnerApiKey.to_string());
        assert_eq!(error.code(), None);
    }

    #[test]
    fn test_sdk_error_code_comes_from_response_status() {
        let transport = TransportError::Response(HttpResponseError {
            code: 503,
            message: "unavailable".to_string(),
        });
        let error: SdkError = OperationError::new(Operation::GetErc20Balance, transport).into();

        assert_eq!(error.code(), Some(503));
        assert_eq!(error.to_string(), "Error fetching ERC20 balance.");
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyProjectId;
        let _: &dyn std::error::Error = &error;
    }
}
