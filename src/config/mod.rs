//! Configuration types for the Chainstarters SDK.
//!
//! This module provides the configuration used to construct a
//! [`ChainstartersClient`](crate::ChainstartersClient).
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ChainstartersConfig`]: The configuration struct holding all SDK settings
//! - [`ChainstartersConfigBuilder`]: A builder for constructing [`ChainstartersConfig`] instances
//! - [`ProjectId`]: A validated tenant project ID
//! - [`OwnerApiKey`]: A validated owner API key with masked debug output
//! - [`HostUrl`]: A validated base URL override
//!
//! # Example
//!
//! ```rust
//! use chainstarters::{ChainstartersConfig, OwnerApiKey, ProjectId};
//!
//! let config = ChainstartersConfig::builder()
//!     .project_id(ProjectId::new("abc123").unwrap())
//!     .owner_api_key(OwnerApiKey::new("owner-key").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(
//!     config.base_uri(),
//!     "https://cs-abc123.prime-jackpot-expanse.chainstarters.io"
//! );
//! ```

mod newtypes;

pub use newtypes::{HostUrl, OwnerApiKey, ProjectId};

use std::collections::HashMap;

use crate::error::ConfigError;

/// Host suffix shared by every tenant endpoint.
pub const HOST_SUFFIX: &str = "prime-jackpot-expanse.chainstarters.io";

/// Configuration for the Chainstarters SDK.
///
/// # Thread Safety
///
/// `ChainstartersConfig` is `Clone`, `Send`, and `Sync`.
///
/// # Example
///
/// ```rust
/// use chainstarters::{ChainstartersConfig, HostUrl, OwnerApiKey, ProjectId};
///
/// let config = ChainstartersConfig::builder()
///     .project_id(ProjectId::new("abc123").unwrap())
///     .owner_api_key(OwnerApiKey::new("owner-key").unwrap())
///     .api_host(HostUrl::new("http://localhost:8080").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.base_uri(), "http://localhost:8080");
/// ```
#[derive(Clone, Debug)]
pub struct ChainstartersConfig {
    project_id: ProjectId,
    owner_api_key: OwnerApiKey,
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl ChainstartersConfig {
    /// Creates a new builder for constructing a `ChainstartersConfig`.
    #[must_use]
    pub fn builder() -> ChainstartersConfigBuilder {
        ChainstartersConfigBuilder::new()
    }

    /// Builds a configuration from a key/value mapping.
    ///
    /// Recognized keys are `project_id` and `owner_api_key`; both are
    /// required. Unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] naming the first missing
    /// key, or the validation error of the offending value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use chainstarters::{ChainstartersConfig, ConfigError};
    ///
    /// let mut settings = HashMap::new();
    /// settings.insert("project_id".to_string(), "abc123".to_string());
    ///
    /// let result = ChainstartersConfig::from_map(&settings);
    /// assert!(matches!(
    ///     result,
    ///     Err(ConfigError::MissingRequiredField { field: "owner_api_key" })
    /// ));
    /// ```
    pub fn from_map(settings: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let project_id = settings
            .get("project_id")
            .ok_or(ConfigError::MissingRequiredField {
                field: "project_id",
            })?;
        let owner_api_key =
            settings
                .get("owner_api_key")
                .ok_or(ConfigError::MissingRequiredField {
                    field: "owner_api_key",
                })?;

        Self::builder()
            .project_id(ProjectId::new(project_id.as_str())?)
            .owner_api_key(OwnerApiKey::new(owner_api_key.as_str())?)
            .build()
    }

    /// Returns the project ID.
    #[must_use]
    pub const fn project_id(&self) -> &ProjectId {
        &self.project_id
    }

    /// Returns the owner API key.
    #[must_use]
    pub const fn owner_api_key(&self) -> &OwnerApiKey {
        &self.owner_api_key
    }

    /// Returns the base URL override, if configured.
    #[must_use]
    pub const fn api_host(&self) -> Option<&HostUrl> {
        self.api_host.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the base URL requests are sent to.
    ///
    /// This is `https://cs-{project_id}.prime-jackpot-expanse.chainstarters.io`
    /// unless an `api_host` override is configured.
    #[must_use]
    pub fn base_uri(&self) -> String {
        self.api_host.as_ref().map_or_else(
            || format!("https://cs-{}.{HOST_SUFFIX}", self.project_id),
            |host| host.as_ref().to_string(),
        )
    }
}

// Verify ChainstartersConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ChainstartersConfig>();
};

/// Builder for constructing [`ChainstartersConfig`] instances.
///
/// Required fields are `project_id` and `owner_api_key`. Optional fields
/// default to `None`.
#[derive(Debug, Default)]
pub struct ChainstartersConfigBuilder {
    project_id: Option<ProjectId>,
    owner_api_key: Option<OwnerApiKey>,
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl ChainstartersConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the project ID (required).
    #[must_use]
    pub fn project_id(mut self, id: ProjectId) -> Self {
        self.project_id = Some(id);
        self
    }

    /// Sets the owner API key (required).
    #[must_use]
    pub fn owner_api_key(mut self, key: OwnerApiKey) -> Self {
        self.owner_api_key = Some(key);
        self
    }

    /// Overrides the tenant endpoint with a fixed base URL.
    #[must_use]
    pub fn api_host(mut self, host: HostUrl) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ChainstartersConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `project_id` or
    /// `owner_api_key` are not set.
    pub fn build(self) -> Result<ChainstartersConfig, ConfigError> {
        let project_id = self.project_id.ok_or(ConfigError::MissingRequiredField {
            field: "project_id",
        })?;
        let owner_api_key = self
            .owner_api_key
            .ok_or(ConfigError::MissingRequiredField {
                field: "owner_api_key",
            })?;

        Ok(ChainstartersConfig {
            project_id,
            owner_api_key,
            api_host: self.api_host,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_builder_requires_project_id() {
        let result = ChainstartersConfigBuilder::new()
            .owner_api_key(OwnerApiKey::new("key").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "project_id"
            })
        ));
    }

    #[test]
    fn test_builder_requires_owner_api_key() {
        let result = ChainstartersConfigBuilder::new()
            .project_id(ProjectId::new("abc123").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "owner_api_key"
            })
        ));
    }

    #[test]
    fn test_base_uri_is_derived_from_project_id() {
        let config = ChainstartersConfig::builder()
            .project_id(ProjectId::new("abc123").unwrap())
            .owner_api_key(OwnerApiKey::new("key").unwrap())
            .build()
            .unwrap();

        assert_eq!(
            config.base_uri(),
            "https://cs-abc123.prime-jackpot-expanse.chainstarters.io"
        );
        assert!(config.api_host().is_none());
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_api_host_overrides_base_uri() {
        let config = ChainstartersConfig::builder()
            .project_id(ProjectId::new("abc123").unwrap())
            .owner_api_key(OwnerApiKey::new("key").unwrap())
            .api_host(HostUrl::new("http://127.0.0.1:9000").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.base_uri(), "http://127.0.0.1:9000");
    }

    #[test]
    fn test_from_map_reads_recognized_keys() {
        let config = ChainstartersConfig::from_map(&settings(&[
            ("project_id", "abc123"),
            ("owner_api_key", "key"),
            ("unrelated", "ignored"),
        ]))
        .unwrap();

        assert_eq!(config.project_id().as_ref(), "abc123");
        assert_eq!(config.owner_api_key().as_ref(), "key");
    }

    #[test]
    fn test_from_map_names_missing_project_id() {
        let result = ChainstartersConfig::from_map(&settings(&[("owner_api_key", "key")]));
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "project_id"
            })
        ));
    }

    #[test]
    fn test_from_map_rejects_empty_values() {
        let result = ChainstartersConfig::from_map(&settings(&[
            ("project_id", ""),
            ("owner_api_key", "key"),
        ]));
        assert!(matches!(result, Err(ConfigError::EmptyProjectId)));

        let result = ChainstartersConfig::from_map(&settings(&[
            ("project_id", "abc123"),
            ("owner_api_key", ""),
        ]));
        assert!(matches!(result, Err(ConfigError::EmptyOwnerApiKey)));
    }

    #[test]
    fn test_config_debug_masks_owner_api_key() {
        let config = ChainstartersConfig::builder()
            .project_id(ProjectId::new("abc123").unwrap())
            .owner_api_key(OwnerApiKey::new("very-secret").unwrap())
            .build()
            .unwrap();

        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("ChainstartersConfig"));
        assert!(!debug_str.contains("very-secret"));
    }
}
