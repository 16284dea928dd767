//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated Chainstarters project ID.
///
/// The project ID selects the tenant endpoint, so it must be non-empty.
///
/// # Example
///
/// ```rust
/// use chainstarters::ProjectId;
///
/// let id = ProjectId::new("abc123").unwrap();
/// assert_eq!(id.as_ref(), "abc123");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectId(String);

impl ProjectId {
    /// Creates a new validated project ID.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyProjectId`] if the ID is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ConfigError::EmptyProjectId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for ProjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated Chainstarters owner API key.
///
/// The key is sent verbatim in the `Authorization` header, so it must be
/// non-empty and may only contain visible ASCII characters, spaces, and
/// tabs. Control characters such as CR/LF and non-ASCII text are rejected.
///
/// # Security
///
/// The `Debug` implementation masks the key, displaying only
/// `OwnerApiKey(*****)` instead of the actual value.
///
/// # Example
///
/// ```rust
/// use chainstarters::OwnerApiKey;
///
/// let key = OwnerApiKey::new("owner-secret").unwrap();
/// assert_eq!(format!("{:?}", key), "OwnerApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct OwnerApiKey(String);

impl OwnerApiKey {
    /// Creates a new validated owner API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyOwnerApiKey`] if the key is empty, or
    /// [`ConfigError::InvalidOwnerApiKey`] if it contains control characters
    /// other than tab, or non-ASCII characters.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyOwnerApiKey);
        }
        if !key
            .chars()
            .all(|c| c.is_ascii_graphic() || c == ' ' || c == '\t')
        {
            return Err(ConfigError::InvalidOwnerApiKey);
        }
        Ok(Self(key))
    }

    /// Returns the `Authorization` header value for this key.
    #[must_use]
    pub fn authorization(&self) -> String {
        format!("owner:{}", self.0)
    }
}

impl AsRef<str> for OwnerApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for OwnerApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OwnerApiKey(*****)")
    }
}

/// A validated base URL overriding the tenant endpoint.
///
/// Used to route requests through a proxy or at a local test server. The URL
/// must be `http` or `https` with a host; it is normalized by the URL parser
/// and a trailing slash is dropped.
///
/// # Example
///
/// ```rust
/// use chainstarters::HostUrl;
///
/// let url = HostUrl::new("http://127.0.0.1:8080/").unwrap();
/// assert_eq!(url.as_ref(), "http://127.0.0.1:8080");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl(String);

impl HostUrl {
    /// Creates a new validated host URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the URL does not parse, is
    /// not `http`/`https`, or has no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let parsed = match reqwest::Url::parse(url.trim()) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => parsed,
            _ => return Err(ConfigError::InvalidHostUrl { url }),
        };
        if !parsed.host_str().is_some_and(|host| !host.is_empty()) {
            return Err(ConfigError::InvalidHostUrl { url });
        }

        Ok(Self(parsed.as_str().trim_end_matches('/').to_string()))
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
