//! HTTP client for Chainstarters API communication.
//!
//! This module provides the [`HttpClient`] type that owns the underlying
//! `reqwest` client, the tenant base URI, and the static request headers.

use std::collections::HashMap;

use serde::Serialize;

use crate::clients::errors::TransportError;
use crate::clients::http_response::HttpResponse;
use crate::config::ChainstartersConfig;
use crate::error::ConfigError;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

const REQUEST_ID_HEADER: &str = "x-request-id";

/// HTTP client bound to one Chainstarters tenant.
///
/// The client handles:
/// - Base URI construction from the project ID or `api_host` override
/// - Static headers: `Authorization`, `Content-Type`, `Accept`, `User-Agent`
/// - Capturing the `X-Request-Id` response header
///
/// No retries, timeouts, or pooling policy are layered on top of
/// `reqwest`'s defaults.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust
/// use chainstarters::{ChainstartersConfig, OwnerApiKey, ProjectId};
/// use chainstarters::clients::HttpClient;
///
/// let config = ChainstartersConfig::builder()
///     .project_id(ProjectId::new("abc123").unwrap())
///     .owner_api_key(OwnerApiKey::new("owner-key").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config).unwrap();
/// assert_eq!(
///     client.default_headers().get("Authorization"),
///     Some(&"owner:owner-key".to_string())
/// );
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://cs-abc123.prime-jackpot-expanse.chainstarters.io`).
    base_uri: String,
    /// Headers included in every request.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given configuration.
    ///
    /// No network I/O happens here.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientInit`] if the underlying reqwest
    /// client cannot be created (e.g., TLS initialization failure).
    pub fn new(config: &ChainstartersConfig) -> Result<Self, ConfigError> {
        let base_uri = config.base_uri();

        if let Some(host) = config.api_host() {
            tracing::debug!(
                "Chainstarters client for project {} overriding base URI with {}",
                config.project_id(),
                host.as_ref()
            );
        }

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}Chainstarters Rust SDK v{SDK_VERSION}");

        let mut default_headers = HashMap::new();
        default_headers.insert(
            "Authorization".to_string(),
            config.owner_api_key().authorization(),
        );
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("User-Agent".to_string(), user_agent);

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .map_err(|e| ConfigError::HttpClientInit {
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_uri,
            default_headers,
        })
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a JSON body with a single POST to `path` on the base URI.
    ///
    /// Any status code is returned as a response; interpreting it is the
    /// caller's job.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Network`] if the request cannot be sent,
    /// the body cannot be serialized, or the response body cannot be read.
    pub async fn post_json<B>(&self, path: &str, body: &B) -> Result<HttpResponse, TransportError>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_uri, path);

        let mut req_builder = self.client.post(&url);
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        let res = req_builder.json(body).send().await?;

        let code = res.status().as_u16();
        let request_id = res
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = res.text().await?;

        Ok(HttpResponse::new(code, request_id, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{HostUrl, OwnerApiKey, ProjectId};
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_test_config() -> ChainstartersConfig {
        ChainstartersConfig::builder()
            .project_id(ProjectId::new("abc123").unwrap())
            .owner_api_key(OwnerApiKey::new("test-owner-key").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_construction_derives_base_uri() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        assert_eq!(
            client.base_uri(),
            "https://cs-abc123.prime-jackpot-expanse.chainstarters.io"
        );
    }

    #[test]
    fn test_authorization_header_uses_owner_prefix() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        assert_eq!(
            client.default_headers().get("Authorization"),
            Some(&"owner:test-owner-key".to_string())
        );
    }

    #[test]
    fn test_content_type_header_is_json() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        assert_eq!(
            client.default_headers().get("Content-Type"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("Chainstarters Rust SDK v"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = ChainstartersConfig::builder()
            .project_id(ProjectId::new("abc123").unwrap())
            .owner_api_key(OwnerApiKey::new("key").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        let client = HttpClient::new(&config).unwrap();
        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
        assert!(user_agent.contains("Chainstarters Rust SDK"));
    }

    #[test]
    fn test_api_host_override_is_used_as_base_uri() {
        let config = ChainstartersConfig::builder()
            .project_id(ProjectId::new("abc123").unwrap())
            .owner_api_key(OwnerApiKey::new("key").unwrap())
            .api_host(HostUrl::new("http://localhost:4000").unwrap())
            .build()
            .unwrap();

        let client = HttpClient::new(&config).unwrap();
        assert_eq!(client.base_uri(), "http://localhost:4000");
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }

    #[tokio::test]
    async fn test_post_json_captures_request_id_only() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/prod"))
            .respond_with(
                ResponseTemplate::new(500)
                    .insert_header("X-Request-Id", "req-42")
                    .insert_header("X-Other", "ignored")
                    .set_body_string("internal error"),
            )
            .mount(&mock_server)
            .await;

        let config = ChainstartersConfig::builder()
            .project_id(ProjectId::new("abc123").unwrap())
            .owner_api_key(OwnerApiKey::new("key").unwrap())
            .api_host(HostUrl::new(mock_server.uri()).unwrap())
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();

        let response = client.post_json("/prod", &json!({})).await.unwrap();

        assert_eq!(response.code, 500);
        assert_eq!(response.request_id(), Some("req-42"));
        assert_eq!(response.body, "internal error");
    }

    #[tokio::test]
    async fn test_post_json_without_request_id() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/prod"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .mount(&mock_server)
            .await;

        let config = ChainstartersConfig::builder()
            .project_id(ProjectId::new("abc123").unwrap())
            .owner_api_key(OwnerApiKey::new("key").unwrap())
            .api_host(HostUrl::new(mock_server.uri()).unwrap())
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();

        let response = client.post_json("/prod", &json!({})).await.unwrap();

        assert!(response.is_ok());
        assert!(response.request_id().is_none());
    }
}
