//! GraphQL client implementation for the Chainstarters API.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::clients::{HttpClient, HttpResponseError, TransportError};
use crate::config::ChainstartersConfig;
use crate::diagnostics::DiagnosticsObserver;
use crate::error::ConfigError;

/// Path every GraphQL request is posted to.
pub const GRAPHQL_PATH: &str = "/prod";

/// Diagnostic context reported when the exchange fails.
const SEND_FAILED_CONTEXT: &str = "Error fetching data";

/// Request body for a GraphQL call.
#[derive(Debug, Serialize)]
struct GraphqlRequest<'a, V: ?Sized> {
    query: &'a str,
    variables: &'a V,
}

/// Response envelope; only `data` is read.
#[derive(Debug, Deserialize)]
struct GraphqlEnvelope {
    #[serde(default)]
    data: Option<Map<String, Value>>,
}

/// GraphQL client for the Chainstarters API.
///
/// # Thread Safety
///
/// `GraphqlClient` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug)]
pub struct GraphqlClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
    /// Receives a report for every failed exchange.
    observer: Arc<dyn DiagnosticsObserver>,
}

// Verify GraphqlClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlClient>();
};

impl GraphqlClient {
    /// Creates a new GraphQL client for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientInit`] if the HTTP client cannot be
    /// created.
    pub fn new(
        config: &ChainstartersConfig,
        observer: Arc<dyn DiagnosticsObserver>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            http_client: HttpClient::new(config)?,
            observer,
        })
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Executes a GraphQL document and returns the response's `data` object.
    ///
    /// Pass `&serde_json::json!({})` when the document takes no variables.
    /// A missing or `null` `data` field yields an empty map.
    ///
    /// # Errors
    ///
    /// - [`TransportError::Response`] when the status is not 200; the
    ///   message is the raw response body
    /// - [`TransportError::Network`] when the request cannot be completed
    /// - [`TransportError::Decode`] when a 200 body is not a JSON envelope
    ///
    /// Every error is reported to the observer before it is returned.
    pub async fn send<V>(&self, query: &str, variables: &V) -> Result<Map<String, Value>, TransportError>
    where
        V: Serialize + ?Sized,
    {
        match self.execute(query, variables).await {
            Ok(data) => Ok(data),
            Err(error) => {
                self.observer.on_error(SEND_FAILED_CONTEXT, &error);
                Err(error)
            }
        }
    }

    async fn execute<V>(&self, query: &str, variables: &V) -> Result<Map<String, Value>, TransportError>
    where
        V: Serialize + ?Sized,
    {
        tracing::debug!(
            "Sending GraphQL request to {}{}",
            self.http_client.base_uri(),
            GRAPHQL_PATH
        );

        let body = GraphqlRequest { query, variables };
        let response = self.http_client.post_json(GRAPHQL_PATH, &body).await?;

        if !response.is_ok() {
            if let Some(request_id) = response.request_id() {
                tracing::debug!(
                    "GraphQL request failed with status {} (request id {})",
                    response.code,
                    request_id
                );
            }
            return Err(HttpResponseError {
                code: response.code,
                message: response.body,
            }
            .into());
        }

        let envelope: GraphqlEnvelope = serde_json::from_str(&response.body)?;
        Ok(envelope.data.unwrap_or_default())
    }
}
