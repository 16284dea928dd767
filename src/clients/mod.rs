//! HTTP and GraphQL transport for Chainstarters API communication.
//!
//! This module provides the transport layer beneath
//! [`ChainstartersClient`](crate::ChainstartersClient).
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: Owns the reqwest client, base URI, and static headers
//! - [`HttpResponse`]: A raw response (status, request id, body text)
//! - [`graphql::GraphqlClient`]: Wraps queries in the GraphQL envelope and unwraps `data`
//! - [`TransportError`]: Error type for the HTTP exchange
//! - [`HttpResponseError`]: A non-200 response with its raw body
//!
//! # Retry Behavior
//!
//! None. Each call issues exactly one POST and every failure is returned to
//! the caller.

mod errors;
pub mod graphql;
mod http_client;
mod http_response;

pub use errors::{HttpResponseError, TransportError, EXECUTE_QUERY_FAILED};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_response::HttpResponse;

pub use graphql::GraphqlClient;
