//! GraphQL transport for the Chainstarters API.
//!
//! This module provides [`GraphqlClient`], the single choke point every
//! operation goes through. It is built on top of
//! [`HttpClient`](crate::clients::HttpClient) and owns the GraphQL envelope:
//! the request body is `{"query": ..., "variables": ...}` and a successful
//! response is `{"data": {...}}`.
//!
//! # Success Signal
//!
//! Only the HTTP status decides success. A 200 response is unwrapped to its
//! `data` object even when the body also carries a GraphQL `errors` array;
//! any other status is an error whose message is the raw body.
//!
//! # Example
//!
//! ```rust,ignore
//! use chainstarters::clients::GraphqlClient;
//! use serde_json::json;
//!
//! let client = GraphqlClient::new(&config, observer)?;
//! let data = client
//!     .send("query erc20BalanceOf($user_id: String!) { erc20BalanceOf(user_id: $user_id) }",
//!           &json!({ "user_id": "user-1" }))
//!     .await?;
//! println!("Balance: {}", data["erc20BalanceOf"]);
//! ```

mod client;

pub use client::{GraphqlClient, GRAPHQL_PATH};
