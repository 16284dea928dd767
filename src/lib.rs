//! # Chainstarters Rust SDK
//!
//! A Rust SDK for the Chainstarters GraphQL API, exposing wallet lookup,
//! balance queries, token spends, and administrative mints as typed async
//! method calls.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`ChainstartersConfig`] and [`ChainstartersConfigBuilder`]
//! - Validated newtypes for the project ID and owner API key
//! - [`ChainstartersClient`] with one method per remote operation
//! - A single error family, [`SdkError`], that always carries context
//! - Pluggable failure diagnostics via [`DiagnosticsObserver`]
//!
//! ## Quick Start
//!
//! ```rust
//! use chainstarters::{ChainstartersClient, ChainstartersConfig, OwnerApiKey, ProjectId};
//!
//! let config = ChainstartersConfig::builder()
//!     .project_id(ProjectId::new("abc123").unwrap())
//!     .owner_api_key(OwnerApiKey::new("owner-key").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = ChainstartersClient::new(config).unwrap();
//! assert_eq!(
//!     client.base_uri(),
//!     "https://cs-abc123.prime-jackpot-expanse.chainstarters.io"
//! );
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use chainstarters::{ChainstartersClient, SdkError};
//!
//! let wallet = client.get_user_wallet("a@example.com").await?;
//! let wallets = client
//!     .get_user_wallets_batch(&["a@example.com", "b@example.com"])
//!     .await?;
//! let balance = client.get_erc20_balance("user-1").await?;
//! let spent = client.spend_erc20("a@example.com", "1050").await?;
//! let minted = client.admin_mint_project_erc20("a@example.com", "500").await?;
//! ```
//!
//! Results are opaque JSON values defined by the upstream service. `None`
//! means the response did not contain the operation's field.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Configuration is validated before a client exists
//! - **Thread-safe**: All types are `Send + Sync`
//! - **One request per call**: No retries, caching, or background work

mod client;
pub mod clients;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod operations;

pub use client::ChainstartersClient;
pub use config::{
    ChainstartersConfig, ChainstartersConfigBuilder, HostUrl, OwnerApiKey, ProjectId,
};
pub use diagnostics::{DiagnosticsObserver, TracingObserver};
pub use error::{ConfigError, SdkError};
pub use operations::{Operation, OperationError};

// Re-export transport types
pub use clients::{GraphqlClient, HttpClient, HttpResponseError, TransportError};
