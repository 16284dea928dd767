//! The Chainstarters client and its operation methods.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::clients::GraphqlClient;
use crate::config::ChainstartersConfig;
use crate::diagnostics::{DiagnosticsObserver, TracingObserver};
use crate::error::{ConfigError, SdkError};
use crate::operations::variables::{
    EmailInput, EmailsInput, Input, MintVariables, SpendInput, UserIdVariables,
};
use crate::operations::{Operation, OperationError};

/// Typed client for the Chainstarters GraphQL API.
///
/// Each operation method issues exactly one POST and returns the value of its
/// response field. A field that is absent (or `null`) yields `Ok(None)`,
/// which callers should treat as "not found" rather than as a failure.
///
/// # Thread Safety
///
/// `ChainstartersClient` is `Send + Sync`, making it safe to share across
/// async tasks. It holds no per-call state.
///
/// # Example
///
/// ```rust,ignore
/// use chainstarters::{ChainstartersClient, ChainstartersConfig, OwnerApiKey, ProjectId};
///
/// let config = ChainstartersConfig::builder()
///     .project_id(ProjectId::new("abc123").unwrap())
///     .owner_api_key(OwnerApiKey::new("owner-key").unwrap())
///     .build()?;
///
/// let client = ChainstartersClient::new(config)?;
///
/// if let Some(wallet) = client.get_user_wallet("a@example.com").await? {
///     println!("Wallet: {wallet}");
/// }
///
/// let balance = client.get_erc20_balance("user-1").await?;
/// client.spend_erc20("a@example.com", "1050").await?;
/// ```
#[derive(Debug)]
pub struct ChainstartersClient {
    config: ChainstartersConfig,
    graphql_client: GraphqlClient,
    observer: Arc<dyn DiagnosticsObserver>,
}

// Verify ChainstartersClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ChainstartersClient>();
};

impl ChainstartersClient {
    /// Creates a client that reports failures through `tracing`.
    ///
    /// No network I/O happens here.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientInit`] if the HTTP client cannot be
    /// created.
    pub fn new(config: ChainstartersConfig) -> Result<Self, ConfigError> {
        Self::with_observer(config, Arc::new(TracingObserver))
    }

    /// Creates a client that reports failures to the given observer.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientInit`] if the HTTP client cannot be
    /// created.
    pub fn with_observer(
        config: ChainstartersConfig,
        observer: Arc<dyn DiagnosticsObserver>,
    ) -> Result<Self, ConfigError> {
        let graphql_client = GraphqlClient::new(&config, Arc::clone(&observer))?;
        Ok(Self {
            config,
            graphql_client,
            observer,
        })
    }

    /// Creates a client from a configuration mapping.
    ///
    /// See [`ChainstartersConfig::from_map`] for the recognized keys.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] naming a missing key, or
    /// the validation error of an invalid value.
    pub fn from_map(settings: &HashMap<String, String>) -> Result<Self, ConfigError> {
        Self::new(ChainstartersConfig::from_map(settings)?)
    }

    /// Returns the configuration this client was built from.
    #[must_use]
    pub const fn config(&self) -> &ChainstartersConfig {
        &self.config
    }

    /// Returns the base URI requests are sent to.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        self.graphql_client.http_client().base_uri()
    }

    /// Returns the headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        self.graphql_client.http_client().default_headers()
    }

    /// Resolves a user's wallet from an email address.
    ///
    /// Sends `{"input": {"email": email}}` and reads `getUserWallet`.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::Operation`] with message
    /// `"Error fetching user wallet address."` if the request fails.
    pub async fn get_user_wallet(&self, email: &str) -> Result<Option<Value>, SdkError> {
        let variables = Input {
            input: EmailInput { email },
        };
        self.run(Operation::GetUserWallet, &variables).await
    }

    /// Resolves wallets for several email addresses in one round trip.
    ///
    /// Sends `{"input": {"emails": [...]}}` and reads `getUserWalletsBatch`.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::Operation`] with message
    /// `"Error fetching user wallet addresses."` if the request fails.
    pub async fn get_user_wallets_batch<S>(&self, emails: &[S]) -> Result<Option<Value>, SdkError>
    where
        S: AsRef<str>,
    {
        let variables = Input {
            input: EmailsInput {
                emails: emails.iter().map(AsRef::as_ref).collect(),
            },
        };
        self.run(Operation::GetUserWalletsBatch, &variables).await
    }

    /// Fetches the token balance of a user.
    ///
    /// Sends `{"user_id": user_id}` and reads `erc20BalanceOf`.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::Operation`] with message
    /// `"Error fetching ERC20 balance."` if the request fails.
    pub async fn get_erc20_balance(&self, user_id: &str) -> Result<Option<Value>, SdkError> {
        let variables = UserIdVariables { user_id };
        self.run(Operation::GetErc20Balance, &variables).await
    }

    /// Debits a user's token balance.
    ///
    /// The amount is an integer number of pennies, passed as a string so no
    /// precision is lost. It is not validated locally. Sends
    /// `{"input": {"email": ..., "amount_in_pennies": ...}}` and reads
    /// `spendERC20`.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::Operation`] with message
    /// `"Error spending ERC20 tokens."` if the request fails.
    pub async fn spend_erc20(
        &self,
        email: &str,
        amount_in_pennies: &str,
    ) -> Result<Option<Value>, SdkError> {
        let variables = Input {
            input: SpendInput {
                email,
                amount_in_pennies,
            },
        };
        self.run(Operation::SpendErc20, &variables).await
    }

    /// Mints project tokens to a user.
    ///
    /// Requires an owner-level API key; this is enforced upstream. Sends
    /// `{"userId": email, "amount": amount_in_pennies}` and reads
    /// `adminMintProjectERC20`.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::Operation`] with message
    /// `"Error minting project ERC20 tokens."` if the request fails.
    pub async fn admin_mint_project_erc20(
        &self,
        email: &str,
        amount_in_pennies: &str,
    ) -> Result<Option<Value>, SdkError> {
        let variables = MintVariables {
            user_id: email,
            amount: amount_in_pennies,
        };
        self.run(Operation::AdminMintProjectErc20, &variables).await
    }

    /// Sends the operation's document and extracts its result field.
    async fn run<V>(&self, operation: Operation, variables: &V) -> Result<Option<Value>, SdkError>
    where
        V: Serialize,
    {
        tracing::debug!("Executing Chainstarters operation {}", operation);

        match self.graphql_client.send(operation.document(), variables).await {
            Ok(mut data) => Ok(data.remove(operation.field()).filter(|v| !v.is_null())),
            Err(error) => {
                self.observer
                    .on_error(operation.diagnostic_context(), &error);
                Err(OperationError::new(operation, error).into())
            }
        }
    }
}
