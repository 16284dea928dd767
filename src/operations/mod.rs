//! Remote operations exposed by the Chainstarters API.
//!
//! Each [`Operation`] pairs a fixed GraphQL document with the response field
//! it reads and the message used when it fails. [`OperationError`] is what
//! the operation methods on [`ChainstartersClient`](crate::ChainstartersClient)
//! return when the underlying exchange fails.

pub mod documents;
pub(crate) mod variables;

use std::fmt;

use thiserror::Error;

use crate::clients::TransportError;

/// A remote capability of the Chainstarters API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Resolve a user's wallet from an email address.
    GetUserWallet,
    /// Resolve wallets for several email addresses.
    GetUserWalletsBatch,
    /// Fetch a user's token balance.
    GetErc20Balance,
    /// Debit a user's token balance.
    SpendErc20,
    /// Mint project tokens to a user (owner key required).
    AdminMintProjectErc20,
}

impl Operation {
    /// All operations, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::GetUserWallet,
        Self::GetUserWalletsBatch,
        Self::GetErc20Balance,
        Self::SpendErc20,
        Self::AdminMintProjectErc20,
    ];

    /// Returns the GraphQL document sent for this operation.
    #[must_use]
    pub const fn document(self) -> &'static str {
        match self {
            Self::GetUserWallet => documents::GET_USER_WALLET,
            Self::GetUserWalletsBatch => documents::GET_USER_WALLETS_BATCH,
            Self::GetErc20Balance => documents::ERC20_BALANCE_OF,
            Self::SpendErc20 => documents::SPEND_ERC20,
            Self::AdminMintProjectErc20 => documents::ADMIN_MINT_PROJECT_ERC20,
        }
    }

    /// Returns the `data` field holding this operation's result.
    #[must_use]
    pub const fn field(self) -> &'static str {
        match self {
            Self::GetUserWallet => "getUserWallet",
            Self::GetUserWalletsBatch => "getUserWalletsBatch",
            Self::GetErc20Balance => "erc20BalanceOf",
            Self::SpendErc20 => "spendERC20",
            Self::AdminMintProjectErc20 => "adminMintProjectERC20",
        }
    }

    /// Returns the message of the error raised when this operation fails.
    #[must_use]
    pub const fn failure_message(self) -> &'static str {
        match self {
            Self::GetUserWallet => "Error fetching user wallet address.",
            Self::GetUserWalletsBatch => "Error fetching user wallet addresses.",
            Self::GetErc20Balance => "Error fetching ERC20 balance.",
            Self::SpendErc20 => "Error spending ERC20 tokens.",
            Self::AdminMintProjectErc20 => "Error minting project ERC20 tokens.",
        }
    }

    /// Returns the failure message without its trailing period, used as
    /// diagnostic context.
    #[must_use]
    pub fn diagnostic_context(self) -> &'static str {
        let message = self.failure_message();
        message.strip_suffix('.').unwrap_or(message)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field())
    }
}

/// Error returned by an operation method.
///
/// Displays the operation's failure message; the transport error that
/// caused it is available through [`std::error::Error::source`] and
/// [`OperationError::transport`].
///
/// # Example
///
/// ```rust
/// use std::error::Error;
/// use chainstarters::clients::{HttpResponseError, TransportError};
/// use chainstarters::operations::{Operation, OperationError};
///
/// let error = OperationError::new(
///     Operation::GetUserWallet,
///     TransportError::Response(HttpResponseError {
///         code: 500,
///         message: "internal error".to_string(),
///     }),
/// );
///
/// assert_eq!(error.to_string(), "Error fetching user wallet address.");
/// assert_eq!(error.source().unwrap().to_string(), "internal error");
/// ```
#[derive(Debug, Error)]
#[error("{}", .operation.failure_message())]
pub struct OperationError {
    operation: Operation,
    #[source]
    source: TransportError,
}

impl OperationError {
    /// Wraps a transport error with the context of the failing operation.
    #[must_use]
    pub const fn new(operation: Operation, source: TransportError) -> Self {
        Self { operation, source }
    }

    /// Returns the operation that failed.
    #[must_use]
    pub const fn operation(&self) -> Operation {
        self.operation
    }

    /// Returns the transport error that caused the failure.
    #[must_use]
    pub const fn transport(&self) -> &TransportError {
        &self.source
    }

    /// Consumes the error, returning the underlying transport error.
    #[must_use]
    pub fn into_transport(self) -> TransportError {
        self.source
    }
}
