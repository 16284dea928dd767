//! Fixed GraphQL documents understood by the Chainstarters API.
//!
//! These must match the upstream schema exactly; variables are always sent
//! separately.

/// Resolves a user's wallet from an email address.
pub const GET_USER_WALLET: &str = "query getUserWallet($input: GetUserWalletInput!) {
  getUserWallet(input: $input)
}";

/// Resolves wallets for several email addresses in one round trip.
pub const GET_USER_WALLETS_BATCH: &str =
    "query getUserWalletsBatch($input: GetUserWalletsBatchInput!) {
  getUserWalletsBatch(input: $input)
}";

/// Fetches a user's token balance.
pub const ERC20_BALANCE_OF: &str = "query erc20BalanceOf($user_id: String!) {
    erc20BalanceOf(user_id: $user_id)
}";

/// Debits a user's token balance.
pub const SPEND_ERC20: &str = "mutation spendERC20($input: SpendERC20Input!) {
    spendERC20(input: $input)
  }";

/// Mints project tokens to a user. Requires an owner-level key upstream.
pub const ADMIN_MINT_PROJECT_ERC20: &str =
    "mutation AdminMintProjectERC20($userId: String, $amount: String) {
    adminMintProjectERC20(user_id: $userId, amount: $amount)
  }";
