//! Variables objects sent alongside each GraphQL document.

use serde::Serialize;

/// `{"input": {...}}` wrapper used by input-object operations.
#[derive(Debug, Serialize)]
pub(crate) struct Input<T> {
    pub input: T,
}

/// Input for `getUserWallet`.
#[derive(Debug, Serialize)]
pub(crate) struct EmailInput<'a> {
    pub email: &'a str,
}

/// Input for `getUserWalletsBatch`.
#[derive(Debug, Serialize)]
pub(crate) struct EmailsInput<'a> {
    pub emails: Vec<&'a str>,
}

/// Variables for `erc20BalanceOf`.
#[derive(Debug, Serialize)]
pub(crate) struct UserIdVariables<'a> {
    pub user_id: &'a str,
}

/// Input for `spendERC20`. The amount stays a string to avoid precision loss.
#[derive(Debug, Serialize)]
pub(crate) struct SpendInput<'a> {
    pub email: &'a str,
    pub amount_in_pennies: &'a str,
}

/// Variables for `AdminMintProjectERC20`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MintVariables<'a> {
    pub user_id: &'a str,
    pub amount: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_email_input_shape() {
        let variables = Input {
            input: EmailInput {
                email: "a@example.com",
            },
        };
        assert_eq!(
            serde_json::to_value(&variables).unwrap(),
            json!({ "input": { "email": "a@example.com" } })
        );
    }

    #[test]
    fn test_emails_input_shape() {
        let variables = Input {
            input: EmailsInput {
                emails: vec!["a@example.com", "b@example.com"],
            },
        };
        assert_eq!(
            serde_json::to_value(&variables).unwrap(),
            json!({ "input": { "emails": ["a@example.com", "b@example.com"] } })
        );
    }

    #[test]
    fn test_user_id_variables_keep_snake_case() {
        let variables = UserIdVariables { user_id: "user-1" };
        assert_eq!(
            serde_json::to_value(&variables).unwrap(),
            json!({ "user_id": "user-1" })
        );
    }

    #[test]
    fn test_spend_input_keeps_amount_as_string() {
        let variables = Input {
            input: SpendInput {
                email: "a@example.com",
                amount_in_pennies: "1050",
            },
        };
        assert_eq!(
            serde_json::to_value(&variables).unwrap(),
            json!({ "input": { "email": "a@example.com", "amount_in_pennies": "1050" } })
        );
    }

    #[test]
    fn test_mint_variables_use_camel_case() {
        let variables = MintVariables {
            user_id: "user@x.com",
            amount: "500",
        };
        assert_eq!(
            serde_json::to_value(&variables).unwrap(),
            json!({ "userId": "user@x.com", "amount": "500" })
        );
    }
}
