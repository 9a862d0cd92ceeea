//! Account related operations
//!
//! This module gets account information from the API.

use crate::error::AppErrors as Error;
use crate::model::account::{Account, AccountsResponse};

use super::ApiClient;

impl ApiClient {
    /// Get the list of accounts the token grants access to.
    ///
    /// # Errors
    /// Will return errors if authentication fails or the API cannot be reached.
    #[tracing::instrument(name = "List accounts", skip(self))]
    pub async fn accounts(&self) -> Result<Vec<Account>, Error> {
        let response: AccountsResponse = self.get("accounts", &[]).await?;

        Ok(response.data.accounts)
    }

    /// Get a single account, or `None` when the response carries no record.
    ///
    /// # Errors
    /// Will return errors if authentication fails or the API cannot be reached.
    #[tracing::instrument(name = "Get account", skip(self))]
    pub async fn account(&self, account_id: &str) -> Result<Option<Account>, Error> {
        let response: AccountsResponse = self.get(&format!("accounts/{account_id}"), &[]).await?;

        Ok(response.data.accounts.into_iter().next())
    }
}
