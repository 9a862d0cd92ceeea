//! Balance related operations

use crate::error::AppErrors as Error;
use crate::model::balance::{Balance, BalancesResponse};

use super::ApiClient;

impl ApiClient {
    /// Get balances across all accounts.
    ///
    /// # Errors
    /// Will return errors if authentication fails or the API cannot be reached.
    #[tracing::instrument(name = "List balances", skip(self))]
    pub async fn balances(&self) -> Result<Vec<Balance>, Error> {
        let response: BalancesResponse = self.get("balances", &[]).await?;

        Ok(response.data.balances)
    }

    /// Get the balances of a single account.
    ///
    /// # Errors
    /// Will return errors if authentication fails or the API cannot be reached.
    #[tracing::instrument(name = "Get account balances", skip(self))]
    pub async fn account_balances(&self, account_id: &str) -> Result<Vec<Balance>, Error> {
        let response: BalancesResponse = self
            .get(&format!("accounts/{account_id}/balances"), &[])
            .await?;

        Ok(response.data.balances)
    }
}
