//! Direct debit related operations

use crate::error::AppErrors as Error;
use crate::model::direct_debit::{DirectDebit, DirectDebitsResponse};

use super::ApiClient;

impl ApiClient {
    /// Get direct debits across all accounts.
    ///
    /// # Errors
    /// Will return errors if authentication fails or the API cannot be reached.
    #[tracing::instrument(name = "List direct debits", skip(self))]
    pub async fn direct_debits(&self) -> Result<Vec<DirectDebit>, Error> {
        let response: DirectDebitsResponse = self.get("direct-debits", &[]).await?;

        Ok(response.data.direct_debits)
    }

    /// Get the direct debits of a single account.
    ///
    /// # Errors
    /// Will return errors if authentication fails or the API cannot be reached.
    #[tracing::instrument(name = "Get account direct debits", skip(self))]
    pub async fn account_direct_debits(&self, account_id: &str) -> Result<Vec<DirectDebit>, Error> {
        let response: DirectDebitsResponse = self
            .get(&format!("accounts/{account_id}/direct-debits"), &[])
            .await?;

        Ok(response.data.direct_debits)
    }
}
