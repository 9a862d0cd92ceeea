//! Standing order related operations

use crate::error::AppErrors as Error;
use crate::model::standing_order::{StandingOrder, StandingOrdersResponse};

use super::ApiClient;

impl ApiClient {
    /// Get standing orders across all accounts.
    ///
    /// # Errors
    /// Will return errors if authentication fails or the API cannot be reached.
    #[tracing::instrument(name = "List standing orders", skip(self))]
    pub async fn standing_orders(&self) -> Result<Vec<StandingOrder>, Error> {
        let response: StandingOrdersResponse = self.get("standing-orders", &[]).await?;

        Ok(response.data.standing_orders)
    }

    /// Get the standing orders of a single account.
    ///
    /// # Errors
    /// Will return errors if authentication fails or the API cannot be reached.
    #[tracing::instrument(name = "Get account standing orders", skip(self))]
    pub async fn account_standing_orders(
        &self,
        account_id: &str,
    ) -> Result<Vec<StandingOrder>, Error> {
        let response: StandingOrdersResponse = self
            .get(&format!("accounts/{account_id}/standing-orders"), &[])
            .await?;

        Ok(response.data.standing_orders)
    }
}
