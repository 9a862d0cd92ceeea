//! Beneficiary related operations

use crate::error::AppErrors as Error;
use crate::model::beneficiary::{BeneficiariesResponse, Beneficiary};

use super::ApiClient;

impl ApiClient {
    /// Get beneficiaries across all accounts.
    ///
    /// # Errors
    /// Will return errors if authentication fails or the API cannot be reached.
    #[tracing::instrument(name = "List beneficiaries", skip(self))]
    pub async fn beneficiaries(&self) -> Result<Vec<Beneficiary>, Error> {
        let response: BeneficiariesResponse = self.get("beneficiaries", &[]).await?;

        Ok(response.data.beneficiaries)
    }

    /// Get the beneficiaries of a single account.
    ///
    /// # Errors
    /// Will return errors if authentication fails or the API cannot be reached.
    #[tracing::instrument(name = "Get account beneficiaries", skip(self))]
    pub async fn account_beneficiaries(&self, account_id: &str) -> Result<Vec<Beneficiary>, Error> {
        let response: BeneficiariesResponse = self
            .get(&format!("accounts/{account_id}/beneficiaries"), &[])
            .await?;

        Ok(response.data.beneficiaries)
    }
}
