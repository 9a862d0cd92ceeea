//! Transaction related operations
//!
//! List operations accept optional booking-date bounds which map onto the
//! `fromBookingDateTime`/`toBookingDateTime` query parameters.

use chrono::NaiveDate;

use super::{booking_date_query, ApiClient};
use crate::error::AppErrors as Error;
use crate::model::transaction::{Transaction, TransactionsResponse};

impl ApiClient {
    /// Get transactions across all accounts, optionally bounded by booking date.
    ///
    /// # Errors
    /// Will return errors if authentication fails or the API cannot be reached.
    #[tracing::instrument(name = "List transactions", skip(self))]
    pub async fn transactions(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<Transaction>, Error> {
        let query = booking_date_query(from, to);
        let response: TransactionsResponse = self.get("transactions", &query).await?;

        Ok(response.data.transactions)
    }

    /// Get a single transaction, or `None` when the response carries no record.
    ///
    /// # Errors
    /// Will return errors if authentication fails or the API cannot be reached.
    #[tracing::instrument(name = "Get transaction", skip(self))]
    pub async fn transaction(&self, transaction_id: &str) -> Result<Option<Transaction>, Error> {
        let response: TransactionsResponse = self
            .get(&format!("transactions/{transaction_id}"), &[])
            .await?;

        Ok(response.data.transactions.into_iter().next())
    }

    /// Get the transactions of a single account, optionally bounded by booking date.
    ///
    /// # Errors
    /// Will return errors if authentication fails or the API cannot be reached.
    #[tracing::instrument(name = "Get account transactions", skip(self))]
    pub async fn account_transactions(
        &self,
        account_id: &str,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<Transaction>, Error> {
        let query = booking_date_query(from, to);
        let response: TransactionsResponse = self
            .get(&format!("accounts/{account_id}/transactions"), &query)
            .await?;

        Ok(response.data.transactions)
    }
}
