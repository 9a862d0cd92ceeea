//! Statement related operations
//!
//! Statements hang off an account, including the nested
//! statement-transactions listing.

use crate::error::AppErrors as Error;
use crate::model::statement::{Statement, StatementsResponse};
use crate::model::transaction::{Transaction, TransactionsResponse};

use super::ApiClient;

impl ApiClient {
    /// Get the statements of a single account.
    ///
    /// # Errors
    /// Will return errors if authentication fails or the API cannot be reached.
    #[tracing::instrument(name = "List statements", skip(self))]
    pub async fn account_statements(&self, account_id: &str) -> Result<Vec<Statement>, Error> {
        let response: StatementsResponse = self
            .get(&format!("accounts/{account_id}/statements"), &[])
            .await?;

        Ok(response.data.statements)
    }

    /// Get a single statement, or `None` when the response carries no record.
    ///
    /// # Errors
    /// Will return errors if authentication fails or the API cannot be reached.
    #[tracing::instrument(name = "Get statement", skip(self))]
    pub async fn account_statement(
        &self,
        account_id: &str,
        statement_id: &str,
    ) -> Result<Option<Statement>, Error> {
        let response: StatementsResponse = self
            .get(&format!("accounts/{account_id}/statements/{statement_id}"), &[])
            .await?;

        Ok(response.data.statements.into_iter().next())
    }

    /// Get the transactions covered by a statement.
    ///
    /// # Errors
    /// Will return errors if authentication fails or the API cannot be reached.
    #[tracing::instrument(name = "Get statement transactions", skip(self))]
    pub async fn statement_transactions(
        &self,
        account_id: &str,
        statement_id: &str,
    ) -> Result<Vec<Transaction>, Error> {
        let response: TransactionsResponse = self
            .get(
                &format!("accounts/{account_id}/statements/{statement_id}/transactions"),
                &[],
            )
            .await?;

        Ok(response.data.transactions)
    }
}
