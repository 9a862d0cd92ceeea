//! Transaction commands

use chrono::NaiveDate;

use crate::cli::table::{self, Column};
use crate::error::AppErrors as Error;
use crate::model::transaction::Transaction;

pub async fn list(from: Option<NaiveDate>, to: Option<NaiveDate>, json: bool) -> Result<(), Error> {
    let client = super::client()?;
    let transactions = client.transactions(from, to).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&transactions)?);
    } else {
        table::print(&transactions, &columns());
    }

    Ok(())
}

pub async fn get(transaction_id: &str, json: bool) -> Result<(), Error> {
    let client = super::client()?;
    let transaction = client
        .transaction(transaction_id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("transaction {transaction_id}")))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&transaction)?);
    } else {
        table::print(&[transaction], &columns());
    }

    Ok(())
}

pub(crate) fn columns() -> Vec<Column<Transaction>> {
    vec![
        Column::new("TRANSACTION ID", |t: &Transaction| {
            table::truncate(&t.transaction_id, 24)
        }),
        Column::new("DATE", |t: &Transaction| {
            t.booking_date_time
                .as_deref()
                .map(table::date_only)
                .unwrap_or_default()
        }),
        Column::new("AMOUNT", |t: &Transaction| table::money(t.amount.as_ref())),
        Column::new("CR/DR", |t: &Transaction| {
            t.credit_debit_indicator
                .map(|i| i.to_string())
                .unwrap_or_default()
        }),
        Column::new("STATUS", |t: &Transaction| {
            t.status.clone().unwrap_or_default()
        }),
    ]
}
