//! Balance commands

use crate::cli::table::{self, Column};
use crate::error::AppErrors as Error;
use crate::model::balance::Balance;

pub async fn list(json: bool) -> Result<(), Error> {
    let client = super::client()?;
    let balances = client.balances().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&balances)?);
    } else {
        table::print(&balances, &columns());
    }

    Ok(())
}

pub(crate) fn columns() -> Vec<Column<Balance>> {
    vec![
        Column::new("ACCOUNT ID", |b: &Balance| {
            table::truncate(b.account_id.as_deref().unwrap_or_default(), 24)
        }),
        Column::new("TYPE", |b: &Balance| {
            b.balance_type.clone().unwrap_or_default()
        }),
        Column::new("BALANCE", |b: &Balance| table::money(b.amount.as_ref())),
        Column::new("CR/DR", |b: &Balance| {
            b.credit_debit_indicator
                .map(|i| i.to_string())
                .unwrap_or_default()
        }),
        Column::new("DATE", |b: &Balance| {
            b.date_time
                .as_deref()
                .map(table::date_only)
                .unwrap_or_default()
        }),
    ]
}
