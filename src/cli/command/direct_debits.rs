//! Direct debit commands

use crate::cli::table::{self, Column};
use crate::error::AppErrors as Error;
use crate::model::direct_debit::DirectDebit;

pub async fn list(json: bool) -> Result<(), Error> {
    let client = super::client()?;
    let direct_debits = client.direct_debits().await?;

    render(&direct_debits, json)
}

pub async fn account(account_id: &str, json: bool) -> Result<(), Error> {
    let client = super::client()?;
    let direct_debits = client.account_direct_debits(account_id).await?;

    render(&direct_debits, json)
}

fn render(direct_debits: &[DirectDebit], json: bool) -> Result<(), Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(direct_debits)?);
    } else {
        table::print(direct_debits, &columns());
    }

    Ok(())
}

fn columns() -> Vec<Column<DirectDebit>> {
    vec![
        Column::new("DIRECT DEBIT ID", |d: &DirectDebit| {
            table::truncate(&d.direct_debit_id, 24)
        }),
        Column::new("NAME", |d: &DirectDebit| d.name.clone().unwrap_or_default()),
        Column::new("MANDATE", |d: &DirectDebit| {
            d.mandate_identification.clone().unwrap_or_default()
        }),
        Column::new("FREQUENCY", |d: &DirectDebit| {
            d.frequency.clone().unwrap_or_default()
        }),
        Column::new("STATUS", |d: &DirectDebit| {
            d.status.clone().unwrap_or_default()
        }),
        Column::new("LAST PAYMENT", |d: &DirectDebit| {
            table::money(d.previous_payment_amount.as_ref())
        }),
        Column::new("LAST DATE", |d: &DirectDebit| {
            d.previous_payment_date_time
                .as_deref()
                .map(table::date_only)
                .unwrap_or_default()
        }),
    ]
}
