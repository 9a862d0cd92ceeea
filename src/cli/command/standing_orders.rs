//! Standing order commands

use crate::cli::table::{self, Column};
use crate::error::AppErrors as Error;
use crate::model::standing_order::StandingOrder;

pub async fn list(json: bool) -> Result<(), Error> {
    let client = super::client()?;
    let standing_orders = client.standing_orders().await?;

    render(&standing_orders, json)
}

pub async fn account(account_id: &str, json: bool) -> Result<(), Error> {
    let client = super::client()?;
    let standing_orders = client.account_standing_orders(account_id).await?;

    render(&standing_orders, json)
}

fn render(standing_orders: &[StandingOrder], json: bool) -> Result<(), Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(standing_orders)?);
    } else {
        table::print(standing_orders, &columns());
    }

    Ok(())
}

fn columns() -> Vec<Column<StandingOrder>> {
    vec![
        Column::new("STANDING ORDER ID", |s: &StandingOrder| {
            table::truncate(&s.standing_order_id, 24)
        }),
        Column::new("REFERENCE", |s: &StandingOrder| {
            s.reference.clone().unwrap_or_default()
        }),
        Column::new("FREQUENCY", |s: &StandingOrder| {
            s.frequency.clone().unwrap_or_default()
        }),
        Column::new("NEXT PAYMENT", |s: &StandingOrder| {
            table::money(s.next_payment_amount.as_ref())
        }),
        Column::new("NEXT DATE", |s: &StandingOrder| {
            s.next_payment_date_time
                .as_deref()
                .map(table::date_only)
                .unwrap_or_default()
        }),
        Column::new("STATUS", |s: &StandingOrder| {
            s.status.clone().unwrap_or_default()
        }),
    ]
}
