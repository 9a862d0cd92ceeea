//! Account commands

use chrono::NaiveDate;

use crate::cli::table::{self, Column};
use crate::error::AppErrors as Error;
use crate::model::account::Account;

use super::{balances as balances_cmd, transactions as transactions_cmd};

pub async fn list(json: bool) -> Result<(), Error> {
    let client = super::client()?;
    let accounts = client.accounts().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&accounts)?);
    } else {
        table::print(&accounts, &columns());
    }

    Ok(())
}

pub async fn get(account_id: &str, json: bool) -> Result<(), Error> {
    let client = super::client()?;
    let account = client
        .account(account_id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("account {account_id}")))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&account)?);
    } else {
        table::print(&[account], &columns());
    }

    Ok(())
}

pub async fn balances(account_id: &str, json: bool) -> Result<(), Error> {
    let client = super::client()?;
    let balances = client.account_balances(account_id).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&balances)?);
    } else {
        table::print(&balances, &balances_cmd::columns());
    }

    Ok(())
}

pub async fn transactions(
    account_id: &str,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    json: bool,
) -> Result<(), Error> {
    let client = super::client()?;
    let transactions = client.account_transactions(account_id, from, to).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&transactions)?);
    } else {
        table::print(&transactions, &transactions_cmd::columns());
    }

    Ok(())
}

fn columns() -> Vec<Column<Account>> {
    vec![
        Column::new("ACCOUNT ID", |a: &Account| table::truncate(&a.account_id, 24)),
        Column::new("NICKNAME", |a: &Account| {
            a.nickname.clone().unwrap_or_default()
        }),
        Column::new("CURRENCY", |a: &Account| {
            a.currency.clone().unwrap_or_default()
        }),
        Column::new("TYPE", |a: &Account| {
            a.account_type.clone().unwrap_or_default()
        }),
        Column::new("SUBTYPE", |a: &Account| {
            a.account_sub_type.clone().unwrap_or_default()
        }),
    ]
}
