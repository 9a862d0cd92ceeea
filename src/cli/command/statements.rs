//! Statement commands

use crate::cli::table::{self, Column};
use crate::error::AppErrors as Error;
use crate::model::statement::Statement;

use super::transactions as transactions_cmd;

pub async fn list(account_id: &str, json: bool) -> Result<(), Error> {
    let client = super::client()?;
    let statements = client.account_statements(account_id).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&statements)?);
    } else {
        table::print(&statements, &columns());
    }

    Ok(())
}

pub async fn get(account_id: &str, statement_id: &str, json: bool) -> Result<(), Error> {
    let client = super::client()?;
    let statement = client
        .account_statement(account_id, statement_id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("statement {statement_id}")))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&statement)?);
    } else {
        table::print(&[statement], &columns());
    }

    Ok(())
}

pub async fn transactions(account_id: &str, statement_id: &str, json: bool) -> Result<(), Error> {
    let client = super::client()?;
    let transactions = client
        .statement_transactions(account_id, statement_id)
        .await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&transactions)?);
    } else {
        table::print(&transactions, &transactions_cmd::columns());
    }

    Ok(())
}

fn columns() -> Vec<Column<Statement>> {
    vec![
        Column::new("STATEMENT ID", |s: &Statement| {
            table::truncate(&s.statement_id, 24)
        }),
        Column::new("ACCOUNT ID", |s: &Statement| {
            table::truncate(s.account_id.as_deref().unwrap_or_default(), 24)
        }),
        Column::new("TYPE", |s: &Statement| {
            s.statement_type.clone().unwrap_or_default()
        }),
        Column::new("FROM", |s: &Statement| {
            s.start_date_time
                .as_deref()
                .map(table::date_only)
                .unwrap_or_default()
        }),
        Column::new("TO", |s: &Statement| {
            s.end_date_time
                .as_deref()
                .map(table::date_only)
                .unwrap_or_default()
        }),
    ]
}
