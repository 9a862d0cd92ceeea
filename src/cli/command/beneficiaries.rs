//! Beneficiary commands

use crate::cli::table::{self, Column};
use crate::error::AppErrors as Error;
use crate::model::beneficiary::Beneficiary;

pub async fn list(json: bool) -> Result<(), Error> {
    let client = super::client()?;
    let beneficiaries = client.beneficiaries().await?;

    render(&beneficiaries, json)
}

pub async fn account(account_id: &str, json: bool) -> Result<(), Error> {
    let client = super::client()?;
    let beneficiaries = client.account_beneficiaries(account_id).await?;

    render(&beneficiaries, json)
}

fn render(beneficiaries: &[Beneficiary], json: bool) -> Result<(), Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(beneficiaries)?);
    } else {
        table::print(beneficiaries, &columns());
    }

    Ok(())
}

fn columns() -> Vec<Column<Beneficiary>> {
    vec![
        Column::new("BENEFICIARY ID", |b: &Beneficiary| {
            table::truncate(&b.beneficiary_id, 24)
        }),
        Column::new("ACCOUNT ID", |b: &Beneficiary| {
            table::truncate(b.account_id.as_deref().unwrap_or_default(), 24)
        }),
        Column::new("REFERENCE", |b: &Beneficiary| {
            b.reference.clone().unwrap_or_default()
        }),
    ]
}
