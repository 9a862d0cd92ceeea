//! Response models for the account information API
//!
//! Records are pass-through values: each struct types the fields the
//! tables render and keeps everything else the remote sent in a flattened
//! map, so re-serialising a record reproduces the envelope-extracted
//! value unchanged.

use serde::{Deserialize, Serialize};

pub mod account;
pub mod balance;
pub mod beneficiary;
pub mod direct_debit;
pub mod standing_order;
pub mod statement;
pub mod transaction;

/// An amount/currency pair as the API sends it (amounts are decimal strings).
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Amount {
    #[serde(rename = "Amount", default)]
    pub amount: String,

    #[serde(rename = "Currency", default)]
    pub currency: String,
}

/// Direction of fund flow on a balance or transaction.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize, strum_macros::Display)]
pub enum CreditDebitIndicator {
    Credit,
    Debit,
}

#[cfg(test)]
mod test {
    use super::CreditDebitIndicator;

    #[test]
    fn credit_debit_indicator_round_trips() {
        let indicator: CreditDebitIndicator = serde_json::from_str("\"Credit\"").unwrap();

        assert_eq!(indicator, CreditDebitIndicator::Credit);
        assert_eq!(indicator.to_string(), "Credit");
        assert_eq!(serde_json::to_string(&indicator).unwrap(), "\"Credit\"");
    }
}
