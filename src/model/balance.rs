//! Models for the balances endpoint

use serde::{Deserialize, Serialize};

use super::{Amount, CreditDebitIndicator};

#[derive(Debug, Deserialize)]
pub struct BalancesResponse {
    #[serde(rename = "Data")]
    pub data: BalancesData,
}

#[derive(Debug, Default, Deserialize)]
pub struct BalancesData {
    #[serde(rename = "Balance", default)]
    pub balances: Vec<Balance>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Balance {
    #[serde(rename = "AccountId", skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,

    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub balance_type: Option<String>,

    #[serde(rename = "Amount", skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,

    #[serde(
        rename = "CreditDebitIndicator",
        skip_serializing_if = "Option::is_none"
    )]
    pub credit_debit_indicator: Option<CreditDebitIndicator>,

    #[serde(rename = "DateTime", skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,

    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

// -- Tests ----------------------------------------------------------------

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::BalancesResponse;
    use crate::model::CreditDebitIndicator;

    #[test]
    fn balances_envelope_unwraps() {
        // Arrange
        let body = json!({
            "Data": {
                "Balance": [{
                    "AccountId": "22289",
                    "Type": "InterimAvailable",
                    "Amount": { "Amount": "1230.00", "Currency": "GBP" },
                    "CreditDebitIndicator": "Credit",
                    "DateTime": "2024-01-05T00:00:00+00:00"
                }]
            }
        });

        // Act
        let response: BalancesResponse = serde_json::from_value(body).unwrap();

        // Assert
        let balance = &response.data.balances[0];
        assert_eq!(balance.amount.as_ref().unwrap().amount, "1230.00");
        assert_eq!(
            balance.credit_debit_indicator,
            Some(CreditDebitIndicator::Credit)
        );
    }

    #[test]
    fn missing_amount_deserialises_as_none() {
        let body = json!({ "Data": { "Balance": [{ "Type": "ClosingBooked" }] } });

        let response: BalancesResponse = serde_json::from_value(body).unwrap();

        assert!(response.data.balances[0].amount.is_none());
    }
}
