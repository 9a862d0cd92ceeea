//! Models for the transactions endpoint

use serde::{Deserialize, Serialize};

use super::{Amount, CreditDebitIndicator};

#[derive(Debug, Deserialize)]
pub struct TransactionsResponse {
    #[serde(rename = "Data")]
    pub data: TransactionsData,
}

#[derive(Debug, Default, Deserialize)]
pub struct TransactionsData {
    #[serde(rename = "Transaction", default)]
    pub transactions: Vec<Transaction>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Transaction {
    #[serde(rename = "TransactionId")]
    pub transaction_id: String,

    #[serde(rename = "AccountId", skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,

    #[serde(rename = "BookingDateTime", skip_serializing_if = "Option::is_none")]
    pub booking_date_time: Option<String>,

    #[serde(rename = "Amount", skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,

    #[serde(
        rename = "CreditDebitIndicator",
        skip_serializing_if = "Option::is_none"
    )]
    pub credit_debit_indicator: Option<CreditDebitIndicator>,

    #[serde(rename = "Status", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

// -- Tests ----------------------------------------------------------------

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::TransactionsResponse;

    #[test]
    fn transactions_envelope_unwraps() {
        // Arrange
        let body = json!({
            "Data": {
                "Transaction": [{
                    "TransactionId": "tx-123",
                    "AccountId": "22289",
                    "BookingDateTime": "2024-01-03T10:43:07+00:00",
                    "Amount": { "Amount": "10.00", "Currency": "GBP" },
                    "CreditDebitIndicator": "Debit",
                    "Status": "Booked"
                }]
            }
        });

        // Act
        let response: TransactionsResponse = serde_json::from_value(body).unwrap();

        // Assert
        let tx = &response.data.transactions[0];
        assert_eq!(tx.transaction_id, "tx-123");
        assert_eq!(tx.status.as_deref(), Some("Booked"));
    }

    #[test]
    fn unknown_fields_survive_the_round_trip() {
        let raw = json!({
            "TransactionId": "tx-123",
            "BookingDateTime": "2024-01-03T10:43:07+00:00",
            "TransactionInformation": "Cash from Aubrey",
            "BankTransactionCode": { "Code": "ReceivedCreditTransfer" }
        });

        let tx: super::Transaction = serde_json::from_value(raw.clone()).unwrap();
        let serialised = serde_json::to_value(&tx).unwrap();

        assert_eq!(serialised, raw);
    }
}
