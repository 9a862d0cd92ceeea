//! Models for the direct debits endpoint

use serde::{Deserialize, Serialize};

use super::Amount;

#[derive(Debug, Deserialize)]
pub struct DirectDebitsResponse {
    #[serde(rename = "Data")]
    pub data: DirectDebitsData,
}

#[derive(Debug, Default, Deserialize)]
pub struct DirectDebitsData {
    #[serde(rename = "DirectDebit", default)]
    pub direct_debits: Vec<DirectDebit>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DirectDebit {
    #[serde(rename = "DirectDebitId")]
    pub direct_debit_id: String,

    #[serde(rename = "AccountId", skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,

    #[serde(
        rename = "MandateIdentification",
        skip_serializing_if = "Option::is_none"
    )]
    pub mandate_identification: Option<String>,

    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "Frequency", skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,

    #[serde(
        rename = "DirectDebitStatusCode",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<String>,

    #[serde(
        rename = "PreviousPaymentDateTime",
        skip_serializing_if = "Option::is_none"
    )]
    pub previous_payment_date_time: Option<String>,

    #[serde(
        rename = "PreviousPaymentAmount",
        skip_serializing_if = "Option::is_none"
    )]
    pub previous_payment_amount: Option<Amount>,

    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::DirectDebitsResponse;

    #[test]
    fn direct_debits_envelope_unwraps() {
        let body = json!({
            "Data": {
                "DirectDebit": [{
                    "DirectDebitId": "dd-1",
                    "AccountId": "22289",
                    "MandateIdentification": "Caravanners",
                    "Name": "Towbar Club 3",
                    "DirectDebitStatusCode": "Active",
                    "PreviousPaymentAmount": { "Amount": "0.57", "Currency": "GBP" }
                }]
            }
        });

        let response: DirectDebitsResponse = serde_json::from_value(body).unwrap();

        let dd = &response.data.direct_debits[0];
        assert_eq!(dd.direct_debit_id, "dd-1");
        assert_eq!(dd.mandate_identification.as_deref(), Some("Caravanners"));
        assert_eq!(dd.previous_payment_amount.as_ref().unwrap().amount, "0.57");
    }
}
