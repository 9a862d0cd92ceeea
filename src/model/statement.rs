//! Models for the statements endpoint

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct StatementsResponse {
    #[serde(rename = "Data")]
    pub data: StatementsData,
}

#[derive(Debug, Default, Deserialize)]
pub struct StatementsData {
    #[serde(rename = "Statement", default)]
    pub statements: Vec<Statement>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Statement {
    #[serde(rename = "StatementId")]
    pub statement_id: String,

    #[serde(rename = "AccountId", skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,

    #[serde(rename = "StatementReference", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub statement_type: Option<String>,

    #[serde(rename = "StartDateTime", skip_serializing_if = "Option::is_none")]
    pub start_date_time: Option<String>,

    #[serde(rename = "EndDateTime", skip_serializing_if = "Option::is_none")]
    pub end_date_time: Option<String>,

    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::StatementsResponse;

    #[test]
    fn statements_envelope_unwraps() {
        let body = json!({
            "Data": {
                "Statement": [{
                    "StatementId": "st-1",
                    "AccountId": "22289",
                    "StatementReference": "2024-01",
                    "Type": "RegularPeriodic",
                    "StartDateTime": "2024-01-01T00:00:00+00:00",
                    "EndDateTime": "2024-01-31T23:59:59+00:00"
                }]
            }
        });

        let response: StatementsResponse = serde_json::from_value(body).unwrap();

        let statement = &response.data.statements[0];
        assert_eq!(statement.statement_id, "st-1");
        assert_eq!(
            statement.start_date_time.as_deref(),
            Some("2024-01-01T00:00:00+00:00")
        );
    }
}
