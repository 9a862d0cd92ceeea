//! Models for the beneficiaries endpoint

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct BeneficiariesResponse {
    #[serde(rename = "Data")]
    pub data: BeneficiariesData,
}

#[derive(Debug, Default, Deserialize)]
pub struct BeneficiariesData {
    #[serde(rename = "Beneficiary", default)]
    pub beneficiaries: Vec<Beneficiary>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Beneficiary {
    #[serde(rename = "BeneficiaryId")]
    pub beneficiary_id: String,

    #[serde(rename = "AccountId", skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,

    #[serde(rename = "Reference", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::BeneficiariesResponse;

    #[test]
    fn beneficiaries_envelope_unwraps() {
        let body = json!({
            "Data": {
                "Beneficiary": [{
                    "BeneficiaryId": "ben-1",
                    "AccountId": "22289",
                    "Reference": "Towbar Club"
                }]
            }
        });

        let response: BeneficiariesResponse = serde_json::from_value(body).unwrap();

        assert_eq!(response.data.beneficiaries[0].beneficiary_id, "ben-1");
        assert_eq!(
            response.data.beneficiaries[0].reference.as_deref(),
            Some("Towbar Club")
        );
    }
}
