//! Models for the standing orders endpoint

use serde::{Deserialize, Serialize};

use super::Amount;

#[derive(Debug, Deserialize)]
pub struct StandingOrdersResponse {
    #[serde(rename = "Data")]
    pub data: StandingOrdersData,
}

#[derive(Debug, Default, Deserialize)]
pub struct StandingOrdersData {
    #[serde(rename = "StandingOrder", default)]
    pub standing_orders: Vec<StandingOrder>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct StandingOrder {
    #[serde(rename = "StandingOrderId")]
    pub standing_order_id: String,

    #[serde(rename = "AccountId", skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,

    #[serde(rename = "Frequency", skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,

    #[serde(rename = "Reference", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    #[serde(
        rename = "NextPaymentDateTime",
        skip_serializing_if = "Option::is_none"
    )]
    pub next_payment_date_time: Option<String>,

    #[serde(rename = "NextPaymentAmount", skip_serializing_if = "Option::is_none")]
    pub next_payment_amount: Option<Amount>,

    #[serde(
        rename = "StandingOrderStatusCode",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<String>,

    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}
