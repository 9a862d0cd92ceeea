//! Models for the accounts endpoint

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct AccountsResponse {
    #[serde(rename = "Data")]
    pub data: AccountsData,
}

#[derive(Debug, Default, Deserialize)]
pub struct AccountsData {
    #[serde(rename = "Account", default)]
    pub accounts: Vec<Account>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Account {
    #[serde(rename = "AccountId")]
    pub account_id: String,

    #[serde(rename = "Nickname", skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,

    #[serde(rename = "Currency", skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(rename = "AccountType", skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,

    #[serde(rename = "AccountSubType", skip_serializing_if = "Option::is_none")]
    pub account_sub_type: Option<String>,

    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

// -- Tests ----------------------------------------------------------------
