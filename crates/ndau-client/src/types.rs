//! Response DTOs for the documented node API endpoints.
//!
//! The dispatcher returns raw bytes; these types exist so callers can decode
//! the JSON payloads with `serde_json::from_slice`. Field renames follow the
//! node's mixed casing exactly.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Query parameters accepted by `/account/list`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountListReq {
    pub limit: i64,
    pub after: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccountListResp {
    #[serde(rename = "NumAccounts")]
    pub num_accounts: i64,
    #[serde(rename = "FirstIndex")]
    pub first_index: i64,
    #[serde(rename = "After")]
    pub after: String,
    #[serde(rename = "NextAfter")]
    pub next_after: String,
    #[serde(rename = "Accounts")]
    pub accounts: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    #[serde(rename = "CurrencySeatDate", default)]
    pub currency_seat_date: Option<DateTime<Utc>>,
    pub id: String,
    pub balance: i64,
}

/// `/account/accounts` response, keyed by account id.
pub type AccountResp = HashMap<String, Account>;

/// `/price/current` response. All amounts are in napu.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentPriceResp {
    pub market_price: i64,
    pub target_price: i64,
    pub floor_price: i64,
    pub total_released: i64,
    pub total_issued: i64,
    pub total_ndau: i64,
    pub total_burned: i64,
    pub sib: i64,
}
