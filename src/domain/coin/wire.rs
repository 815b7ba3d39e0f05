//! Wire types for coins inside a category response (REST).
//!
//! Every field is optional and leniently parsed; see `shared::serde_util`.

use crate::shared::serde_util::{
    lenient_decimal, lenient_object, lenient_string, lenient_timestamp, lenient_u32, lenient_u64,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Raw 24h statistics for a coin.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DayStatsResponse {
    #[serde(default, deserialize_with = "lenient_decimal::deserialize")]
    pub price: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_u64::deserialize")]
    pub holders: Option<u64>,
    #[serde(default, deserialize_with = "lenient_decimal::deserialize")]
    pub change: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal::deserialize")]
    pub volume: Option<Decimal>,
}

/// Raw coin from the categories endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CoinResponse {
    #[serde(default, deserialize_with = "lenient_string::deserialize")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string::deserialize")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string::deserialize")]
    pub ticker: Option<String>,
    #[serde(default, deserialize_with = "lenient_string::deserialize")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_u32::deserialize")]
    pub decimals: Option<u32>,
    #[serde(default, deserialize_with = "lenient_decimal::deserialize")]
    pub circulating_supply: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_string::deserialize")]
    pub chain: Option<String>,
    #[serde(default, deserialize_with = "lenient_string::deserialize")]
    pub contract_address: Option<String>,
    #[serde(default, deserialize_with = "lenient_string::deserialize")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_string::deserialize")]
    pub twitter_handle: Option<String>,
    #[serde(default, deserialize_with = "lenient_object::deserialize")]
    pub day: Option<DayStatsResponse>,
    #[serde(default, deserialize_with = "lenient_decimal::deserialize")]
    pub price_at_listed: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_timestamp::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient_timestamp::deserialize")]
    pub listed_at: Option<DateTime<Utc>>,
}
