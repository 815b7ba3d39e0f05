//! Coin domain: a tradable token as listed inside a category.

mod convert;
pub mod wire;

use crate::shared::{Chain, CoinId, ContractAddress};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use convert::{CoinConversionError, MAX_DECIMALS};

// ─── DayStats ────────────────────────────────────────────────────────────────

/// Rolling 24h market statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayStats {
    /// USD price, `>= 0`.
    pub price: Decimal,
    pub holders: u64,
    /// Signed percentage change over the last 24h.
    pub change: Decimal,
    /// USD volume, `>= 0`.
    pub volume: Decimal,
}

// ─── Coin ────────────────────────────────────────────────────────────────────

/// A coin after wire conversion: every numeric field holds a usable value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub id: CoinId,
    pub name: String,
    pub ticker: String,
    pub image_url: String,
    /// Token decimals. `0` when the backend value was missing or invalid.
    pub decimals: u32,
    /// Circulating supply in base units, `>= 0`.
    pub circulating_supply: Decimal,
    pub chain: Chain,
    pub contract_address: ContractAddress,
    pub description: String,
    pub twitter_handle: Option<String>,
    pub day: DayStats,
    /// Reference price at listing time. `None` means "no reference", which is
    /// different from a recorded price of zero.
    pub price_at_listed: Option<Decimal>,
    pub created_at: Option<DateTime<Utc>>,
    /// `None` when the backend timestamp was missing or unparseable. `None`
    /// orders before every real timestamp.
    pub listed_at: Option<DateTime<Utc>>,
}

impl Coin {
    /// Minimal coin with neutral defaults; mostly useful for tests and fixtures.
    pub fn new(id: impl Into<CoinId>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            ticker: String::new(),
            image_url: String::new(),
            decimals: 0,
            circulating_supply: Decimal::ZERO,
            chain: Chain::Unknown,
            contract_address: ContractAddress::default(),
            description: String::new(),
            twitter_handle: None,
            day: DayStats::default(),
            price_at_listed: None,
            created_at: None,
            listed_at: None,
        }
    }
}
