//! Conversion: CoinResponse → Coin.
//!
//! Only a missing id rejects a record. Every other bad field is replaced by a
//! neutral default so one broken coin never takes the whole view down.

use super::wire::{CoinResponse, DayStatsResponse};
use super::{Coin, DayStats};
use crate::shared::{Chain, CoinId, ContractAddress};
use rust_decimal::Decimal;
use std::fmt;

/// Largest `decimals` a supply can be scaled by (`Decimal`'s max scale).
pub const MAX_DECIMALS: u32 = 28;

#[derive(Debug, Clone, PartialEq)]
pub enum CoinConversionError {
    MissingId,
}

impl fmt::Display for CoinConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoinConversionError::MissingId => write!(f, "Missing coin id"),
        }
    }
}

impl std::error::Error for CoinConversionError {}

fn non_negative(id: &str, field: &str, value: Option<Decimal>) -> Decimal {
    match value {
        Some(v) if v.is_sign_negative() && !v.is_zero() => {
            tracing::debug!(coin = id, field, %v, "negative value replaced with 0");
            Decimal::ZERO
        }
        Some(v) => v,
        None => Decimal::ZERO,
    }
}

fn day_stats(id: &str, day: Option<DayStatsResponse>) -> DayStats {
    let day = day.unwrap_or_default();
    DayStats {
        price: non_negative(id, "day.price", day.price),
        holders: day.holders.unwrap_or(0),
        change: day.change.unwrap_or(Decimal::ZERO),
        volume: non_negative(id, "day.volume", day.volume),
    }
}

impl TryFrom<CoinResponse> for Coin {
    type Error = CoinConversionError;

    fn try_from(source: CoinResponse) -> Result<Self, Self::Error> {
        let id = source
            .id
            .filter(|id| !id.is_empty())
            .ok_or(CoinConversionError::MissingId)?;

        let decimals = match source.decimals {
            Some(d) if d <= MAX_DECIMALS => d,
            Some(d) => {
                tracing::debug!(coin = %id, decimals = d, "decimals out of range, treating as 0");
                0
            }
            None => 0,
        };

        let price_at_listed = match source.price_at_listed {
            Some(p) if p.is_sign_negative() && !p.is_zero() => {
                tracing::warn!(coin = %id, %p, "negative price at listing ignored");
                None
            }
            other => other,
        };

        Ok(Coin {
            circulating_supply: non_negative(&id, "circulatingSupply", source.circulating_supply),
            day: day_stats(&id, source.day),
            decimals,
            name: source.name.unwrap_or_default(),
            ticker: source.ticker.unwrap_or_default(),
            image_url: source.image_url.unwrap_or_default(),
            chain: source.chain.map(Chain::from).unwrap_or_default(),
            contract_address: source
                .contract_address
                .map(ContractAddress::from)
                .unwrap_or_default(),
            description: source.description.unwrap_or_default(),
            twitter_handle: source.twitter_handle.filter(|h| !h.is_empty()),
            price_at_listed,
            created_at: source.created_at,
            listed_at: source.listed_at,
            id: CoinId::from(id),
        })
    }
}
