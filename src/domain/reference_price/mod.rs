//! Reference price domain: the static "price at listing" table.
//!
//! The table is built once per process from an in-memory list and is never
//! refreshed. Lookups are exact, case-sensitive matches on the contract
//! address as stored.

use crate::error::SdkError;
use crate::shared::ContractAddress;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One recorded reference price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferencePriceEntry {
    pub contract_address: ContractAddress,
    pub reference_price_usd: Decimal,
}

impl ReferencePriceEntry {
    pub fn new(contract_address: impl Into<ContractAddress>, reference_price_usd: Decimal) -> Self {
        Self {
            contract_address: contract_address.into(),
            reference_price_usd,
        }
    }
}

/// Immutable contract address → reference price map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferencePriceTable {
    prices: HashMap<ContractAddress, Decimal>,
}

impl ReferencePriceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from entries. Later duplicates overwrite earlier ones; negative
    /// prices are skipped.
    pub fn from_entries(entries: impl IntoIterator<Item = ReferencePriceEntry>) -> Self {
        let mut prices = HashMap::new();
        for entry in entries {
            if entry.reference_price_usd.is_sign_negative() && !entry.reference_price_usd.is_zero() {
                tracing::warn!(
                    address = %entry.contract_address,
                    price = %entry.reference_price_usd,
                    "skipping negative reference price"
                );
                continue;
            }
            prices.insert(entry.contract_address, entry.reference_price_usd);
        }
        Self { prices }
    }

    /// Parse a JSON array of `{ "contractAddress", "referencePriceUsd" }`
    /// objects (prices as strings).
    pub fn from_json(body: &str) -> Result<Self, SdkError> {
        let entries: Vec<ReferencePriceEntry> = serde_json::from_str(body)?;
        Ok(Self::from_entries(entries))
    }

    /// Exact-match lookup. `None` means "no reference", never zero.
    pub fn lookup(&self, address: &ContractAddress) -> Option<Decimal> {
        self.prices.get(address).copied()
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl FromIterator<ReferencePriceEntry> for ReferencePriceTable {
    fn from_iter<I: IntoIterator<Item = ReferencePriceEntry>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_lookup_exact_match() {
        let table: ReferencePriceTable = vec![
            ReferencePriceEntry::new("MintAbcPump", dec("0.01")),
            ReferencePriceEntry::new("MintZero", Decimal::ZERO),
        ]
        .into_iter()
        .collect();

        assert_eq!(table.lookup(&"MintAbcPump".into()), Some(dec("0.01")));
        assert_eq!(table.lookup(&"MintZero".into()), Some(Decimal::ZERO));
        assert_eq!(table.lookup(&"MintMissing".into()), None);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let table = ReferencePriceTable::from_entries([ReferencePriceEntry::new("MintAbc", dec("1"))]);
        assert_eq!(table.lookup(&"mintabc".into()), None);
        assert_eq!(table.lookup(&"MINTABC".into()), None);
        assert_eq!(table.lookup(&" MintAbc".into()), None);
    }

    #[test]
    fn test_negative_prices_skipped() {
        let table = ReferencePriceTable::from_entries([ReferencePriceEntry::new("MintNeg", dec("-1"))]);
        assert!(table.is_empty());
    }

    #[test]
    fn test_from_json() {
        let table = ReferencePriceTable::from_json(
            r#"[{"contractAddress": "MintA", "referencePriceUsd": "0.00001234"}]"#,
        )
        .unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup(&"MintA".into()), Some(dec("0.00001234")));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(ReferencePriceTable::from_json("{not json").is_err());
    }
}
