//! Identity newtypes shared by every domain slice.
//!
//! `CoinId` and `ContractAddress` serialize as plain JSON strings, exactly as
//! the listings backend sends them, so wire structs can hold them directly.

pub mod fmt;
pub mod serde_util;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── CoinId ──────────────────────────────────────────────────────────────────

/// Stable identity of a coin across every category it appears in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CoinId(String);

impl CoinId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CoinId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CoinId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for CoinId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for CoinId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CoinId(s.to_string()))
    }
}

impl Serialize for CoinId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CoinId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(CoinId(s))
    }
}

// ─── ContractAddress ─────────────────────────────────────────────────────────

/// A token contract (mint) address, kept exactly as the backend sent it.
///
/// Equality and hashing are case-sensitive: reference-price lookups must match
/// the stored string byte for byte.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ContractAddress(String);

impl ContractAddress {
    pub fn new(s: &str) -> Self {
        Self(s.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Case-insensitive suffix check (`"...Pump"` matches `"pump"`).
    pub fn ends_with_ignore_case(&self, suffix: &str) -> bool {
        let address = self.0.as_bytes();
        let suffix = suffix.as_bytes();
        address.len() >= suffix.len()
            && address[address.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
    }

    /// Abbreviated form for tables: first 6 and last 4 characters. Short
    /// addresses are not special-cased, so the two halves may overlap.
    pub fn short(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        let head: String = chars.iter().take(6).collect();
        let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
        format!("{}...{}", head, tail)
    }
}

impl std::fmt::Display for ContractAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ContractAddress {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ContractAddress {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl Serialize for ContractAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ContractAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(ContractAddress(s))
    }
}

// ─── Chain ───────────────────────────────────────────────────────────────────

/// Chain a coin lives on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Chain {
    Solana,
    Other(String),
    #[default]
    Unknown,
}

impl Chain {
    pub fn as_str(&self) -> &str {
        match self {
            Chain::Solana => "solana",
            Chain::Other(name) => name,
            Chain::Unknown => "",
        }
    }

    /// Block explorer URL for a token on this chain, if one is known.
    pub fn explorer_token_url(&self, address: &ContractAddress) -> Option<String> {
        match self {
            Chain::Solana if !address.is_empty() => {
                Some(format!("https://solscan.io/token/{}", address))
            }
            _ => None,
        }
    }
}

impl From<String> for Chain {
    fn from(s: String) -> Self {
        match s.as_str() {
            "" => Chain::Unknown,
            "solana" => Chain::Solana,
            _ => Chain::Other(s),
        }
    }
}

impl From<&str> for Chain {
    fn from(s: &str) -> Self {
        Chain::from(s.to_string())
    }
}

impl From<Chain> for String {
    fn from(chain: Chain) -> Self {
        chain.as_str().to_string()
    }
}

impl std::fmt::Display for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
