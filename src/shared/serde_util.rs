//! Custom serde helpers for the listings wire format.
//!
//! The upstream category feed is loosely typed: numbers sometimes arrive as
//! strings, optional fields arrive as `null`, and timestamps are not always
//! valid. These helpers never fail on a bad value; they yield `None` and let the
//! conversion layer substitute a neutral default. Use them together with
//! `#[serde(default)]` so missing fields behave the same as `null`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::str::FromStr;

/// Number or numeric string → `Decimal`. Anything else → `None`.
pub mod lenient_decimal {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.as_ref().and_then(decimal_from_value))
    }
}

/// Non-negative integer (or integral numeric string) → `u32`. Anything else → `None`.
pub mod lenient_u32 {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value
            .as_ref()
            .and_then(u64_from_value)
            .and_then(|n| u32::try_from(n).ok()))
    }
}

/// Non-negative integer (or integral numeric string) → `u64`. Anything else → `None`.
pub mod lenient_u64 {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.as_ref().and_then(u64_from_value))
    }
}

/// RFC 3339 string, `YYYY-MM-DD` date or Unix-millis number → `DateTime<Utc>`. Anything else → `None`.
pub mod lenient_timestamp {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.as_ref().and_then(timestamp_from_value))
    }
}

/// String, number or `null` → `Option<String>`. Numbers are stringified (some
/// backends send numeric ids).
pub mod lenient_string {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(Value::String(s)) => Some(s),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        })
    }
}

/// JSON object → `T`. `null`, scalars, arrays and objects that do not fit `T`
/// → `None`.
pub mod lenient_object {
    use super::*;

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.and_then(object_from_value))
    }
}

/// Decode one record, accepting only JSON objects.
pub(crate) fn object_from_value<T: DeserializeOwned>(value: Value) -> Option<T> {
    match value {
        Value::Object(_) => serde_json::from_value(value).ok(),
        _ => None,
    }
}

pub(crate) fn decimal_from_value(value: &Value) -> Option<Decimal> {
    match value {
        // f64 Display is the shortest round-trip form and never uses exponent
        // notation, so `0.015` parses back as exactly 0.015.
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(Decimal::from(i))
            } else if let Some(u) = n.as_u64() {
                Some(Decimal::from(u))
            } else {
                n.as_f64()
                    .filter(|f| f.is_finite())
                    .and_then(|f| Decimal::from_str(&f.to_string()).ok())
            }
        }
        Value::String(s) => parse_decimal(s),
        _ => None,
    }
}

fn parse_decimal(s: &str) -> Option<Decimal> {
    let s = s.trim();
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}

fn u64_from_value(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0 && f.fract() == 0.0 && *f <= u64::MAX as f64)
                .map(|f| f as u64)
        }),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }
}

fn timestamp_from_value(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => {
            let s = s.trim();
            DateTime::parse_from_rfc3339(s)
                .map(|dt| dt.with_timezone(&Utc))
                .or_else(|_| {
                    // Zone-less ISO timestamps are read as UTC.
                    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.and_utc())
                })
                .ok()
                .or_else(|| {
                    // Date-only values are midnight UTC.
                    NaiveDate::parse_from_str(s, "%Y-%m-%d")
                        .ok()
                        .and_then(|d| d.and_hms_opt(0, 0, 0))
                        .map(|dt| dt.and_utc())
                })
        }
        Value::Number(n) => n
            .as_i64()
            .and_then(DateTime::<Utc>::from_timestamp_millis),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "lenient_decimal::deserialize")]
        price: Option<Decimal>,
        #[serde(default, deserialize_with = "lenient_u32::deserialize")]
        decimals: Option<u32>,
        #[serde(default, deserialize_with = "lenient_timestamp::deserialize")]
        listed_at: Option<DateTime<Utc>>,
        #[serde(default, deserialize_with = "lenient_string::deserialize")]
        id: Option<String>,
    }

    fn probe(json: &str) -> Probe {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_decimal_from_number_is_exact() {
        let p = probe(r#"{"price": 0.015}"#);
        assert_eq!(p.price, Some(Decimal::from_str("0.015").unwrap()));
    }

    #[test]
    fn test_decimal_from_string_and_scientific() {
        assert_eq!(probe(r#"{"price": "2.5"}"#).price, Some(Decimal::new(25, 1)));
        assert_eq!(probe(r#"{"price": "1e-7"}"#).price, Some(Decimal::new(1, 7)));
    }

    #[test]
    fn test_decimal_garbage_is_none() {
        assert_eq!(probe(r#"{"price": "abc"}"#).price, None);
        assert_eq!(probe(r#"{"price": null}"#).price, None);
        assert_eq!(probe(r#"{"price": {"x": 1}}"#).price, None);
        assert_eq!(probe(r#"{}"#).price, None);
    }

    #[test]
    fn test_u32_rejects_negative_and_fractional() {
        assert_eq!(probe(r#"{"decimals": 6}"#).decimals, Some(6));
        assert_eq!(probe(r#"{"decimals": 6.0}"#).decimals, Some(6));
        assert_eq!(probe(r#"{"decimals": "9"}"#).decimals, Some(9));
        assert_eq!(probe(r#"{"decimals": -1}"#).decimals, None);
        assert_eq!(probe(r#"{"decimals": 6.5}"#).decimals, None);
    }

    #[test]
    fn test_timestamp_rfc3339_and_millis() {
        let p = probe(r#"{"listed_at": "2024-06-01T12:00:00.000Z"}"#);
        assert_eq!(p.listed_at.unwrap().timestamp(), 1717243200);
        let p = probe(r#"{"listed_at": 1717243200000}"#);
        assert_eq!(p.listed_at.unwrap().timestamp(), 1717243200);
        let p = probe(r#"{"listed_at": "2024-06-01T12:00:00"}"#);
        assert_eq!(p.listed_at.unwrap().timestamp(), 1717243200);
    }

    #[test]
    fn test_timestamp_date_only_is_midnight_utc() {
        let p = probe(r#"{"listed_at": "2024-06-01"}"#);
        assert_eq!(p.listed_at.unwrap().timestamp(), 1717200000);
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Inner {
        #[serde(default)]
        n: u32,
    }

    #[derive(Deserialize)]
    struct Outer {
        #[serde(default, deserialize_with = "lenient_object::deserialize")]
        inner: Option<Inner>,
    }

    fn outer(json: &str) -> Option<Inner> {
        serde_json::from_str::<Outer>(json).unwrap().inner
    }

    #[test]
    fn test_object_accepts_only_fitting_objects() {
        assert_eq!(outer(r#"{"inner": {"n": 3}}"#), Some(Inner { n: 3 }));
        assert_eq!(outer(r#"{"inner": "n/a"}"#), None);
        assert_eq!(outer(r#"{"inner": 7}"#), None);
        assert_eq!(outer(r#"{"inner": [3]}"#), None);
        assert_eq!(outer(r#"{"inner": {"n": "x"}}"#), None);
        assert_eq!(outer(r#"{"inner": null}"#), None);
        assert_eq!(outer(r#"{}"#), None);
    }

    #[test]
    fn test_timestamp_garbage_is_none() {
        assert_eq!(probe(r#"{"listed_at": "yesterday"}"#).listed_at, None);
        assert_eq!(probe(r#"{"listed_at": true}"#).listed_at, None);
    }

    #[test]
    fn test_string_accepts_numbers() {
        assert_eq!(probe(r#"{"id": 42}"#).id.as_deref(), Some("42"));
        assert_eq!(probe(r#"{"id": "abc"}"#).id.as_deref(), Some("abc"));
        assert_eq!(probe(r#"{"id": false}"#).id, None);
    }
}
