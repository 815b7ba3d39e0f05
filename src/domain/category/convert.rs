//! Conversions from wire types to domain types for categories.

use super::wire::{CategoryResponse, SnapshotResponse};
use super::{CategorySection, Snapshot};
use crate::domain::coin::wire::CoinResponse;
use crate::domain::coin::Coin;
use crate::shared::serde_util::object_from_value;

impl From<CategoryResponse> for CategorySection {
    fn from(source: CategoryResponse) -> Self {
        let id = source.id.unwrap_or_default();
        let mut coins = Vec::with_capacity(source.coins.len());
        for (position, raw) in source.coins.into_iter().enumerate() {
            let Some(response) = object_from_value::<CoinResponse>(raw) else {
                tracing::warn!(section = %id, position, "dropping coin: malformed record");
                continue;
            };
            match Coin::try_from(response) {
                Ok(coin) => coins.push(coin),
                Err(err) => {
                    tracing::warn!(section = %id, position, "dropping coin: {}", err);
                }
            }
        }

        CategorySection {
            name: source.name.unwrap_or_else(|| id.clone()),
            id,
            coins,
        }
    }
}

impl From<SnapshotResponse> for Snapshot {
    fn from(source: SnapshotResponse) -> Self {
        Snapshot {
            sections: source
                .into_sections()
                .into_iter()
                .map(CategorySection::from)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::category::Snapshot;
    use crate::error::SnapshotError;

    #[test]
    fn test_single_object_normalizes_to_one_section() {
        let snapshot = Snapshot::from_json(
            r#"{"id": "trending", "name": "Trending", "coins": [{"id": "a"}, {"id": "b"}]}"#,
        )
        .unwrap();
        assert_eq!(snapshot.sections.len(), 1);
        assert_eq!(snapshot.sections[0].name, "Trending");
        assert_eq!(snapshot.sections[0].coins.len(), 2);
    }

    #[test]
    fn test_array_preserves_section_order() {
        let snapshot = Snapshot::from_json(
            r#"[
                {"id": "new", "name": "New Listings", "coins": []},
                {"id": "trending", "name": "Trending", "coins": [{"id": "a"}]}
            ]"#,
        )
        .unwrap();
        let names: Vec<_> = snapshot.sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["New Listings", "Trending"]);
        assert!(!snapshot.is_empty());
    }

    #[test]
    fn test_coins_without_id_are_dropped() {
        let snapshot = Snapshot::from_json(
            r#"{"id": 7, "coins": [{"name": "anonymous"}, {"id": "a"}]}"#,
        )
        .unwrap();
        let section = &snapshot.sections[0];
        assert_eq!(section.id, "7");
        assert_eq!(section.name, "7");
        assert_eq!(section.coins.len(), 1);
        assert_eq!(section.coins[0].id.as_str(), "a");
    }

    #[test]
    fn test_malformed_coin_records_are_isolated() {
        let snapshot = Snapshot::from_json(
            r#"[
                {"id": "s", "name": "Trending", "coins": [
                    {"id": "good", "day": {"price": 1.5}},
                    null,
                    "oops",
                    [1, 2],
                    {"id": "later"}
                ]},
                {"id": "t", "name": "New", "coins": [{"id": "other"}]}
            ]"#,
        )
        .unwrap();
        assert_eq!(snapshot.sections.len(), 2);
        let ids: Vec<_> = snapshot.sections[0].coins.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["good", "later"]);
        assert_eq!(snapshot.sections[1].coins.len(), 1);
    }

    #[test]
    fn test_non_object_day_becomes_neutral() {
        let snapshot = Snapshot::from_json(
            r#"{"id": "s", "coins": [
                {"id": "good", "day": {"price": 2, "holders": 10}},
                {"id": "bad", "day": "n/a"},
                {"id": "numeric", "day": 5}
            ]}"#,
        )
        .unwrap();
        let coins = &snapshot.sections[0].coins;
        assert_eq!(coins.len(), 3);
        assert_eq!(coins[0].day.holders, 10);
        assert_eq!(coins[1].id.as_str(), "bad");
        assert!(coins[1].day.price.is_zero());
        assert_eq!(coins[2].day.holders, 0);
    }

    #[test]
    fn test_not_json_is_rejected() {
        let err = Snapshot::from_json("<html>502</html>").unwrap_err();
        assert!(matches!(err, SnapshotError::NotJson(_)));
    }

    #[test]
    fn test_unexpected_shape_is_rejected() {
        for body in [r#""hello""#, r#"{"name": "no coins"}"#, r#"[1, 2]"#, r#"{"coins": 5}"#] {
            let err = Snapshot::from_json(body).unwrap_err();
            assert!(
                matches!(err, SnapshotError::UnexpectedShape(_)),
                "expected shape error for {body}"
            );
        }
    }

    #[test]
    fn test_empty_array_is_an_empty_snapshot() {
        let snapshot = Snapshot::from_json("[]").unwrap();
        assert!(snapshot.sections.is_empty());
        assert!(snapshot.is_empty());
    }
}
