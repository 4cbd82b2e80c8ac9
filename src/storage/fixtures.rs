//! Static seed data, embedded at compile time and parsed once at startup.

use serde::de::DeserializeOwned;

use crate::domain::{Bill, Category, Offer, Warranty};
use crate::errors::StoreError;

const BILLS_JSON: &str = include_str!("../../fixtures/bills.json");
const WARRANTIES_JSON: &str = include_str!("../../fixtures/warranties.json");
const OFFERS_JSON: &str = include_str!("../../fixtures/offers.json");
const CATEGORIES_JSON: &str = include_str!("../../fixtures/categories.json");

/// Seed collections for the four record kinds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fixtures {
    pub bills: Vec<Bill>,
    pub warranties: Vec<Warranty>,
    pub offers: Vec<Offer>,
    pub categories: Vec<Category>,
}

impl Fixtures {
    /// Parses the bundled datasets.
    pub fn bundled() -> Result<Self, StoreError> {
        Ok(Self {
            bills: parse(BILLS_JSON)?,
            warranties: parse(WARRANTIES_JSON)?,
            offers: parse(OFFERS_JSON)?,
            categories: parse(CATEGORIES_JSON)?,
        })
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

/// Parses a JSON array of records.
pub fn parse<T: DeserializeOwned>(json: &str) -> Result<Vec<T>, StoreError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Frequency, Identifiable};
    use std::collections::HashSet;

    fn unique_ids<T: Identifiable>(records: &[T]) -> bool {
        let ids: HashSet<_> = records.iter().map(Identifiable::id).collect();
        ids.len() == records.len()
    }

    #[test]
    fn bundled_fixtures_parse() {
        let fixtures = Fixtures::bundled().unwrap();
        assert!(!fixtures.bills.is_empty());
        assert!(!fixtures.warranties.is_empty());
        assert!(!fixtures.offers.is_empty());
        assert!(!fixtures.categories.is_empty());
        assert!(fixtures
            .bills
            .iter()
            .any(|bill| bill.frequency == Frequency::OneTime));
    }

    #[test]
    fn bundled_identifiers_are_unique_per_kind() {
        let fixtures = Fixtures::bundled().unwrap();
        assert!(unique_ids(&fixtures.bills));
        assert!(unique_ids(&fixtures.warranties));
        assert!(unique_ids(&fixtures.offers));
        assert!(unique_ids(&fixtures.categories));
    }

    #[test]
    fn bundled_items_reference_known_categories() {
        let fixtures = Fixtures::bundled().unwrap();
        let names: HashSet<_> = fixtures.categories.iter().map(|c| c.name.as_str()).collect();
        assert!(fixtures.bills.iter().all(|b| names.contains(b.category.as_str())));
        assert!(fixtures.warranties.iter().all(|w| names.contains(w.category.as_str())));
        assert!(fixtures.offers.iter().all(|o| names.contains(o.category.as_str())));
    }

    #[test]
    fn malformed_json_is_a_fixture_error() {
        let err = parse::<Bill>("[{\"Id\": 1}]").unwrap_err();
        assert!(matches!(err, StoreError::Fixture(_)));
    }
}
