use std::collections::BTreeSet;

use crate::domain::{Categorized, Searchable};

/// Case-insensitive substring match against a record's searchable fields.
/// An empty query matches everything.
pub fn matches_query<T: Searchable + ?Sized>(record: &T, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

pub fn search<T: Searchable + Clone>(records: &[T], query: &str) -> Vec<T> {
    records
        .iter()
        .filter(|record| matches_query(*record, query))
        .cloned()
        .collect()
}

/// Sorted, de-duplicated category names used by `records`.
pub fn distinct_categories<T: Categorized>(records: &[T]) -> Vec<String> {
    records
        .iter()
        .map(|record| record.category().to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Search text plus an exact category match, as used by list views.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    pub query: Option<String>,
    pub category: Option<String>,
}

impl RecordFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn matches<T: Searchable + Categorized>(&self, record: &T) -> bool {
        let query_ok = self
            .query
            .as_deref()
            .map_or(true, |query| matches_query(record, query));
        let category_ok = match self.category.as_deref() {
            None | Some("") => true,
            Some(category) => record.category() == category,
        };
        query_ok && category_ok
    }

    pub fn apply<T: Searchable + Categorized + Clone>(&self, records: &[T]) -> Vec<T> {
        records
            .iter()
            .filter(|record| self.matches(*record))
            .cloned()
            .collect()
    }
}
