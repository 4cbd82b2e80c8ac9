use std::collections::BTreeMap;

use crate::domain::{Bill, Categorized, Category, Offer, Warranty};

use super::{ServiceError, ServiceResult};

/// Item count per category name.
pub type CategoryCounts = BTreeMap<String, usize>;

pub struct CategoryService;

impl CategoryService {
    /// Maps each category name to the number of bills, warranties and offers
    /// tagged with it.
    pub fn item_counts(
        categories: &[Category],
        bills: &[Bill],
        warranties: &[Warranty],
        offers: &[Offer],
    ) -> CategoryCounts {
        categories
            .iter()
            .map(|category| {
                let count = Self::count_for(&category.name, bills, warranties, offers);
                (category.name.clone(), count)
            })
            .collect()
    }

    pub fn count_for(
        name: &str,
        bills: &[Bill],
        warranties: &[Warranty],
        offers: &[Offer],
    ) -> usize {
        tagged(bills, name) + tagged(warranties, name) + tagged(offers, name)
    }

    pub fn total_items(counts: &CategoryCounts) -> usize {
        counts.values().sum()
    }

    /// Fails while any item still references the category by name.
    pub fn ensure_removable(
        category: &Category,
        bills: &[Bill],
        warranties: &[Warranty],
        offers: &[Offer],
    ) -> ServiceResult<()> {
        let count = Self::count_for(&category.name, bills, warranties, offers);
        if count > 0 {
            return Err(ServiceError::CategoryInUse {
                name: category.name.clone(),
                count,
            });
        }
        Ok(())
    }
}

fn tagged<T: Categorized>(items: &[T], name: &str) -> usize {
    items.iter().filter(|item| item.category() == name).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Frequency, NewBill, NewCategory, NewWarranty, Record};
    use chrono::{NaiveDate, Utc};
    use rust_decimal_macros::dec;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, 1).unwrap()
    }

    fn category(id: u32, name: &str) -> Category {
        Category::from_draft(id, NewCategory::new(name, "Tag", "#6366F1"), Utc::now())
    }

    fn bill(category: &str) -> Bill {
        Bill::from_draft(
            1,
            NewBill::new("Power", dec!(80), category, date(), Frequency::Monthly),
            Utc::now(),
        )
    }

    fn warranty(category: &str) -> Warranty {
        Warranty::from_draft(
            1,
            NewWarranty::new("Heater", category, date(), date(), "Lowe's"),
            Utc::now(),
        )
    }

    #[test]
    fn counts_span_all_item_kinds() {
        let categories = vec![category(1, "Utilities"), category(2, "Travel")];
        let counts = CategoryService::item_counts(
            &categories,
            &[bill("Utilities")],
            &[warranty("Utilities")],
            &[],
        );
        assert_eq!(counts["Utilities"], 2);
        assert_eq!(counts["Travel"], 0);
        assert_eq!(CategoryService::total_items(&counts), 2);
    }

    #[test]
    fn name_match_is_exact() {
        assert_eq!(
            CategoryService::count_for("utilities", &[bill("Utilities")], &[], &[]),
            0
        );
    }

    #[test]
    fn referenced_category_is_not_removable() {
        let utilities = category(1, "Utilities");
        let err = CategoryService::ensure_removable(&utilities, &[bill("Utilities")], &[], &[])
            .unwrap_err();
        assert!(matches!(err, ServiceError::CategoryInUse { count: 1, .. }));
        assert!(CategoryService::ensure_removable(&utilities, &[], &[], &[]).is_ok());
    }
}
