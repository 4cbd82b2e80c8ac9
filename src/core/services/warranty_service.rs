use chrono::NaiveDate;
use serde::Serialize;

use crate::core::time::{days_until, within_window};
use crate::domain::Warranty;

use super::search::RecordFilter;

/// Coverage state of a warranty relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExpiryStatus {
    Expired,
    /// Seven days or fewer left.
    Critical(i64),
    /// Thirty days or fewer left.
    Expiring(i64),
    Covered(i64),
}

pub struct WarrantyService;

impl WarrantyService {
    /// Warranties expiring in `[today, today + window_days]`, soonest first.
    pub fn expiring(warranties: &[Warranty], today: NaiveDate, window_days: u32) -> Vec<Warranty> {
        let mut expiring: Vec<Warranty> = warranties
            .iter()
            .filter(|warranty| within_window(warranty.expiration_date, today, window_days))
            .cloned()
            .collect();
        expiring.sort_by_key(|warranty| warranty.expiration_date);
        expiring
    }

    pub fn expiry_status(warranty: &Warranty, today: NaiveDate) -> ExpiryStatus {
        match days_until(warranty.expiration_date, today) {
            days if days < 0 => ExpiryStatus::Expired,
            days if days <= 7 => ExpiryStatus::Critical(days),
            days if days <= 30 => ExpiryStatus::Expiring(days),
            days => ExpiryStatus::Covered(days),
        }
    }

    /// Warranties expiring within `within_days`, soonest first, capped at `limit`.
    pub fn urgent(
        warranties: &[Warranty],
        today: NaiveDate,
        within_days: u32,
        limit: usize,
    ) -> Vec<Warranty> {
        let mut urgent = Self::expiring(warranties, today, within_days);
        urgent.truncate(limit);
        urgent
    }

    /// Applies a list-view filter and orders by expiration date.
    pub fn filter(warranties: &[Warranty], filter: &RecordFilter) -> Vec<Warranty> {
        let mut filtered = filter.apply(warranties);
        filtered.sort_by_key(|warranty| warranty.expiration_date);
        filtered
    }
}
