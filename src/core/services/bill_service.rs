use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::time::{days_until, within_window};
use crate::domain::Bill;

use super::search::RecordFilter;

/// Bills due within this many days count as due soon.
pub const DUE_SOON_DAYS: i64 = 7;

/// Where a bill stands relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DueStatus {
    Paid,
    /// Days past the due date.
    Overdue(i64),
    DueToday,
    DueTomorrow,
    /// Due in 2 to 7 days.
    DueSoon(i64),
    Scheduled(i64),
}

pub struct BillService;

impl BillService {
    /// Unpaid bills due in `[today, today + window_days]`, earliest first.
    pub fn upcoming(bills: &[Bill], today: NaiveDate, window_days: u32) -> Vec<Bill> {
        let mut upcoming: Vec<Bill> = bills
            .iter()
            .filter(|bill| !bill.is_paid && within_window(bill.due_date, today, window_days))
            .cloned()
            .collect();
        upcoming.sort_by_key(|bill| bill.due_date);
        upcoming
    }

    pub fn unpaid(bills: &[Bill]) -> Vec<Bill> {
        bills.iter().filter(|bill| !bill.is_paid).cloned().collect()
    }

    /// Unpaid bills whose due date is before today, earliest first.
    pub fn overdue(bills: &[Bill], today: NaiveDate) -> Vec<Bill> {
        let mut overdue: Vec<Bill> = bills
            .iter()
            .filter(|bill| bill.is_overdue(today))
            .cloned()
            .collect();
        overdue.sort_by_key(|bill| bill.due_date);
        overdue
    }

    pub fn unpaid_total(bills: &[Bill]) -> Decimal {
        bills
            .iter()
            .filter(|bill| !bill.is_paid)
            .map(|bill| bill.amount)
            .sum()
    }

    pub fn due_status(bill: &Bill, today: NaiveDate) -> DueStatus {
        if bill.is_paid {
            return DueStatus::Paid;
        }
        match days_until(bill.due_date, today) {
            days if days < 0 => DueStatus::Overdue(-days),
            0 => DueStatus::DueToday,
            1 => DueStatus::DueTomorrow,
            days if days <= DUE_SOON_DAYS => DueStatus::DueSoon(days),
            days => DueStatus::Scheduled(days),
        }
    }

    /// Unpaid bills due from today through `within_days`, earliest first,
    /// capped at `limit`. Overdue bills are left out.
    pub fn urgent(bills: &[Bill], today: NaiveDate, within_days: u32, limit: usize) -> Vec<Bill> {
        let mut urgent = Self::upcoming(bills, today, within_days);
        urgent.truncate(limit);
        urgent
    }

    /// Applies a list-view filter, keeping store order.
    pub fn filter(bills: &[Bill], filter: &RecordFilter) -> Vec<Bill> {
        filter.apply(bills)
    }
}
