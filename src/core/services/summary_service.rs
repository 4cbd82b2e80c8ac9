use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::config::Windows;
use crate::domain::{Bill, Offer, Warranty};

use super::{BillService, OfferService, WarrantyService};

/// Headline numbers shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_bills: usize,
    pub unpaid_bills: usize,
    pub overdue_bills: usize,
    pub expiring_warranties: usize,
    pub active_offers: usize,
    /// Sum of unpaid bill amounts.
    pub total_amount: Decimal,
}

/// Items that need attention soon.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct UrgentItems {
    pub bills: Vec<Bill>,
    pub warranties: Vec<Warranty>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub stats: DashboardStats,
    pub upcoming_bills: Vec<Bill>,
    pub expiring_warranties: Vec<Warranty>,
    pub active_offers: Vec<Offer>,
    pub urgent: UrgentItems,
}

pub struct SummaryService;

impl SummaryService {
    pub fn dashboard_stats(
        bills: &[Bill],
        warranties: &[Warranty],
        offers: &[Offer],
        today: NaiveDate,
        expiring_window_days: u32,
    ) -> DashboardStats {
        DashboardStats {
            total_bills: bills.len(),
            unpaid_bills: bills.iter().filter(|bill| !bill.is_paid).count(),
            overdue_bills: bills.iter().filter(|bill| bill.is_overdue(today)).count(),
            expiring_warranties: WarrantyService::expiring(warranties, today, expiring_window_days)
                .len(),
            active_offers: offers.iter().filter(|offer| offer.is_active(today)).count(),
            total_amount: BillService::unpaid_total(bills),
        }
    }

    pub fn urgent_items(
        bills: &[Bill],
        warranties: &[Warranty],
        today: NaiveDate,
        windows: &Windows,
    ) -> UrgentItems {
        UrgentItems {
            bills: BillService::urgent(
                bills,
                today,
                windows.urgent_bill_days,
                windows.urgent_limit,
            ),
            warranties: WarrantyService::urgent(
                warranties,
                today,
                windows.urgent_warranty_days,
                windows.urgent_limit,
            ),
        }
    }

    /// Assembles the full dashboard from complete collections.
    pub fn dashboard(
        bills: &[Bill],
        warranties: &[Warranty],
        offers: &[Offer],
        today: NaiveDate,
        windows: &Windows,
    ) -> Dashboard {
        Dashboard {
            stats: Self::dashboard_stats(
                bills,
                warranties,
                offers,
                today,
                windows.expiring_window_days,
            ),
            upcoming_bills: BillService::upcoming(bills, today, windows.upcoming_window_days),
            expiring_warranties: WarrantyService::expiring(
                warranties,
                today,
                windows.expiring_window_days,
            ),
            active_offers: OfferService::active(offers, today),
            urgent: Self::urgent_items(bills, warranties, today, windows),
        }
    }
}
