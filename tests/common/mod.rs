#![allow(dead_code)]

use std::sync::Arc;

use billvault::{
    core::FixedClock,
    domain::{
        Bill, Category, Frequency, NewBill, NewCategory, NewOffer, NewWarranty, Offer, Record,
        Warranty,
    },
    storage::Fixtures,
    Config, RecordManager,
};
use chrono::{Duration, NaiveDate, Utc};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;

/// The date every test treats as "today".
pub static TODAY: Lazy<NaiveDate> =
    Lazy::new(|| NaiveDate::from_ymd_opt(2025, 5, 14).expect("valid date"));

pub fn days_from_today(offset: i64) -> NaiveDate {
    *TODAY + Duration::days(offset)
}

pub fn clock() -> Arc<FixedClock> {
    Arc::new(FixedClock::on(*TODAY))
}

/// Manager over `fixtures` with no artificial latency and a pinned clock.
pub fn manager_with(fixtures: Fixtures) -> RecordManager {
    RecordManager::from_fixtures(fixtures, &Config::instant(), clock())
}

pub fn category(id: u32, name: &str) -> Category {
    Category::from_draft(id, NewCategory::new(name, "Tag", "#64748B"), Utc::now())
}

pub fn bill(id: u32, name: &str, category: &str, due_in: i64, amount: Decimal) -> Bill {
    Bill::from_draft(
        id,
        NewBill::new(name, amount, category, days_from_today(due_in), Frequency::Monthly),
        Utc::now(),
    )
}

pub fn warranty(id: u32, product: &str, category: &str, expires_in: i64) -> Warranty {
    Warranty::from_draft(
        id,
        NewWarranty::new(
            product,
            category,
            days_from_today(-365),
            days_from_today(expires_in),
            "Acme Retail",
        ),
        Utc::now(),
    )
}

pub fn offer(id: u32, title: &str, category: &str, expires_in: i64) -> Offer {
    Offer::from_draft(
        id,
        NewOffer::new(title, format!("CODE{id}"), category, "10%", days_from_today(expires_in)),
        Utc::now(),
    )
}
