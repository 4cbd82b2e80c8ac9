mod common;

use billvault::core::services::{
    distinct_categories, BillService, CategoryService, DueStatus, OfferService, OfferStatus,
    RecordFilter, SummaryService, WarrantyService,
};
use billvault::domain::{Bill, Warranty};
use common::{bill, category, offer, warranty, TODAY};
use rust_decimal_macros::dec;

fn bills() -> Vec<Bill> {
    let mut electric = bill(1, "Electric", "Utilities", 0, dec!(90.00));
    electric.notes = Some("Pay through the provider portal".into());
    vec![
        electric,
        bill(2, "Rent", "Housing", 5, dec!(1500.00)),
        bill(3, "Car Insurance", "Insurance", 40, dec!(620.00)),
        bill(4, "Water", "Utilities", -2, dec!(35.50)),
    ]
}

#[test]
fn upcoming_bills_match_thirty_day_example() {
    let upcoming = BillService::upcoming(&bills(), *TODAY, 30);
    let names: Vec<&str> = upcoming.iter().map(|bill| bill.name.as_str()).collect();
    assert_eq!(names, vec!["Electric", "Rent"]);
}

#[test]
fn bill_search_covers_name_category_and_notes() {
    let by_notes = RecordFilter::new().with_query("PORTAL").apply(&bills());
    assert_eq!(by_notes.len(), 1);
    assert_eq!(by_notes[0].id, 1);

    let by_category = BillService::filter(&bills(), &RecordFilter::new().with_query("util"));
    assert_eq!(by_category.len(), 2);

    let combined = RecordFilter::new()
        .with_query("water")
        .with_category("Utilities");
    assert_eq!(combined.apply(&bills()).len(), 1);
}

#[test]
fn bill_statuses_from_today() {
    let all = bills();
    assert_eq!(BillService::due_status(&all[0], *TODAY), DueStatus::DueToday);
    assert_eq!(BillService::due_status(&all[1], *TODAY), DueStatus::DueSoon(5));
    assert_eq!(BillService::due_status(&all[2], *TODAY), DueStatus::Scheduled(40));
    assert_eq!(BillService::due_status(&all[3], *TODAY), DueStatus::Overdue(2));
}

#[test]
fn warranty_search_includes_vendor_and_serial() {
    let mut laptop = warranty(1, "Laptop", "Electronics", 100);
    laptop.serial_number = Some("XK-991".into());
    let warranties: Vec<Warranty> = vec![laptop, warranty(2, "Dryer", "Appliances", 10)];

    let by_serial = WarrantyService::filter(&warranties, &RecordFilter::new().with_query("xk-9"));
    assert_eq!(by_serial.len(), 1);

    let by_vendor = WarrantyService::filter(&warranties, &RecordFilter::new().with_query("acme"));
    let ids: Vec<u32> = by_vendor.iter().map(|w| w.id).collect();
    assert_eq!(ids, vec![2, 1]);
}

#[test]
fn offer_listing_defaults_to_active() {
    let offers = vec![
        offer(1, "Expired Deal", "Food", -1),
        offer(2, "Today Only", "Food", 0),
        offer(3, "Flights", "Travel", 12),
    ];
    let everything = RecordFilter::new();
    let active = OfferService::filter(&offers, &everything, OfferStatus::default(), *TODAY);
    let ids: Vec<u32> = active.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![2, 3]);

    let expired = OfferService::filter(&offers, &everything, OfferStatus::Expired, *TODAY);
    assert_eq!(expired.len(), 1);
    assert_eq!(expired[0].title, "Expired Deal");

    let by_code = OfferService::filter(
        &offers,
        &RecordFilter::new().with_query("code3"),
        OfferStatus::All,
        *TODAY,
    );
    assert_eq!(by_code.len(), 1);
}

#[test]
fn category_counts_join_by_name() {
    let categories = vec![category(1, "Utilities"), category(2, "Travel")];
    let counts = CategoryService::item_counts(
        &categories,
        &[bill(1, "Power", "Utilities", 3, dec!(70))],
        &[warranty(1, "Boiler", "Utilities", 200)],
        &[offer(1, "Hotel", "Lodging", 4)],
    );
    assert_eq!(counts.get("Utilities"), Some(&2));
    assert_eq!(counts.get("Travel"), Some(&0));
    assert_eq!(counts.get("Lodging"), None);
    assert_eq!(CategoryService::total_items(&counts), 2);
}

#[test]
fn dropdown_categories_are_unique_and_sorted() {
    assert_eq!(
        distinct_categories(&bills()),
        vec!["Housing", "Insurance", "Utilities"]
    );
}

#[test]
fn dashboard_stats_over_full_collections() {
    let mut all = bills();
    all[1].is_paid = true;
    let warranties = vec![
        warranty(1, "Router", "Electronics", 20),
        warranty(2, "Stove", "Appliances", 60),
    ];
    let offers = vec![offer(1, "Pizza", "Food", 2), offer(2, "Old", "Food", -9)];

    let stats = SummaryService::dashboard_stats(&all, &warranties, &offers, *TODAY, 30);
    assert_eq!(stats.total_bills, 4);
    assert_eq!(stats.unpaid_bills, 3);
    assert_eq!(stats.overdue_bills, 1);
    assert_eq!(stats.expiring_warranties, 1);
    assert_eq!(stats.active_offers, 1);
    assert_eq!(stats.total_amount, dec!(745.50));
}
