use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::time::days_until;
use crate::domain::Offer;

use super::search::RecordFilter;

/// Which offers a listing shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferStatus {
    #[default]
    Active,
    Expired,
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OfferUrgency {
    Expired,
    ExpiresToday,
    /// Three days or fewer left.
    Urgent(i64),
    /// A week or less left.
    Soon(i64),
    Open(i64),
}

pub struct OfferService;

impl OfferService {
    /// Offers expiring today or later, soonest first.
    pub fn active(offers: &[Offer], today: NaiveDate) -> Vec<Offer> {
        Self::with_status(offers, today, OfferStatus::Active)
    }

    pub fn expired(offers: &[Offer], today: NaiveDate) -> Vec<Offer> {
        Self::with_status(offers, today, OfferStatus::Expired)
    }

    pub fn with_status(offers: &[Offer], today: NaiveDate, status: OfferStatus) -> Vec<Offer> {
        let mut selected: Vec<Offer> = offers
            .iter()
            .filter(|offer| status_matches(offer, today, status))
            .cloned()
            .collect();
        selected.sort_by_key(|offer| offer.expiration_date);
        selected
    }

    pub fn urgency(offer: &Offer, today: NaiveDate) -> OfferUrgency {
        match days_until(offer.expiration_date, today) {
            days if days < 0 => OfferUrgency::Expired,
            0 => OfferUrgency::ExpiresToday,
            days if days <= 3 => OfferUrgency::Urgent(days),
            days if days <= 7 => OfferUrgency::Soon(days),
            days => OfferUrgency::Open(days),
        }
    }

    /// List-view filtering: text and category, then status, ordered by expiration.
    pub fn filter(
        offers: &[Offer],
        filter: &RecordFilter,
        status: OfferStatus,
        today: NaiveDate,
    ) -> Vec<Offer> {
        Self::with_status(&filter.apply(offers), today, status)
    }
}

fn status_matches(offer: &Offer, today: NaiveDate, status: OfferStatus) -> bool {
    match status {
        OfferStatus::Active => offer.is_active(today),
        OfferStatus::Expired => !offer.is_active(today),
        OfferStatus::All => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NewOffer, Record};
    use chrono::{Duration, Utc};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 1).unwrap()
    }

    fn offer(id: u32, expires_in: i64, category: &str) -> Offer {
        let draft = NewOffer::new(
            format!("Offer {id}"),
            format!("CODE{id}"),
            category,
            "10%",
            today() + Duration::days(expires_in),
        );
        Offer::from_draft(id, draft, Utc::now())
    }

    #[test]
    fn active_includes_today_and_excludes_yesterday() {
        let offers = vec![offer(1, -1, "Food"), offer(2, 0, "Food"), offer(3, 9, "Food")];
        let ids: Vec<u32> = OfferService::active(&offers, today())
            .iter()
            .map(|offer| offer.id)
            .collect();
        assert_eq!(ids, vec![2, 3]);

        let expired = OfferService::expired(&offers, today());
        assert_eq!(expired.len(), 1);
        assert_eq!(expired[0].id, 1);
    }

    #[test]
    fn urgency_levels() {
        assert_eq!(OfferService::urgency(&offer(1, -5, "x"), today()), OfferUrgency::Expired);
        assert_eq!(OfferService::urgency(&offer(1, 0, "x"), today()), OfferUrgency::ExpiresToday);
        assert_eq!(OfferService::urgency(&offer(1, 3, "x"), today()), OfferUrgency::Urgent(3));
        assert_eq!(OfferService::urgency(&offer(1, 6, "x"), today()), OfferUrgency::Soon(6));
        assert_eq!(OfferService::urgency(&offer(1, 8, "x"), today()), OfferUrgency::Open(8));
    }

    #[test]
    fn filter_applies_category_then_status() {
        let offers = vec![
            offer(1, 20, "Food"),
            offer(2, 2, "Travel"),
            offer(3, -3, "Food"),
            offer(4, 1, "Food"),
        ];
        let filter = RecordFilter::new().with_category("Food");
        let all: Vec<u32> = OfferService::filter(&offers, &filter, OfferStatus::All, today())
            .iter()
            .map(|offer| offer.id)
            .collect();
        assert_eq!(all, vec![3, 4, 1]);

        let active = OfferService::filter(&offers, &filter, OfferStatus::default(), today());
        assert_eq!(active.len(), 2);
    }
}
