use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::config::{Config, Windows};
use crate::core::services::{
    CategoryCounts, CategoryService, Dashboard, ServiceError, ServiceResult, SummaryService,
};
use crate::core::time::{Clock, SystemClock};
use crate::domain::{Bill, Category, Displayable, Offer, RecordId, RecordKind, Warranty};
use crate::errors::StoreError;
use crate::storage::{Fixtures, RecordStore};

/// Owns the four record stores for the lifetime of the process and answers
/// the cross-kind questions the views ask.
pub struct RecordManager {
    bills: RecordStore<Bill>,
    warranties: RecordStore<Warranty>,
    offers: RecordStore<Offer>,
    categories: RecordStore<Category>,
    windows: Windows,
    clock: Arc<dyn Clock>,
}

impl RecordManager {
    /// Seeds every store from the bundled fixtures and reads the system clock.
    pub fn seeded(config: &Config) -> Result<Self, StoreError> {
        let fixtures = Fixtures::bundled()?;
        Ok(Self::from_fixtures(fixtures, config, Arc::new(SystemClock)))
    }

    pub fn from_fixtures(fixtures: Fixtures, config: &Config, clock: Arc<dyn Clock>) -> Self {
        info!(
            bills = fixtures.bills.len(),
            warranties = fixtures.warranties.len(),
            offers = fixtures.offers.len(),
            categories = fixtures.categories.len(),
            "record stores seeded"
        );
        let latency = config.latency;
        Self {
            bills: RecordStore::new(fixtures.bills, latency, clock.clone()),
            warranties: RecordStore::new(fixtures.warranties, latency, clock.clone()),
            offers: RecordStore::new(fixtures.offers, latency, clock.clone()),
            categories: RecordStore::new(fixtures.categories, latency, clock.clone()),
            windows: config.windows,
            clock,
        }
    }

    pub fn bills(&self) -> &RecordStore<Bill> {
        &self.bills
    }

    pub fn warranties(&self) -> &RecordStore<Warranty> {
        &self.warranties
    }

    pub fn offers(&self) -> &RecordStore<Offer> {
        &self.offers
    }

    pub fn categories(&self) -> &RecordStore<Category> {
        &self.categories
    }

    pub fn windows(&self) -> &Windows {
        &self.windows
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Loads the three item kinds concurrently and builds the dashboard.
    pub async fn dashboard(&self) -> Dashboard {
        let (bills, warranties, offers) = tokio::join!(
            self.bills.get_all(),
            self.warranties.get_all(),
            self.offers.get_all(),
        );
        SummaryService::dashboard(&bills, &warranties, &offers, self.today(), &self.windows)
    }

    /// Item count for every category.
    pub async fn category_counts(&self) -> CategoryCounts {
        let (categories, bills, warranties, offers) = tokio::join!(
            self.categories.get_all(),
            self.bills.get_all(),
            self.warranties.get_all(),
            self.offers.get_all(),
        );
        CategoryService::item_counts(&categories, &bills, &warranties, &offers)
    }

    /// Deletes a category only when no bill, warranty or offer uses its name.
    pub async fn delete_category(&self, id: RecordId) -> ServiceResult<Category> {
        let category = self.categories.get_by_id(id).await.ok_or(StoreError::NotFound {
            kind: RecordKind::Category,
            id,
        })?;
        let (bills, warranties, offers) = tokio::join!(
            self.bills.get_all(),
            self.warranties.get_all(),
            self.offers.get_all(),
        );
        if let Err(err) = CategoryService::ensure_removable(&category, &bills, &warranties, &offers)
        {
            warn!(id, category = %category.display_label(), "category still in use");
            return Err(err);
        }
        self.categories
            .delete(id)
            .await
            .map_err(ServiceError::from)
    }
}
