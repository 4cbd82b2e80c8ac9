//! Kind-specific operations layered on the generic store.

use tracing::debug;

use crate::core::services::{BillService, OfferService, WarrantyService};
use crate::domain::{Bill, BillPatch, Offer, RecordId, Warranty};

use super::{RecordStore, Result};

impl RecordStore<Bill> {
    /// Unpaid bills due within `window_days` of today, earliest first.
    pub async fn upcoming(&self, window_days: u32) -> Vec<Bill> {
        let snapshot = self.query_snapshot().await;
        let upcoming = BillService::upcoming(&snapshot, self.clock().today(), window_days);
        debug!(window_days, count = upcoming.len(), "upcoming bills");
        upcoming
    }

    /// Flags a bill as paid; same latency and failure modes as `update`.
    pub async fn mark_paid(&self, id: RecordId) -> Result<Bill> {
        self.update(id, BillPatch::mark_paid()).await
    }
}

impl RecordStore<Warranty> {
    /// Warranties expiring within `window_days` of today, soonest first.
    pub async fn expiring(&self, window_days: u32) -> Vec<Warranty> {
        let snapshot = self.query_snapshot().await;
        let expiring = WarrantyService::expiring(&snapshot, self.clock().today(), window_days);
        debug!(window_days, count = expiring.len(), "expiring warranties");
        expiring
    }
}

impl RecordStore<Offer> {
    /// Offers expiring today or later, soonest first.
    pub async fn active(&self) -> Vec<Offer> {
        let snapshot = self.query_snapshot().await;
        let active = OfferService::active(&snapshot, self.clock().today());
        debug!(count = active.len(), "active offers");
        active
    }
}
