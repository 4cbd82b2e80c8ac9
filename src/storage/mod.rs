//! In-memory record stores with simulated remote latency.
//!
//! Each record kind lives in its own [`RecordStore`], seeded once from
//! fixtures and kept for the lifetime of the process. Every operation hands
//! back owned copies, so callers can mutate results freely without touching
//! stored state.

pub mod fixtures;
pub mod latency;
mod queries;

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::core::time::Clock;
use crate::domain::{Displayable, Identifiable, Record, RecordId};
use crate::errors::StoreError;

pub use fixtures::Fixtures;
pub use latency::Latency;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Ordered collection of one record kind.
pub struct RecordStore<T: Record> {
    records: RwLock<Vec<T>>,
    latency: Latency,
    clock: Arc<dyn Clock>,
}

impl<T: Record> RecordStore<T> {
    pub fn new(seed: Vec<T>, latency: Latency, clock: Arc<dyn Clock>) -> Self {
        Self {
            records: RwLock::new(seed),
            latency,
            clock,
        }
    }

    pub fn empty(latency: Latency, clock: Arc<dyn Clock>) -> Self {
        Self::new(Vec::new(), latency, clock)
    }

    pub(crate) fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Full ordered snapshot of the current records.
    pub async fn get_all(&self) -> Vec<T> {
        latency::simulate(self.latency.get_all_ms).await;
        let records = self.records.read().await;
        debug!(kind = %T::KIND, count = records.len(), "listed records");
        records.clone()
    }

    /// Looks a record up by identifier. A missing record is not an error.
    pub async fn get_by_id(&self, id: RecordId) -> Option<T> {
        latency::simulate(self.latency.get_by_id_ms).await;
        let records = self.records.read().await;
        records.iter().find(|record| record.id() == id).cloned()
    }

    /// Appends a new record under the next free identifier.
    ///
    /// Fails without touching the store once the largest identifier is
    /// `RecordId::MAX`.
    pub async fn create(&self, draft: T::Draft) -> Result<T> {
        latency::simulate(self.latency.create_ms).await;
        let mut records = self.records.write().await;
        let Some(id) = next_id(records.as_slice()) else {
            warn!(kind = %T::KIND, "no identifier left to allocate");
            return Err(StoreError::IdsExhausted { kind: T::KIND });
        };
        let record = T::from_draft(id, draft, self.clock.now());
        debug!(kind = %T::KIND, id, label = %record.display_label(), "created record");
        records.push(record.clone());
        Ok(record)
    }

    /// Merges `patch` over the stored record and refreshes its update timestamp.
    pub async fn update(&self, id: RecordId, patch: T::Patch) -> Result<T> {
        latency::simulate(self.latency.update_ms).await;
        let mut records = self.records.write().await;
        let Some(record) = records.iter_mut().find(|record| record.id() == id) else {
            warn!(kind = %T::KIND, id, "update of unknown record");
            return Err(StoreError::NotFound { kind: T::KIND, id });
        };
        record.apply_patch(patch, self.clock.now());
        debug!(kind = %T::KIND, id, "updated record");
        Ok(record.clone())
    }

    /// Removes a record and returns it.
    pub async fn delete(&self, id: RecordId) -> Result<T> {
        latency::simulate(self.latency.delete_ms).await;
        let mut records = self.records.write().await;
        let Some(index) = records.iter().position(|record| record.id() == id) else {
            warn!(kind = %T::KIND, id, "delete of unknown record");
            return Err(StoreError::NotFound { kind: T::KIND, id });
        };
        let removed = records.remove(index);
        debug!(kind = %T::KIND, id, label = %removed.display_label(), "deleted record");
        Ok(removed)
    }

    /// Snapshot for derived queries, after the query latency.
    pub(crate) async fn query_snapshot(&self) -> Vec<T> {
        latency::simulate(self.latency.query_ms).await;
        self.records.read().await.clone()
    }
}

/// Highest identifier in `records` plus one, or 1 when empty. `None` when
/// the highest identifier is already `RecordId::MAX`.
pub fn next_id<T: Identifiable>(records: &[T]) -> Option<RecordId> {
    match records.iter().map(Identifiable::id).max() {
        Some(max) => max.checked_add(1),
        None => Some(1),
    }
}
