//! Stateless derivations over record snapshots.

pub mod bill_service;
pub mod category_service;
pub mod offer_service;
pub mod search;
pub mod summary_service;
pub mod warranty_service;

pub use bill_service::{BillService, DueStatus};
pub use category_service::{CategoryCounts, CategoryService};
pub use offer_service::{OfferService, OfferStatus, OfferUrgency};
pub use search::{distinct_categories, matches_query, search, RecordFilter};
pub use summary_service::{Dashboard, DashboardStats, SummaryService, UrgentItems};
pub use warranty_service::{ExpiryStatus, WarrantyService};

use crate::errors::StoreError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("Cannot delete category `{name}` because it has {count} items")]
    CategoryInUse { name: String, count: usize },
}
