pub mod bill;
pub mod category;
pub mod common;
pub mod offer;
pub mod warranty;

pub use bill::{Bill, BillPatch, Frequency, NewBill};
pub use category::{Category, CategoryPatch, NewCategory};
pub use common::{
    Categorized, Displayable, Identifiable, Record, RecordId, RecordKind, Searchable,
};
pub use offer::{NewOffer, Offer, OfferPatch};
pub use warranty::{Attachment, NewWarranty, Warranty, WarrantyPatch};
