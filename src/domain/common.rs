use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Integer identifier, unique within a single record kind.
pub type RecordId = u32;

/// The four kinds of records held by the vault.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Bill,
    Warranty,
    Offer,
    Category,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RecordKind::Bill => "Bill",
            RecordKind::Warranty => "Warranty",
            RecordKind::Offer => "Offer",
            RecordKind::Category => "Category",
        };
        f.write_str(label)
    }
}

/// Identifies entities that expose a stable unique identifier.
pub trait Identifiable {
    fn id(&self) -> RecordId;
}

/// Items that point at a category by name.
pub trait Categorized {
    fn category(&self) -> &str;
}

/// Exposes the text fields that free-text search looks at.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

/// Supplies a presentation-ready label for UI or logs.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// A record kind the store knows how to create and patch.
///
/// The store logs records by their `display_label`. `Draft` holds the
/// caller-supplied fields for a new record and `Patch` the optional fields of
/// a partial update. Neither carries an identifier, so an update can never
/// rewrite one.
pub trait Record: Clone + Identifiable + Displayable + Send + Sync + 'static {
    type Draft: Send;
    type Patch: Send;

    const KIND: RecordKind;

    fn from_draft(id: RecordId, draft: Self::Draft, created_at: DateTime<Utc>) -> Self;

    fn apply_patch(&mut self, patch: Self::Patch, updated_at: DateTime<Utc>);
}

/// Replaces `target` when the patch carries a value for it.
pub(crate) fn merge<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}

// Re-export common dependencies so consumers can rely on this module as a façade.
pub use chrono;
pub use rust_decimal;
pub use serde;
