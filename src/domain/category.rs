//! Categories group bills, warranties and offers by name.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::*;

/// Items join to a category through its `name`, not its identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(rename = "Id")]
    pub id: RecordId,
    pub name: String,
    /// Icon token understood by the presentation layer.
    pub icon: String,
    /// Display color, usually a hex string like `#3B82F6`.
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
    pub icon: String,
    pub color: String,
}

impl NewCategory {
    pub fn new(
        name: impl Into<String>,
        icon: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            color: color.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
}

impl Record for Category {
    type Draft = NewCategory;
    type Patch = CategoryPatch;

    const KIND: RecordKind = RecordKind::Category;

    fn from_draft(id: RecordId, draft: NewCategory, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            icon: draft.icon,
            color: draft.color,
            created_at: Some(created_at),
            updated_at: None,
        }
    }

    fn apply_patch(&mut self, patch: CategoryPatch, updated_at: DateTime<Utc>) {
        merge(&mut self.name, patch.name);
        merge(&mut self.icon, patch.icon);
        merge(&mut self.color, patch.color);
        self.updated_at = Some(updated_at);
    }
}

impl Identifiable for Category {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl Searchable for Category {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }
}

impl Displayable for Category {
    fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.icon)
    }
}
