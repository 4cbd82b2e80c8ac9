//! Product warranties and their attached receipts or photos.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::*;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Warranty {
    #[serde(rename = "Id")]
    pub id: RecordId,
    pub product_name: String,
    pub category: String,
    pub purchase_date: NaiveDate,
    pub expiration_date: NaiveDate,
    pub vendor: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, rename = "images", skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Descriptor of a file attached to a warranty. `url` references the content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attachment {
    pub name: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub media_type: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewWarranty {
    pub product_name: String,
    pub category: String,
    pub purchase_date: NaiveDate,
    pub expiration_date: NaiveDate,
    pub vendor: String,
    pub serial_number: Option<String>,
    pub notes: Option<String>,
    pub attachments: Vec<Attachment>,
}

impl NewWarranty {
    pub fn new(
        product_name: impl Into<String>,
        category: impl Into<String>,
        purchase_date: NaiveDate,
        expiration_date: NaiveDate,
        vendor: impl Into<String>,
    ) -> Self {
        Self {
            product_name: product_name.into(),
            category: category.into(),
            purchase_date,
            expiration_date,
            vendor: vendor.into(),
            serial_number: None,
            notes: None,
            attachments: Vec::new(),
        }
    }

    pub fn with_serial_number(mut self, serial: impl Into<String>) -> Self {
        self.serial_number = Some(serial.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WarrantyPatch {
    pub product_name: Option<String>,
    pub category: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub expiration_date: Option<NaiveDate>,
    pub vendor: Option<String>,
    pub serial_number: Option<Option<String>>,
    pub notes: Option<Option<String>>,
    pub attachments: Option<Vec<Attachment>>,
}

impl Warranty {
    /// Whether the coverage window ends strictly after the purchase date.
    /// The store accepts records either way.
    pub fn has_valid_term(&self) -> bool {
        self.expiration_date > self.purchase_date
    }
}

impl Record for Warranty {
    type Draft = NewWarranty;
    type Patch = WarrantyPatch;

    const KIND: RecordKind = RecordKind::Warranty;

    fn from_draft(id: RecordId, draft: NewWarranty, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            product_name: draft.product_name,
            category: draft.category,
            purchase_date: draft.purchase_date,
            expiration_date: draft.expiration_date,
            vendor: draft.vendor,
            serial_number: draft.serial_number,
            notes: draft.notes,
            attachments: draft.attachments,
            created_at: Some(created_at),
            updated_at: None,
        }
    }

    fn apply_patch(&mut self, patch: WarrantyPatch, updated_at: DateTime<Utc>) {
        merge(&mut self.product_name, patch.product_name);
        merge(&mut self.category, patch.category);
        merge(&mut self.purchase_date, patch.purchase_date);
        merge(&mut self.expiration_date, patch.expiration_date);
        merge(&mut self.vendor, patch.vendor);
        merge(&mut self.serial_number, patch.serial_number);
        merge(&mut self.notes, patch.notes);
        merge(&mut self.attachments, patch.attachments);
        self.updated_at = Some(updated_at);
    }
}

impl Identifiable for Warranty {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl Categorized for Warranty {
    fn category(&self) -> &str {
        &self.category
    }
}

impl Searchable for Warranty {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.product_name.as_str(),
            self.category.as_str(),
            self.vendor.as_str(),
        ];
        fields.extend(self.serial_number.as_deref());
        fields.extend(self.notes.as_deref());
        fields
    }
}

impl Displayable for Warranty {
    fn display_label(&self) -> String {
        format!("{} from {}", self.product_name, self.vendor)
    }
}
