//! Domain types representing recurring and one-off bills.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::common::*;

/// A bill the user has to pay by a due date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    #[serde(rename = "Id")]
    pub id: RecordId,
    pub name: String,
    pub amount: Decimal,
    pub category: String,
    pub due_date: NaiveDate,
    pub frequency: Frequency,
    #[serde(default)]
    pub is_paid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// How often a bill comes due.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Frequency {
    OneTime,
    #[default]
    Monthly,
    Yearly,
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Frequency::OneTime => "One-time",
            Frequency::Monthly => "Monthly",
            Frequency::Yearly => "Yearly",
        };
        f.write_str(label)
    }
}

/// Fields supplied when creating a bill.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBill {
    pub name: String,
    pub amount: Decimal,
    pub category: String,
    pub due_date: NaiveDate,
    pub frequency: Frequency,
    pub is_paid: bool,
    pub notes: Option<String>,
}

impl NewBill {
    pub fn new(
        name: impl Into<String>,
        amount: Decimal,
        category: impl Into<String>,
        due_date: NaiveDate,
        frequency: Frequency,
    ) -> Self {
        Self {
            name: name.into(),
            amount,
            category: category.into(),
            due_date,
            frequency,
            is_paid: false,
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn paid(mut self) -> Self {
        self.is_paid = true;
        self
    }
}

/// Partial update for a bill. `notes: Some(None)` clears the notes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BillPatch {
    pub name: Option<String>,
    pub amount: Option<Decimal>,
    pub category: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub frequency: Option<Frequency>,
    pub is_paid: Option<bool>,
    pub notes: Option<Option<String>>,
}

impl BillPatch {
    pub fn mark_paid() -> Self {
        Self {
            is_paid: Some(true),
            ..Self::default()
        }
    }
}

impl Bill {
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.is_paid && self.due_date < today
    }
}

impl Record for Bill {
    type Draft = NewBill;
    type Patch = BillPatch;

    const KIND: RecordKind = RecordKind::Bill;

    fn from_draft(id: RecordId, draft: NewBill, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            amount: draft.amount,
            category: draft.category,
            due_date: draft.due_date,
            frequency: draft.frequency,
            is_paid: draft.is_paid,
            notes: draft.notes,
            created_at: Some(created_at),
            updated_at: None,
        }
    }

    fn apply_patch(&mut self, patch: BillPatch, updated_at: DateTime<Utc>) {
        merge(&mut self.name, patch.name);
        merge(&mut self.amount, patch.amount);
        merge(&mut self.category, patch.category);
        merge(&mut self.due_date, patch.due_date);
        merge(&mut self.frequency, patch.frequency);
        merge(&mut self.is_paid, patch.is_paid);
        merge(&mut self.notes, patch.notes);
        self.updated_at = Some(updated_at);
    }
}

impl Identifiable for Bill {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl Categorized for Bill {
    fn category(&self) -> &str {
        &self.category
    }
}

impl Searchable for Bill {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.category.as_str()];
        fields.extend(self.notes.as_deref());
        fields
    }
}

impl Displayable for Bill {
    fn display_label(&self) -> String {
        format!("{} ({} due {})", self.name, self.amount, self.due_date)
    }
}
