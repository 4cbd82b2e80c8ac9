//! Coupons and promotional offers.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::*;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    #[serde(rename = "Id")]
    pub id: RecordId,
    pub title: String,
    pub code: String,
    pub category: String,
    /// Free-form value such as `20%` or `$10 off`.
    pub value: String,
    pub expiration_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terms: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewOffer {
    pub title: String,
    pub code: String,
    pub category: String,
    pub value: String,
    pub expiration_date: NaiveDate,
    pub terms: Option<String>,
}

impl NewOffer {
    pub fn new(
        title: impl Into<String>,
        code: impl Into<String>,
        category: impl Into<String>,
        value: impl Into<String>,
        expiration_date: NaiveDate,
    ) -> Self {
        Self {
            title: title.into(),
            code: code.into(),
            category: category.into(),
            value: value.into(),
            expiration_date,
            terms: None,
        }
    }

    pub fn with_terms(mut self, terms: impl Into<String>) -> Self {
        self.terms = Some(terms.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OfferPatch {
    pub title: Option<String>,
    pub code: Option<String>,
    pub category: Option<String>,
    pub value: Option<String>,
    pub expiration_date: Option<NaiveDate>,
    pub terms: Option<Option<String>>,
}

impl Offer {
    pub fn is_active(&self, today: NaiveDate) -> bool {
        self.expiration_date >= today
    }
}

impl Record for Offer {
    type Draft = NewOffer;
    type Patch = OfferPatch;

    const KIND: RecordKind = RecordKind::Offer;

    fn from_draft(id: RecordId, draft: NewOffer, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            code: draft.code,
            category: draft.category,
            value: draft.value,
            expiration_date: draft.expiration_date,
            terms: draft.terms,
            created_at: Some(created_at),
            updated_at: None,
        }
    }

    fn apply_patch(&mut self, patch: OfferPatch, updated_at: DateTime<Utc>) {
        merge(&mut self.title, patch.title);
        merge(&mut self.code, patch.code);
        merge(&mut self.category, patch.category);
        merge(&mut self.value, patch.value);
        merge(&mut self.expiration_date, patch.expiration_date);
        merge(&mut self.terms, patch.terms);
        self.updated_at = Some(updated_at);
    }
}

impl Identifiable for Offer {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl Categorized for Offer {
    fn category(&self) -> &str {
        &self.category
    }
}

impl Searchable for Offer {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.title.as_str(),
            self.code.as_str(),
            self.category.as_str(),
            self.value.as_str(),
        ];
        fields.extend(self.terms.as_deref());
        fields
    }
}

impl Displayable for Offer {
    fn display_label(&self) -> String {
        format!("{} [{}] {}", self.title, self.code, self.value)
    }
}
