//! The record field model shared by the mappers and the store layer.
//!
//! The external store is treated as an opaque keyed collection of records:
//! each record has a type, an identifier assigned on create, and a named set
//! of field values. Search supports a single-field equality predicate, which
//! is the only predicate the endpoints need.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::RecordId;

/// Entity types known to the external store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    Timebill,
    #[serde(rename = "resourceallocation")]
    ResourceAllocation,
    Project,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::Timebill => "timebill",
            RecordType::ResourceAllocation => "resourceallocation",
            RecordType::Project => "project",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single field value on a record.
///
/// Untagged on the wire: numbers serialize as JSON numbers, dates as
/// `YYYY-MM-DD` strings, text as strings. Deserialization tries the variants
/// in declaration order, so an ISO date string comes back as a `Date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Date(NaiveDate),
    Text(String),
}

impl FieldValue {
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            FieldValue::Date(date) => Some(*date),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(number) => Some(*number),
            _ => None,
        }
    }
}

/// The named field set submitted to or returned from the store.
pub type FieldMap = BTreeMap<String, FieldValue>;

/// A record not yet persisted; the store assigns the identifier on create.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRecord {
    pub record_type: RecordType,
    pub fields: FieldMap,
}

/// A persisted record as returned by search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredRecord {
    pub id: RecordId,
    pub record_type: RecordType,
    pub fields: FieldMap,
}

/// An equality predicate on a single named field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EqualsFilter {
    pub field: String,
    pub value: FieldValue,
}

impl EqualsFilter {
    pub fn new(field: impl Into<String>, value: FieldValue) -> Self {
        Self {
            field: field.into(),
            value,
        }
    }

    /// Whether a field set satisfies this predicate. A missing field never
    /// matches.
    pub fn matches(&self, fields: &FieldMap) -> bool {
        fields.get(&self.field) == Some(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn equals_filter_matches_on_value() {
        let mut fields = FieldMap::new();
        fields.insert("trandate".into(), FieldValue::Date(date(2024, 1, 5)));

        let hit = EqualsFilter::new("trandate", FieldValue::Date(date(2024, 1, 5)));
        let miss = EqualsFilter::new("trandate", FieldValue::Date(date(2024, 1, 6)));
        let absent = EqualsFilter::new("customer", FieldValue::Text("Acme".into()));

        assert!(hit.matches(&fields));
        assert!(!miss.matches(&fields));
        assert!(!absent.matches(&fields));
    }

    #[test]
    fn field_value_serializes_dates_as_iso_strings() {
        let value = serde_json::to_value(FieldValue::Date(date(2024, 1, 5))).unwrap();
        assert_eq!(value, serde_json::json!("2024-01-05"));
    }

    #[test]
    fn field_value_deserializes_iso_strings_as_dates() {
        let value: FieldValue = serde_json::from_value(serde_json::json!("2024-01-05")).unwrap();
        assert_eq!(value, FieldValue::Date(date(2024, 1, 5)));

        let value: FieldValue = serde_json::from_value(serde_json::json!("Acme")).unwrap();
        assert_eq!(value, FieldValue::Text("Acme".into()));

        let value: FieldValue = serde_json::from_value(serde_json::json!(3.5)).unwrap();
        assert_eq!(value, FieldValue::Number(3.5));
    }
}
