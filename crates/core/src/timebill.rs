//! Timebill inputs, batch validation, and field mapping.
//!
//! A timebill records hours worked against a customer and a case, task, or
//! event on a given transaction date. The store's field set for the entity is
//! `trandate`, `customer`, `casetaskevent`, `hours`, `memo`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates;
use crate::error::CoreError;
use crate::record::{FieldMap, FieldValue, NewRecord, RecordType, StoredRecord};
use crate::scalar::Scalar;
use crate::types::RecordId;
use crate::violation::ViolationList;

/// One timebill entry as submitted by a client. All fields are optional at
/// the deserialization layer; required-field enforcement is the validator's
/// job so that a missing field is reported as a violation, not a parse error.
#[derive(Debug, Clone, Deserialize)]
pub struct TimebillInput {
    #[serde(default)]
    pub trandate: Option<String>,
    #[serde(default)]
    pub customer: Option<String>,
    #[serde(default)]
    pub casetaskevent: Option<String>,
    #[serde(default)]
    pub hours: Option<Scalar>,
    #[serde(default)]
    pub memo: Option<String>,
}

/// A timebill entry that has passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct TimebillDraft {
    pub trandate: NaiveDate,
    pub customer: String,
    pub casetaskevent: String,
    pub hours: f64,
    pub memo: Option<String>,
}

impl TimebillDraft {
    /// Map this draft onto the store's timebill field set. The memo is set
    /// only when present; an absent optional field is left at the store's
    /// default.
    pub fn to_record(&self) -> NewRecord {
        let mut fields = FieldMap::new();
        fields.insert("trandate".into(), FieldValue::Date(self.trandate));
        fields.insert("customer".into(), FieldValue::Text(self.customer.clone()));
        fields.insert(
            "casetaskevent".into(),
            FieldValue::Text(self.casetaskevent.clone()),
        );
        fields.insert("hours".into(), FieldValue::Number(self.hours));
        if let Some(memo) = &self.memo {
            fields.insert("memo".into(), FieldValue::Text(memo.clone()));
        }
        NewRecord {
            record_type: RecordType::Timebill,
            fields,
        }
    }
}

/// A timebill read back from the store.
///
/// Fields the store did not return are `None`; the store owns the schema and
/// may hold records created outside this service.
#[derive(Debug, Clone, Serialize)]
pub struct Timebill {
    pub id: RecordId,
    pub trandate: Option<NaiveDate>,
    pub customer: Option<String>,
    pub casetaskevent: Option<String>,
    pub hours: Option<f64>,
    pub memo: Option<String>,
}

impl Timebill {
    /// Project a raw stored record onto the timebill shape.
    pub fn from_record(record: &StoredRecord) -> Self {
        let field = |name: &str| record.fields.get(name);
        Self {
            id: record.id,
            trandate: field("trandate").and_then(FieldValue::as_date),
            customer: field("customer").and_then(|v| v.as_text().map(str::to_string)),
            casetaskevent: field("casetaskevent").and_then(|v| v.as_text().map(str::to_string)),
            hours: field("hours").and_then(FieldValue::as_number),
            memo: field("memo").and_then(|v| v.as_text().map(str::to_string)),
        }
    }
}

/// Validate a batch of timebill inputs, collecting every violation across
/// the whole batch before returning.
///
/// Rules: `trandate` must parse as a date, `customer`, `casetaskevent`, and
/// `hours` must be non-blank, and `hours` must be numeric. `memo` is
/// optional. The combined message is logged at debug level before the error
/// is returned.
pub fn validate_timebills(inputs: &[TimebillInput]) -> Result<Vec<TimebillDraft>, CoreError> {
    let mut violations = ViolationList::new();
    let mut drafts = Vec::with_capacity(inputs.len());

    for (idx, input) in inputs.iter().enumerate() {
        let found_before = violations.len();

        let raw_date = input.trandate.as_deref().unwrap_or("");
        let trandate = dates::parse_input_date(raw_date);
        if trandate.is_none() {
            violations.push(
                idx,
                "trandate",
                format!("Invalid date: '{raw_date}' (must be a calendar date)"),
            );
        }

        violations.require_non_blank(idx, "customer", input.customer.as_deref(), "Customer entry");
        violations.require_non_blank(
            idx,
            "casetaskevent",
            input.casetaskevent.as_deref(),
            "Case/task/event entry",
        );

        let hours = match &input.hours {
            None => {
                violations.push(idx, "hours", "Hours cannot be blank.");
                None
            }
            Some(raw) if raw.is_blank() => {
                violations.push(idx, "hours", "Hours cannot be blank.");
                None
            }
            Some(raw) => match raw.as_f64() {
                Some(hours) => Some(hours),
                None => {
                    violations.push(idx, "hours", format!("Hours must be a number, got '{raw}'."));
                    None
                }
            },
        };

        if violations.len() == found_before {
            if let (Some(trandate), Some(hours)) = (trandate, hours) {
                drafts.push(TimebillDraft {
                    trandate,
                    customer: input.customer.clone().unwrap_or_default(),
                    casetaskevent: input.casetaskevent.clone().unwrap_or_default(),
                    hours,
                    memo: input.memo.clone().filter(|memo| !memo.trim().is_empty()),
                });
            }
        }
    }

    if violations.is_empty() {
        Ok(drafts)
    } else {
        tracing::debug!(message = %violations, "timebill validation failed");
        Err(CoreError::Validation(violations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> TimebillInput {
        TimebillInput {
            trandate: Some("2024-01-05".into()),
            customer: Some("Acme".into()),
            casetaskevent: Some("t1".into()),
            hours: Some(Scalar::Number(3.0)),
            memo: Some("x".into()),
        }
    }

    #[test]
    fn valid_batch_yields_one_draft_per_input() {
        let drafts = validate_timebills(&[valid_input(), valid_input()]).unwrap();
        assert_eq!(drafts.len(), 2);
        assert_eq!(drafts[0].customer, "Acme");
        assert_eq!(drafts[0].hours, 3.0);
        assert_eq!(
            drafts[0].trandate,
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
        );
    }

    #[test]
    fn collects_every_violation_across_the_batch() {
        let first = TimebillInput {
            customer: Some("".into()),
            ..valid_input()
        };
        let second = TimebillInput {
            hours: Some(Scalar::Text("".into())),
            ..valid_input()
        };

        let err = validate_timebills(&[first, second]).unwrap_err();
        let CoreError::Validation(violations) = err else {
            panic!("expected validation error");
        };
        assert_eq!(violations.len(), 2);
        let message = violations.to_string();
        assert!(message.contains("Customer entry cannot be blank."));
        assert!(message.contains("Hours cannot be blank."));
        assert_eq!(violations.as_slice()[1].record, 1);
    }

    #[test]
    fn all_blank_record_reports_invalid_date_and_blanks() {
        let input = TimebillInput {
            trandate: Some("not-a-date".into()),
            customer: Some("".into()),
            casetaskevent: Some("".into()),
            hours: Some(Scalar::Text("".into())),
            memo: Some("".into()),
        };

        let err = validate_timebills(&[input]).unwrap_err();
        let CoreError::Validation(violations) = err else {
            panic!("expected validation error");
        };
        let message = violations.to_string();
        assert!(message.contains("Invalid date"));
        assert!(message.contains("'not-a-date'"));
        assert!(message.contains("Customer entry cannot be blank."));
        assert!(message.contains("Case/task/event entry cannot be blank."));
        assert!(message.contains("Hours cannot be blank."));
    }

    #[test]
    fn missing_trandate_is_an_invalid_date() {
        let input = TimebillInput {
            trandate: None,
            ..valid_input()
        };
        let err = validate_timebills(&[input]).unwrap_err();
        assert!(err.to_string().contains("Invalid date"));
    }

    #[test]
    fn non_numeric_hours_is_a_violation() {
        let input = TimebillInput {
            hours: Some(Scalar::Text("three".into())),
            ..valid_input()
        };
        let err = validate_timebills(&[input]).unwrap_err();
        assert!(err.to_string().contains("Hours must be a number"));
    }

    #[test]
    fn hours_accepted_as_decimal_string() {
        let input = TimebillInput {
            hours: Some(Scalar::Text("3.5".into())),
            ..valid_input()
        };
        let drafts = validate_timebills(&[input]).unwrap();
        assert_eq!(drafts[0].hours, 3.5);
    }

    #[test]
    fn draft_maps_to_the_timebill_field_set() {
        let drafts = validate_timebills(&[valid_input()]).unwrap();
        let record = drafts[0].to_record();

        assert_eq!(record.record_type, RecordType::Timebill);
        assert_eq!(
            record.fields.get("trandate"),
            Some(&FieldValue::Date(
                NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
            ))
        );
        assert_eq!(
            record.fields.get("customer"),
            Some(&FieldValue::Text("Acme".into()))
        );
        assert_eq!(
            record.fields.get("casetaskevent"),
            Some(&FieldValue::Text("t1".into()))
        );
        assert_eq!(record.fields.get("hours"), Some(&FieldValue::Number(3.0)));
        assert_eq!(record.fields.get("memo"), Some(&FieldValue::Text("x".into())));
    }

    #[test]
    fn absent_memo_is_not_mapped() {
        let input = TimebillInput {
            memo: None,
            ..valid_input()
        };
        let drafts = validate_timebills(&[input]).unwrap();
        assert!(!drafts[0].to_record().fields.contains_key("memo"));
    }

    #[test]
    fn round_trips_through_a_stored_record() {
        let drafts = validate_timebills(&[valid_input()]).unwrap();
        let record = drafts[0].to_record();
        let stored = StoredRecord {
            id: 42,
            record_type: record.record_type,
            fields: record.fields,
        };

        let timebill = Timebill::from_record(&stored);
        assert_eq!(timebill.id, 42);
        assert_eq!(timebill.trandate, NaiveDate::from_ymd_opt(2024, 1, 5));
        assert_eq!(timebill.customer.as_deref(), Some("Acme"));
        assert_eq!(timebill.hours, Some(3.0));
    }
}
