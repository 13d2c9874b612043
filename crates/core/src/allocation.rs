//! Resource allocation inputs, batch validation, and field mapping.
//!
//! An allocation reserves a share of a resource's time for a project. The
//! store's field set for the entity is `allocationamount`,
//! `allocationresource`, `allocationtype`, `allocationunit`, `project`, plus
//! optional `startdate`, `enddate`, and `notes`. Allocations are create-only:
//! there is no update or delete path for them.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::dates;
use crate::error::CoreError;
use crate::record::{FieldMap, FieldValue, NewRecord, RecordType};
use crate::scalar::Scalar;
use crate::violation::ViolationList;

/// One allocation as submitted by a client. Identifier fields accept either
/// internal-id numbers or display text.
#[derive(Debug, Clone, Deserialize)]
pub struct AllocationInput {
    #[serde(default)]
    pub amount: Option<Scalar>,
    #[serde(default)]
    pub resource_id: Option<Scalar>,
    #[serde(default, rename = "type")]
    pub allocation_type: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub project_id: Option<Scalar>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// An allocation that has passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationDraft {
    pub amount: f64,
    pub resource_id: String,
    pub allocation_type: String,
    pub unit: String,
    pub project_id: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl AllocationDraft {
    /// Map this draft onto the store's resource allocation field set.
    /// Optional fields absent from the input are left out entirely.
    pub fn to_record(&self) -> NewRecord {
        let mut fields = FieldMap::new();
        fields.insert("allocationamount".into(), FieldValue::Number(self.amount));
        fields.insert(
            "allocationresource".into(),
            FieldValue::Text(self.resource_id.clone()),
        );
        fields.insert(
            "allocationtype".into(),
            FieldValue::Text(self.allocation_type.clone()),
        );
        fields.insert("allocationunit".into(), FieldValue::Text(self.unit.clone()));
        fields.insert("project".into(), FieldValue::Text(self.project_id.clone()));
        if let Some(start_date) = self.start_date {
            fields.insert("startdate".into(), FieldValue::Date(start_date));
        }
        if let Some(end_date) = self.end_date {
            fields.insert("enddate".into(), FieldValue::Date(end_date));
        }
        if let Some(notes) = &self.notes {
            fields.insert("notes".into(), FieldValue::Text(notes.clone()));
        }
        NewRecord {
            record_type: RecordType::ResourceAllocation,
            fields,
        }
    }
}

/// Check an optional date input. Absent or blank is fine; present but
/// unparseable is a violation.
fn optional_date(
    violations: &mut ViolationList,
    idx: usize,
    field: &'static str,
    raw: Option<&str>,
) -> Option<NaiveDate> {
    let raw = raw.map(str::trim).filter(|raw| !raw.is_empty())?;
    match dates::parse_input_date(raw) {
        Some(date) => Some(date),
        None => {
            violations.push(
                idx,
                field,
                format!("Invalid date: '{raw}' (must be a calendar date)"),
            );
            None
        }
    }
}

/// Check a required identifier-or-text field, returning its display form.
fn required_scalar(
    violations: &mut ViolationList,
    idx: usize,
    field: &'static str,
    value: Option<&Scalar>,
    label: &str,
) -> Option<String> {
    match value {
        Some(value) if !value.is_blank() => Some(value.to_string()),
        _ => {
            violations.push(idx, field, format!("{label} cannot be blank."));
            None
        }
    }
}

/// Validate a batch of allocation inputs, collecting every violation across
/// the whole batch before returning.
///
/// Rules: `amount` non-blank and numeric; `resource_id`, `type`, `unit`, and
/// `project_id` non-blank; `start_date`/`end_date` must parse when present.
/// The combined message is logged at debug level before the error is
/// returned.
pub fn validate_allocations(inputs: &[AllocationInput]) -> Result<Vec<AllocationDraft>, CoreError> {
    let mut violations = ViolationList::new();
    let mut drafts = Vec::with_capacity(inputs.len());

    for (idx, input) in inputs.iter().enumerate() {
        let found_before = violations.len();

        let amount = match &input.amount {
            Some(raw) if !raw.is_blank() => match raw.as_f64() {
                Some(amount) => Some(amount),
                None => {
                    violations.push(
                        idx,
                        "amount",
                        format!("Amount must be a number, got '{raw}'."),
                    );
                    None
                }
            },
            _ => {
                violations.push(idx, "amount", "Amount cannot be blank.");
                None
            }
        };

        let resource_id = required_scalar(
            &mut violations,
            idx,
            "resource_id",
            input.resource_id.as_ref(),
            "Resource",
        );
        violations.require_non_blank(
            idx,
            "type",
            input.allocation_type.as_deref(),
            "Allocation type",
        );
        violations.require_non_blank(idx, "unit", input.unit.as_deref(), "Allocation unit");
        let project_id = required_scalar(
            &mut violations,
            idx,
            "project_id",
            input.project_id.as_ref(),
            "Project",
        );

        let start_date = optional_date(&mut violations, idx, "start_date", input.start_date.as_deref());
        let end_date = optional_date(&mut violations, idx, "end_date", input.end_date.as_deref());

        if violations.len() == found_before {
            if let (Some(amount), Some(resource_id), Some(project_id)) =
                (amount, resource_id, project_id)
            {
                drafts.push(AllocationDraft {
                    amount,
                    resource_id,
                    allocation_type: input.allocation_type.clone().unwrap_or_default(),
                    unit: input.unit.clone().unwrap_or_default(),
                    project_id,
                    start_date,
                    end_date,
                    notes: input.notes.clone().filter(|notes| !notes.trim().is_empty()),
                });
            }
        }
    }

    if violations.is_empty() {
        Ok(drafts)
    } else {
        tracing::debug!(message = %violations, "allocation validation failed");
        Err(CoreError::Validation(violations))
    }
}
