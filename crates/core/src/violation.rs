//! Structured validation violations accumulated across a batch.
//!
//! Validators never stop at the first problem: they walk the whole batch and
//! collect one violation per offending field per record, so a client gets
//! every problem in a single response.

use std::fmt;

use serde::Serialize;

/// One field-level violation on one record of a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Zero-based position of the offending record in the batch.
    pub record: usize,
    /// Input field the violation applies to.
    pub field: &'static str,
    pub message: String,
}

/// Every violation found in a batch, in encounter order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ViolationList(Vec<Violation>);

impl ViolationList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: usize, field: &'static str, message: impl Into<String>) {
        self.0.push(Violation {
            record,
            field,
            message: message.into(),
        });
    }

    /// Record a violation when `value` is missing or blank after trimming.
    /// `label` is the human-facing field name used in the message.
    pub fn require_non_blank(
        &mut self,
        record: usize,
        field: &'static str,
        value: Option<&str>,
        label: &str,
    ) {
        if value.map(str::trim).is_none_or(str::is_empty) {
            self.push(record, field, format!("{label} cannot be blank."));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[Violation] {
        &self.0
    }
}

/// One message line per violation, in encounter order.
impl fmt::Display for ViolationList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = self.0.iter();
        if let Some(first) = lines.next() {
            f.write_str(&first.message)?;
            for violation in lines {
                write!(f, "\n{}", violation.message)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_non_blank_accepts_real_text() {
        let mut violations = ViolationList::new();
        violations.require_non_blank(0, "customer", Some("Acme"), "Customer entry");
        assert!(violations.is_empty());
    }

    #[test]
    fn require_non_blank_flags_missing_and_whitespace() {
        let mut violations = ViolationList::new();
        violations.require_non_blank(0, "customer", None, "Customer entry");
        violations.require_non_blank(1, "customer", Some("   "), "Customer entry");

        assert_eq!(violations.len(), 2);
        assert_eq!(
            violations.as_slice()[0].message,
            "Customer entry cannot be blank."
        );
        assert_eq!(violations.as_slice()[1].record, 1);
    }

    #[test]
    fn display_is_one_line_per_violation() {
        let mut violations = ViolationList::new();
        violations.push(0, "customer", "Customer entry cannot be blank.");
        violations.push(0, "hours", "Hours cannot be blank.");

        assert_eq!(
            violations.to_string(),
            "Customer entry cannot be blank.\nHours cannot be blank."
        );
    }
}
