//! Success-envelope types shared by the API handlers.
//!
//! Every success response carries `status: "success"` plus the
//! operation-specific payload. Failure envelopes are produced by
//! [`crate::error::AppError`].

use serde::Serialize;

use suitebridge_core::record::StoredRecord;
use suitebridge_core::timebill::Timebill;
use suitebridge_core::types::RecordId;

/// Reply to a batch create: the identifier of every record created, in
/// batch order.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub status: &'static str,
    pub ids: Vec<RecordId>,
}

impl CreatedResponse {
    pub fn new(ids: Vec<RecordId>) -> Self {
        Self {
            status: "success",
            ids,
        }
    }
}

/// Reply to a timebill lookup.
#[derive(Debug, Serialize)]
pub struct TimebillsResponse {
    pub status: &'static str,
    pub timebills: Vec<Timebill>,
}

impl TimebillsResponse {
    pub fn new(timebills: Vec<Timebill>) -> Self {
        Self {
            status: "success",
            timebills,
        }
    }
}

/// Reply to a delete: how many records were removed.
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub status: &'static str,
    pub deleted: u64,
}

impl DeletedResponse {
    pub fn new(deleted: u64) -> Self {
        Self {
            status: "success",
            deleted,
        }
    }
}

/// Reply to the projects saved-search lookup: raw store records.
#[derive(Debug, Serialize)]
pub struct ProjectsResponse {
    pub status: &'static str,
    pub projects: Vec<StoredRecord>,
}

impl ProjectsResponse {
    pub fn new(projects: Vec<StoredRecord>) -> Self {
        Self {
            status: "success",
            projects,
        }
    }
}
