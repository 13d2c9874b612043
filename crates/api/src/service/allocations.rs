//! Resource allocation operations: batch create only (allocations have no
//! update or delete path).

use serde::Deserialize;

use suitebridge_core::allocation::{validate_allocations, AllocationInput};
use suitebridge_core::types::RecordId;
use suitebridge_store::RecordStore;

use crate::error::AppError;

/// Create request body: either a single allocation object or
/// `{"allocations": [...]}`. The batch form is tried first; a bare object
/// falls through to the single form.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CreateAllocationsRequest {
    Batch { allocations: Vec<AllocationInput> },
    Single(AllocationInput),
}

impl CreateAllocationsRequest {
    pub fn into_batch(self) -> Vec<AllocationInput> {
        match self {
            CreateAllocationsRequest::Batch { allocations } => allocations,
            CreateAllocationsRequest::Single(allocation) => vec![allocation],
        }
    }
}

/// Validate the batch, then create one allocation per entry, strictly in
/// order. Same contract as timebill creation: all violations reported before
/// any create, partial-batch accounting on a store fault.
pub async fn create_allocations(
    store: &dyn RecordStore,
    request: CreateAllocationsRequest,
) -> Result<Vec<RecordId>, AppError> {
    let inputs = request.into_batch();
    if inputs.is_empty() {
        return Err(AppError::BadRequest(
            "allocations batch cannot be empty".into(),
        ));
    }

    let drafts = validate_allocations(&inputs)?;

    let mut created = Vec::with_capacity(drafts.len());
    for (idx, draft) in drafts.iter().enumerate() {
        match store.create(&draft.to_record()).await {
            Ok(id) => {
                tracing::info!(id, "resource allocation created");
                created.push(id);
            }
            Err(source) => {
                return Err(AppError::BatchInterrupted {
                    created,
                    failed_index: idx,
                    source,
                });
            }
        }
    }
    Ok(created)
}
