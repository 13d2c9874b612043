//! Timebill operations: batch create, lookup, delete by id, delete by date.

use chrono::NaiveDate;
use serde::Deserialize;

use suitebridge_core::dates;
use suitebridge_core::error::CoreError;
use suitebridge_core::record::{EqualsFilter, FieldValue, RecordType};
use suitebridge_core::timebill::{validate_timebills, Timebill, TimebillInput};
use suitebridge_core::types::RecordId;
use suitebridge_store::RecordStore;

use crate::error::AppError;

/// Batch create request body: `{"timebill": [...]}`.
#[derive(Debug, Deserialize)]
pub struct CreateTimebillsRequest {
    #[serde(default)]
    pub timebill: Vec<TimebillInput>,
}

/// Validate the batch, then create one timebill per entry, strictly in
/// order.
///
/// All violations across the batch are reported before any create is issued;
/// a store fault partway through surfaces the ids already committed via
/// [`AppError::BatchInterrupted`] so the caller can reconcile.
pub async fn create_timebills(
    store: &dyn RecordStore,
    request: CreateTimebillsRequest,
) -> Result<Vec<RecordId>, AppError> {
    if request.timebill.is_empty() {
        return Err(AppError::BadRequest(
            "timebill batch cannot be empty".into(),
        ));
    }

    let drafts = validate_timebills(&request.timebill)?;

    let mut created = Vec::with_capacity(drafts.len());
    for (idx, draft) in drafts.iter().enumerate() {
        match store.create(&draft.to_record()).await {
            Ok(id) => {
                tracing::info!(id, "timebill created");
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

/// Look up timebills, optionally restricted to a single transaction date.
pub async fn get_timebills(
    store: &dyn RecordStore,
    date: Option<&str>,
) -> Result<Vec<Timebill>, AppError> {
    let filter = date.map(parse_date_filter).transpose()?;
    let records = store
        .search(RecordType::Timebill, filter.as_ref())
        .await?;
    Ok(records.iter().map(Timebill::from_record).collect())
}

/// Delete a single timebill. Missing records surface as not-found.
pub async fn delete_timebill(store: &dyn RecordStore, id: RecordId) -> Result<(), AppError> {
    let deleted = store.delete_by_id(RecordType::Timebill, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Timebill",
            id,
        }));
    }
    tracing::info!(id, "timebill deleted");
    Ok(())
}

/// Bulk delete request: every timebill whose transaction date equals one of
/// the given dates is removed.
#[derive(Debug, Deserialize)]
pub struct DeleteByDateRequest {
    #[serde(default)]
    pub dates: Vec<String>,
}

/// Delete every timebill dated on any of the given dates, returning the
/// total number removed.
///
/// This is destructive and unscoped by design, so the whole request is
/// refused up front when the date list is empty or any date fails to parse,
/// and the removed count is always reported back.
pub async fn delete_timebills_by_date(
    store: &dyn RecordStore,
    request: DeleteByDateRequest,
) -> Result<u64, AppError> {
    if request.dates.is_empty() {
        return Err(AppError::BadRequest("dates cannot be empty".into()));
    }

    let mut parsed: Vec<NaiveDate> = Vec::with_capacity(request.dates.len());
    for raw in &request.dates {
        let date = dates::parse_input_date(raw)
            .ok_or_else(|| AppError::BadRequest(format!("Invalid date: '{raw}'")))?;
        parsed.push(date);
    }

    let mut total = 0;
    for date in parsed {
        let filter = EqualsFilter::new("trandate", FieldValue::Date(date));
        let deleted = store
            .delete_by_filter(RecordType::Timebill, &filter)
            .await?;
        tracing::info!(%date, deleted, "timebills deleted by date");
        total += deleted;
    }
    Ok(total)
}

fn parse_date_filter(raw: &str) -> Result<EqualsFilter, AppError> {
    let date = dates::parse_input_date(raw)
        .ok_or_else(|| AppError::BadRequest(format!("Invalid date: '{raw}'")))?;
    Ok(EqualsFilter::new("trandate", FieldValue::Date(date)))
}
