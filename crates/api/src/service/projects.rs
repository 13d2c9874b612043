//! Projects lookup, backed by a pre-configured saved search.

use suitebridge_core::record::StoredRecord;
use suitebridge_store::RecordStore;

use crate::error::AppError;

/// Run the projects saved search and return its raw result records. The
/// search definition itself lives in the store platform; this side only
/// holds the numeric id.
pub async fn list_projects(
    store: &dyn RecordStore,
    search_id: u32,
) -> Result<Vec<StoredRecord>, AppError> {
    let projects = store.saved_search(search_id).await?;
    tracing::debug!(search_id, count = projects.len(), "projects lookup");
    Ok(projects)
}
