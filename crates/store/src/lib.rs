//! Record store abstraction over the external ERP platform.
//!
//! The service never talks to the platform directly; every persistence
//! primitive goes through [`RecordStore`], so endpoint logic runs unchanged
//! against the in-memory double in tests and local development, and against
//! the NetSuite RESTlet backend in production.

pub mod memory;
pub mod netsuite;

use async_trait::async_trait;
use suitebridge_core::record::{EqualsFilter, NewRecord, RecordType, StoredRecord};
use suitebridge_core::types::RecordId;

pub use memory::{MemoryStore, SavedSearchDef};
pub use netsuite::{NetsuiteStore, NlAuthCredential};

/// Errors surfaced by a record store backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backend rejected the submitted operation.
    #[error("record store rejected the operation: {0}")]
    Rejected(String),

    /// No saved search is configured under the given id. Saved searches are
    /// platform-side configuration referenced only by number.
    #[error("unknown saved search id {0}")]
    UnknownSavedSearch(u32),

    /// Transport-level failure reaching the backend.
    #[error("store transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with something the client could not interpret.
    #[error("unexpected store response: {0}")]
    BadResponse(String),
}

/// The persistence primitives the endpoints need, mirroring the platform's
/// record API: create, filtered search, delete by id, delete by filter, and
/// saved-search execution. Identifier assignment is owned by the store.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Persist a new record, returning the identifier the store assigned.
    async fn create(&self, record: &NewRecord) -> Result<RecordId, StoreError>;

    /// Return records of the given type matching the filter, or every record
    /// of that type when no filter is given.
    async fn search(
        &self,
        record_type: RecordType,
        filter: Option<&EqualsFilter>,
    ) -> Result<Vec<StoredRecord>, StoreError>;

    /// Delete a single record. Returns `false` when no such record exists.
    async fn delete_by_id(&self, record_type: RecordType, id: RecordId)
        -> Result<bool, StoreError>;

    /// Delete every record of the given type matching the filter, returning
    /// the number removed.
    async fn delete_by_filter(
        &self,
        record_type: RecordType,
        filter: &EqualsFilter,
    ) -> Result<u64, StoreError>;

    /// Execute a pre-configured saved search by numeric id and return its raw
    /// results.
    async fn saved_search(&self, search_id: u32) -> Result<Vec<StoredRecord>, StoreError>;

    /// Cheap reachability probe for health reporting.
    async fn ping(&self) -> Result<(), StoreError>;
}
