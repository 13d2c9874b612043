//! In-memory record store used by tests and local development.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use tokio::sync::RwLock;

use suitebridge_core::record::{EqualsFilter, FieldMap, NewRecord, RecordType, StoredRecord};
use suitebridge_core::types::RecordId;

use crate::{RecordStore, StoreError};

/// Definition backing a saved-search id: the record type it covers and an
/// optional pre-configured filter. Stands in for the platform-side search
/// configuration the numeric ids normally refer to.
#[derive(Debug, Clone)]
pub struct SavedSearchDef {
    pub record_type: RecordType,
    pub filter: Option<EqualsFilter>,
}

#[derive(Default)]
struct Tables {
    next_id: RecordId,
    records: HashMap<RecordType, BTreeMap<RecordId, FieldMap>>,
    saved_searches: HashMap<u32, SavedSearchDef>,
}

/// Records live in per-type ordered tables; identifiers are assigned
/// sequentially across all types, like a store-wide internal id.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a saved-search definition under a numeric id.
    pub async fn register_saved_search(&self, search_id: u32, def: SavedSearchDef) {
        self.inner.write().await.saved_searches.insert(search_id, def);
    }

    /// Number of records of the given type currently held.
    pub async fn count(&self, record_type: RecordType) -> usize {
        self.inner
            .read()
            .await
            .records
            .get(&record_type)
            .map_or(0, BTreeMap::len)
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn create(&self, record: &NewRecord) -> Result<RecordId, StoreError> {
        let mut tables = self.inner.write().await;
        tables.next_id += 1;
        let id = tables.next_id;
        tables
            .records
            .entry(record.record_type)
            .or_default()
            .insert(id, record.fields.clone());
        Ok(id)
    }

    async fn search(
        &self,
        record_type: RecordType,
        filter: Option<&EqualsFilter>,
    ) -> Result<Vec<StoredRecord>, StoreError> {
        let tables = self.inner.read().await;
        let hits = tables
            .records
            .get(&record_type)
            .into_iter()
            .flatten()
            .filter(|(_, fields)| filter.is_none_or(|filter| filter.matches(fields)))
            .map(|(&id, fields)| StoredRecord {
                id,
                record_type,
                fields: fields.clone(),
            })
            .collect();
        Ok(hits)
    }

    async fn delete_by_id(
        &self,
        record_type: RecordType,
        id: RecordId,
    ) -> Result<bool, StoreError> {
        let mut tables = self.inner.write().await;
        let removed = tables
            .records
            .get_mut(&record_type)
            .is_some_and(|table| table.remove(&id).is_some());
        Ok(removed)
    }

    async fn delete_by_filter(
        &self,
        record_type: RecordType,
        filter: &EqualsFilter,
    ) -> Result<u64, StoreError> {
        let mut tables = self.inner.write().await;
        let Some(table) = tables.records.get_mut(&record_type) else {
            return Ok(0);
        };
        let doomed: Vec<RecordId> = table
            .iter()
            .filter(|(_, fields)| filter.matches(fields))
            .map(|(&id, _)| id)
            .collect();
        for id in &doomed {
            table.remove(id);
        }
        Ok(doomed.len() as u64)
    }

    async fn saved_search(&self, search_id: u32) -> Result<Vec<StoredRecord>, StoreError> {
        let def = {
            let tables = self.inner.read().await;
            tables
                .saved_searches
                .get(&search_id)
                .cloned()
                .ok_or(StoreError::UnknownSavedSearch(search_id))?
        };
        self.search(def.record_type, def.filter.as_ref()).await
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
