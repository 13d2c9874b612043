//! NetSuite RESTlet-backed record store.
//!
//! Talks to a companion RESTlet deployment over HTTPS using NLAuth header
//! authentication. The RESTlet accepts a small operation envelope and runs
//! the corresponding record API call on the platform side; this client only
//! shuttles the envelope and interprets the status in the reply.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use suitebridge_core::record::{EqualsFilter, NewRecord, RecordType, StoredRecord};
use suitebridge_core::types::RecordId;

use crate::{RecordStore, StoreError};

/// Production REST root.
pub const PRODUCTION_ROOT: &str = "https://rest.netsuite.com";

/// Sandbox REST root.
pub const SANDBOX_ROOT: &str = "https://rest.sandbox.netsuite.com";

/// NLAuth credential set for RESTlet calls.
#[derive(Debug, Clone)]
pub struct NlAuthCredential {
    pub account: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

impl NlAuthCredential {
    /// Render the `Authorization` header value.
    pub fn header_value(&self) -> String {
        format!(
            "NLAuth nlauth_account={}, nlauth_email={}, nlauth_signature={}, nlauth_role={}",
            self.account, self.email, self.password, self.role
        )
    }
}

pub struct NetsuiteStore {
    client: Client,
    restlet_url: String,
    credential: NlAuthCredential,
}

impl NetsuiteStore {
    /// `root` is one of [`PRODUCTION_ROOT`] / [`SANDBOX_ROOT`]; `script` and
    /// `deploy` identify the companion RESTlet deployment.
    pub fn new(root: &str, script: u32, deploy: u32, credential: NlAuthCredential) -> Self {
        let restlet_url =
            format!("{root}/app/site/hosting/restlet.nl?script={script}&deploy={deploy}");
        Self {
            client: Client::new(),
            restlet_url,
            credential,
        }
    }

    async fn call(&self, op: &OpRequest<'_>) -> Result<OpResponse, StoreError> {
        tracing::debug!(url = %self.restlet_url, "restlet call");
        let response = self
            .client
            .post(&self.restlet_url)
            .header(AUTHORIZATION, self.credential.header_value())
            .header(CONTENT_TYPE, "application/json")
            .json(op)
            .send()
            .await?
            .error_for_status()?;

        let body: OpResponse = response.json().await?;
        if body.status == "failure" {
            return Err(StoreError::Rejected(
                body.message.unwrap_or_else(|| "no message".into()),
            ));
        }
        Ok(body)
    }
}

/// Operation envelope sent to the RESTlet.
#[derive(Debug, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
enum OpRequest<'a> {
    Create {
        record: &'a NewRecord,
    },
    Search {
        record_type: RecordType,
        #[serde(skip_serializing_if = "Option::is_none")]
        filter: Option<&'a EqualsFilter>,
    },
    DeleteById {
        record_type: RecordType,
        id: RecordId,
    },
    DeleteByFilter {
        record_type: RecordType,
        filter: &'a EqualsFilter,
    },
    SavedSearch {
        search_id: u32,
    },
    Ping,
}

/// Reply envelope. Which fields are present depends on the operation.
#[derive(Debug, Deserialize)]
struct OpResponse {
    #[serde(default)]
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    id: Option<RecordId>,
    #[serde(default)]
    records: Option<Vec<StoredRecord>>,
    #[serde(default)]
    deleted: Option<u64>,
}

#[async_trait]
impl RecordStore for NetsuiteStore {
    async fn create(&self, record: &NewRecord) -> Result<RecordId, StoreError> {
        let body = self.call(&OpRequest::Create { record }).await?;
        body.id
            .ok_or_else(|| StoreError::BadResponse("create reply carried no id".into()))
    }

    async fn search(
        &self,
        record_type: RecordType,
        filter: Option<&EqualsFilter>,
    ) -> Result<Vec<StoredRecord>, StoreError> {
        let body = self
            .call(&OpRequest::Search {
                record_type,
                filter,
            })
            .await?;
        Ok(body.records.unwrap_or_default())
    }

    async fn delete_by_id(
        &self,
        record_type: RecordType,
        id: RecordId,
    ) -> Result<bool, StoreError> {
        let body = self.call(&OpRequest::DeleteById { record_type, id }).await?;
        Ok(body.deleted.unwrap_or(0) > 0)
    }

    async fn delete_by_filter(
        &self,
        record_type: RecordType,
        filter: &EqualsFilter,
    ) -> Result<u64, StoreError> {
        let body = self
            .call(&OpRequest::DeleteByFilter {
                record_type,
                filter,
            })
            .await?;
        body.deleted
            .ok_or_else(|| StoreError::BadResponse("delete reply carried no count".into()))
    }

    async fn saved_search(&self, search_id: u32) -> Result<Vec<StoredRecord>, StoreError> {
        let body = self.call(&OpRequest::SavedSearch { search_id }).await?;
        Ok(body.records.unwrap_or_default())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.call(&OpRequest::Ping).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use suitebridge_core::record::{FieldMap, FieldValue};

    #[test]
    fn nlauth_header_has_the_expected_shape() {
        let credential = NlAuthCredential {
            account: "12345".into(),
            email: "dev@example.com".into(),
            password: "hunter2".into(),
            role: "3".into(),
        };
        assert_eq!(
            credential.header_value(),
            "NLAuth nlauth_account=12345, nlauth_email=dev@example.com, \
             nlauth_signature=hunter2, nlauth_role=3"
        );
    }

    #[test]
    fn restlet_url_includes_script_and_deploy() {
        let store = NetsuiteStore::new(
            SANDBOX_ROOT,
            522,
            1,
            NlAuthCredential {
                account: "a".into(),
                email: "e".into(),
                password: "p".into(),
                role: "r".into(),
            },
        );
        assert_eq!(
            store.restlet_url,
            "https://rest.sandbox.netsuite.com/app/site/hosting/restlet.nl?script=522&deploy=1"
        );
    }

    #[test]
    fn create_envelope_serializes_with_op_tag() {
        let mut fields = FieldMap::new();
        fields.insert("customer".into(), FieldValue::Text("Acme".into()));
        let record = NewRecord {
            record_type: RecordType::Timebill,
            fields,
        };

        let value = serde_json::to_value(OpRequest::Create { record: &record }).unwrap();
        assert_eq!(value["op"], "create");
        assert_eq!(value["record"]["record_type"], "timebill");
        assert_eq!(value["record"]["fields"]["customer"], "Acme");
    }

    #[test]
    fn search_envelope_omits_absent_filter() {
        let value = serde_json::to_value(OpRequest::Search {
            record_type: RecordType::Timebill,
            filter: None,
        })
        .unwrap();
        assert_eq!(value["op"], "search");
        assert!(value.get("filter").is_none());
    }
}
