//! HTTP-level integration tests for the `/projects` endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, build_test_app_with_store, get};
use serde_json::json;

use suitebridge_core::record::{FieldMap, FieldValue, NewRecord, RecordType};
use suitebridge_store::{RecordStore, SavedSearchDef};

async fn seed_project(store: &dyn RecordStore, name: &str) {
    let mut fields = FieldMap::new();
    fields.insert("name".into(), FieldValue::Text(name.into()));
    store
        .create(&NewRecord {
            record_type: RecordType::Project,
            fields,
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn projects_come_from_the_configured_saved_search() {
    let (app, store) = build_test_app_with_store();
    store
        .register_saved_search(
            6546,
            SavedSearchDef {
                record_type: RecordType::Project,
                filter: None,
            },
        )
        .await;
    seed_project(store.as_ref(), "Gryphon").await;
    seed_project(store.as_ref(), "Hydra").await;

    let response = get(app, "/api/v1/projects").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "success");
    let projects = body["projects"].as_array().unwrap();
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0]["fields"]["name"], json!("Gryphon"));
}

#[tokio::test]
async fn unregistered_saved_search_is_a_store_fault() {
    // Fresh store, nothing registered under the configured search id.
    let app = build_test_app();
    let response = get(app, "/api/v1/projects").await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let body = body_json(response).await;
    assert_eq!(body["status"], "failed");
}
