//! End-to-end tests of the HTTP contract against the in-memory store.

mod common;

use axum::http::StatusCode;
use common::{agent_payload, TestApp};
use job_board_core::kernel::test_dependencies::{FlakyJobStore, SpyJobStore};
use serde_json::{json, Value};
use std::sync::Arc;

fn ids(list: &Value) -> Vec<String> {
    list.as_array()
        .expect("array body")
        .iter()
        .map(|job| job["_id"].as_str().expect("string id").to_string())
        .collect()
}

#[tokio::test]
async fn create_returns_posting_with_generated_fields() {
    let app = TestApp::new();

    let (status, body) = app.post_json("/create/job", &agent_payload()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Agent");
    assert_eq!(body["location"], "Pune");
    assert_eq!(body["fixedSalary"], "5L");
    assert_eq!(body["employmentType"], "full-time");
    assert_eq!(body["experienceRequired"], "2 years");
    assert_eq!(body["languageRequirements"], json!(["English"]));
    assert_eq!(body["description"], "<p>Great role</p>");
    assert!(body["_id"].as_str().is_some_and(|id| !id.is_empty()));
    assert!(body["createdAt"].as_str().is_some());
    assert!(body["updatedAt"].as_str().is_some());
    assert!(body["jobRoleType"].is_null());
    assert!(body["educationalQualification"].is_null());
    assert!(body["requiredSkills"].is_null());
    assert!(body["propertyTypes"].is_null());
}

#[tokio::test]
async fn empty_language_requirements_are_rejected_without_a_write() {
    let store = Arc::new(SpyJobStore::new());
    let app = TestApp::with_store(store.clone());
    let mut payload = agent_payload();
    payload["languageRequirements"] = json!([]);

    let (status, body) = app.post_json("/create/job", &payload).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "validation_error");
    assert_eq!(body["fields"][0]["field"], "languageRequirements");
    assert_eq!(store.insert_calls(), 0);

    let (_, list) = app.get("/jobs").await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn missing_required_fields_are_enumerated() {
    let app = TestApp::new();

    let (status, body) = app.post_json("/create/job", &json!({})).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let fields: Vec<&str> = body["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["field"].as_str().unwrap())
        .collect();
    assert_eq!(
        fields,
        vec![
            "title",
            "location",
            "fixedSalary",
            "employmentType",
            "experienceRequired",
            "languageRequirements",
            "description"
        ]
    );
}

#[tokio::test]
async fn malformed_json_is_a_client_error() {
    let app = TestApp::new();

    let (status, body) = app.post_raw("/create/job", "{\"title\": ").await;

    assert!(status.is_client_error());
    assert_eq!(body["error"], "invalid_body");
}

#[tokio::test]
async fn wrongly_typed_field_is_a_client_error() {
    let app = TestApp::new();
    let mut payload = agent_payload();
    payload["languageRequirements"] = json!("English");

    let (status, body) = app.post_json("/create/job", &payload).await;

    assert!(status.is_client_error());
    assert_eq!(body["error"], "invalid_body");
}

#[tokio::test]
async fn listing_returns_newest_first() {
    let app = TestApp::new();
    let mut a = agent_payload();
    a["title"] = json!("A");
    let mut b = agent_payload();
    b["title"] = json!("B");

    let (_, created_a) = app.post_json("/create/job", &a).await;
    let (_, created_b) = app.post_json("/create/job", &b).await;

    let (status, list) = app.get("/jobs").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([created_b, created_a]));
}

#[tokio::test]
async fn delete_then_repeat_delete() {
    let app = TestApp::new();
    let mut a = agent_payload();
    a["title"] = json!("A");
    let mut b = agent_payload();
    b["title"] = json!("B");
    let (_, created_a) = app.post_json("/create/job", &a).await;
    let (_, created_b) = app.post_json("/create/job", &b).await;
    let b_id = created_b["_id"].as_str().unwrap().to_string();

    let (status, body) = app.delete(&format!("/jobs/{}", b_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true}));

    let (_, list) = app.get("/jobs").await;
    assert_eq!(ids(&list), vec![created_a["_id"].as_str().unwrap().to_string()]);

    let (status, body) = app.delete(&format!("/jobs/{}", b_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true}));

    let (_, list_again) = app.get("/jobs").await;
    assert_eq!(list_again, list);
}

#[tokio::test]
async fn delete_of_unknown_or_malformed_id_succeeds() {
    let app = TestApp::new();

    let (status, body) = app.delete("/jobs/65f1c0ffee0000000000abcd").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true}));

    let (status, body) = app
        .delete("/jobs/0190a4b2-7c1e-7000-8000-000000000000")
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true}));
}

#[tokio::test]
async fn storage_outage_surfaces_as_service_unavailable() {
    let store = Arc::new(FlakyJobStore::offline());
    let app = TestApp::with_store(store.clone());

    let (status, body) = app.get("/jobs").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "storage_error");

    let (status, _) = app.post_json("/create/job", &agent_payload()).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    store.set_offline(false);
    let (status, _) = app.get("/jobs").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn health_reflects_connection_state() {
    let app = TestApp::new();

    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "healthy", "storage": "connected"}));

    app.kernel.connection.report_fault();
    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["storage"], "degraded");

    app.kernel.shutdown().await;
    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["storage"], "disconnected");
}
