//! Integration tests for the achievements API client against a mock backend

mod helpers;

use std::time::Duration;

use assert_matches::assert_matches;
use serde_json::json;
use tokio_test::{assert_err, assert_ok};

use achievements_admin::models::{ProgressStatus, RecordId};
use achievements_admin::services::check_health;
use achievements_admin::ApiError;
use helpers::*;

#[tokio::test]
async fn test_list_decodes_records() {
    let backend = BackendMockServer::new().await;
    backend
        .mock_get(
            "/categories",
            json!([category_json(1, "beginner", "Новичок"), {"id": "2", "name": "Старый"}]),
        )
        .await;

    let client = backend.client();
    let categories = assert_ok!(client.categories().list().await);

    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].key, "beginner");
    assert_eq!(categories[1].id, RecordId::new("2"));
    assert_eq!(categories[1].name.get(achievements_admin::Language::Ru), "Старый");
}

#[tokio::test]
async fn test_error_status_is_classified() {
    let backend = BackendMockServer::new().await;
    backend
        .mock_json("GET", "/rewards", 500, json!({"message": "boom"}))
        .await;
    backend.mock_status("GET", "/achievements", 404).await;

    let client = backend.client();

    let error = assert_err!(client.rewards().list().await);
    assert_matches!(error, ApiError::Status { status: 500, ref body, .. } if body.contains("boom"));
    assert_eq!(error.kind(), "http_status");

    let error = assert_err!(client.achievements().list().await);
    assert_eq!(error.status(), Some(404));
}

#[tokio::test]
async fn test_slow_backend_times_out() {
    let backend = BackendMockServer::new().await;
    backend
        .mock_slow_get("/categories", Duration::from_secs(4))
        .await;

    let error = assert_err!(backend.client().categories().list().await);
    assert_matches!(error, ApiError::Timeout { ref method, .. } if method == "GET");
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    let backend = BackendMockServer::new().await;
    let mut config = backend.api_config();
    // Nothing listens on the discard port
    config.base_url = "http://127.0.0.1:9".to_string();
    let client = achievements_admin::ApiClient::new(&config).unwrap();

    let error = assert_err!(client.categories().list().await);
    assert_matches!(error, ApiError::Network { .. });
}

#[tokio::test]
async fn test_malformed_body_is_invalid_response() {
    let backend = BackendMockServer::new().await;
    backend.mock_json("GET", "/progress", 200, json!({"not": "a list"})).await;

    let error = assert_err!(backend.client().progress().list().await);
    assert_matches!(error, ApiError::InvalidResponse { .. });
}

#[tokio::test]
async fn test_delete_accepts_empty_body() {
    let backend = BackendMockServer::new().await;
    backend.mock_status("DELETE", "/rewards/7", 204).await;

    let client = backend.client();
    assert_ok!(client.rewards().delete(&RecordId::new("7")).await);
    assert_eq!(backend.count("DELETE", "/rewards/7").await, 1);
}

#[tokio::test]
async fn test_progress_by_user_path() {
    let backend = BackendMockServer::new().await;
    backend
        .mock_get(
            "/progress/user/12345",
            json!([progress_json(1, 12345, "a1", "FINISHED")]),
        )
        .await;

    let client = backend.client();
    let records = assert_ok!(client.progress().by_user(&RecordId::new("12345")).await);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].progress, ProgressStatus::Finished);
    assert_eq!(records[0].user_id, Some(RecordId::new("12345")));
    assert_eq!(backend.request_log().await, vec!["GET /progress/user/12345"]);
}

#[tokio::test]
async fn test_stats_endpoint() {
    let backend = BackendMockServer::new().await;
    backend.mock_get("/api/stats", stats_json()).await;

    let stats = assert_ok!(backend.client().stats().await);
    assert_eq!(stats.achievements, 12);
    assert_eq!(stats.progress_stats.in_progress, 20);
    assert_eq!(stats.reward_stats.applicable, 6);
}

#[tokio::test]
async fn test_health_check_reports_backend_state() {
    let backend = BackendMockServer::new().await;
    backend.mock_json("GET", "/", 200, json!({"ok": true})).await;

    let client = backend.client();
    let report = check_health(&client, std::time::Instant::now(), "test").await;
    assert!(report.is_healthy());

    let down = BackendMockServer::new().await;
    down.mock_status("GET", "/", 503).await;

    let report = check_health(&down.client(), std::time::Instant::now(), "test").await;
    assert!(!report.is_healthy());
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["error"], "API недоступен");
}
