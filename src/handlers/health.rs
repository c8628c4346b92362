//! Health endpoint handler

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::AppState;
use crate::services::{check_health, HealthReport};

/// `GET /api/health`: 200 when the backend answers, 503 otherwise
pub async fn check(State(state): State<AppState>) -> (StatusCode, Json<HealthReport>) {
    let report = check_health(&state.api, state.started_at, &state.settings.app.environment).await;
    let status = if report.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(report))
}
