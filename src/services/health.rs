//! Health reporting for the console and its backend

use std::time::Instant;

use chrono::Utc;
use serde::Serialize;
use tracing::warn;

use super::api::ApiClient;
use crate::utils::errors::ApiError;
use crate::utils::helpers::format_timestamp;

/// Body of the `/api/health` response
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum HealthReport {
    Healthy {
        status: &'static str,
        timestamp: String,
        uptime: f64,
        environment: String,
        api: &'static str,
    },
    Unhealthy {
        status: &'static str,
        timestamp: String,
        error: String,
        api: &'static str,
    },
}

impl HealthReport {
    pub fn healthy(uptime: f64, environment: &str) -> Self {
        HealthReport::Healthy {
            status: "healthy",
            timestamp: format_timestamp(Utc::now()),
            uptime,
            environment: environment.to_string(),
            api: "connected",
        }
    }

    pub fn unhealthy(error: impl Into<String>) -> Self {
        HealthReport::Unhealthy {
            status: "unhealthy",
            timestamp: format_timestamp(Utc::now()),
            error: error.into(),
            api: "disconnected",
        }
    }

    pub fn is_healthy(&self) -> bool {
        matches!(self, HealthReport::Healthy { .. })
    }
}

/// Probe the backend and build the health report
pub async fn check_health(api: &ApiClient, started_at: Instant, environment: &str) -> HealthReport {
    match api.ping().await {
        Ok(_) => HealthReport::healthy(started_at.elapsed().as_secs_f64(), environment),
        Err(error) => {
            warn!(error = %error, "Health check failed");
            let message = match error {
                ApiError::Status { .. } => "API недоступен".to_string(),
                other => other.to_string(),
            };
            HealthReport::unhealthy(message)
        }
    }
}
