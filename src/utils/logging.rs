//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the admin console.

use serde_json::Value;
use tracing::{debug, error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;
use crate::utils::errors::{AdminError, ApiError, Result};

/// Initialize logging based on configuration.
///
/// The returned guard flushes the file writer on drop and must be kept
/// alive for the lifetime of the process.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_new(&config.level)
        .map_err(|e| AdminError::Config(format!("Invalid log filter '{}': {}", config.level, e)))?;

    let (file_layer, guard) = match &config.directory {
        Some(directory) => {
            let file_appender = tracing_appender::rolling::daily(directory, "achievements-admin.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::layer().with_writer(non_blocking).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let json_layer = config.json.then(|| fmt::layer().json().with_writer(std::io::stdout));
    let plain_layer = (!config.json).then(|| fmt::layer().with_writer(std::io::stdout));

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(plain_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| AdminError::Config(format!("Failed to initialize logging: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log an outbound API request
pub fn log_api_request(method: &str, url: &str, payload: Option<&Value>) {
    info!(method = method, url = url, "API request");
    if let Some(payload) = payload {
        debug!(method = method, url = url, payload = %payload, "API request payload");
    }
}

/// Log a successful API response
pub fn log_api_response(method: &str, url: &str, status: u16) {
    info!(method = method, url = url, status = status, "API response");
}

/// Log API errors with context
pub fn log_api_error(api_error: &ApiError) {
    match api_error {
        ApiError::Status { method, url, status, body } => {
            error!(
                method = %method,
                url = %url,
                status = status,
                body = %body,
                message = %api_error,
                "API error"
            );
            match status {
                404 => warn!(url = %url, "Resource not found"),
                500 => warn!(url = %url, "Backend server error"),
                _ => {}
            }
        }
        ApiError::Timeout { method, url } => {
            error!(method = %method, url = %url, message = %api_error, "API error");
            warn!(url = %url, "Request timed out");
        }
        ApiError::Network { method, url, .. } => {
            error!(method = %method, url = %url, message = %api_error, "API error");
            warn!(url = %url, "Network error");
        }
        ApiError::InvalidResponse { url, .. } => {
            error!(url = %url, message = %api_error, "API error");
        }
    }
}

/// Log a page action performed by an administrator
pub fn log_page_action(resource: &str, action: &str, record_id: Option<&str>) {
    info!(
        resource = resource,
        action = action,
        record_id = record_id,
        "Page action performed"
    );
}

/// Log a form that was rejected before reaching the API
pub fn log_form_rejected(resource: &str, reason: &str) {
    warn!(resource = resource, reason = reason, "Form submission rejected");
}

/// Log a failure that left a page in a degraded state
pub fn log_page_failure(resource: &str, action: &str, error: &AdminError) {
    error!(
        resource = resource,
        action = action,
        error = %error,
        severity = %error.severity(),
        recoverable = error.is_recoverable(),
        "Page operation failed"
    );
}

/// Log a served HTTP request
pub fn log_http_request(request_id: &str, method: &str, path: &str, status: u16, duration_ms: u64) {
    if status >= 500 {
        warn!(
            request_id = request_id,
            method = method,
            path = path,
            status = status,
            duration_ms = duration_ms,
            "Request completed with server error"
        );
    } else {
        info!(
            request_id = request_id,
            method = method,
            path = path,
            status = status,
            duration_ms = duration_ms,
            "Request completed"
        );
    }
}
