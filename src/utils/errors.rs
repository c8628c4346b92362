//! Error handling for the admin console
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for the admin console
#[derive(Error, Debug)]
pub enum AdminError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Achievements API error: {0}")]
    Api(#[from] ApiError),

    #[error("Form error: {0}")]
    Form(#[from] FormError),

    #[error("Record not found: {resource}/{id}")]
    RecordNotFound { resource: String, id: String },

    #[error("Invalid state transition: {from} -> {to}")]
    InvalidStateTransition { from: String, to: String },

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Errors raised by calls to the achievements REST API
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{method} {url} failed with HTTP {status}: {body}")]
    Status {
        method: String,
        url: String,
        status: u16,
        body: String,
    },

    #[error("{method} {url} timed out")]
    Timeout { method: String, url: String },

    #[error("{method} {url} network error: {message}")]
    Network {
        method: String,
        url: String,
        message: String,
    },

    #[error("Invalid response from {url}: {message}")]
    InvalidResponse { url: String, message: String },
}

/// Errors raised while turning a submitted form into an API payload.
///
/// These block the submission: no request is sent when one occurs.
#[derive(Error, Debug)]
pub enum FormError {
    #[error("Поле «details» содержит некорректный JSON: {0}")]
    InvalidDetails(#[source] serde_json::Error),

    #[error("Поле «{field}» должно быть числом, получено: {value}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Поле «{field}» обязательно для заполнения")]
    MissingField { field: &'static str },
}

/// Result type alias for admin console operations
pub type Result<T> = std::result::Result<T, AdminError>;

/// Result type alias for API calls
pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl ApiError {
    /// HTTP status returned by the backend, if the request got that far
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Short category label used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Status { .. } => "http_status",
            ApiError::Timeout { .. } => "timeout",
            ApiError::Network { .. } => "network",
            ApiError::InvalidResponse { .. } => "invalid_response",
        }
    }
}

impl AdminError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            AdminError::Config(_) => false,
            AdminError::ConfigLoad(_) => false,
            AdminError::Api(ApiError::Status { status, .. }) => *status >= 500,
            AdminError::Api(_) => true,
            AdminError::Form(_) => true,
            AdminError::RecordNotFound { .. } => false,
            AdminError::InvalidStateTransition { .. } => false,
            AdminError::Http(_) => true,
            AdminError::UrlParse(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AdminError::Config(_) => ErrorSeverity::Critical,
            AdminError::ConfigLoad(_) => ErrorSeverity::Critical,
            AdminError::Form(_) => ErrorSeverity::Info,
            AdminError::RecordNotFound { .. } => ErrorSeverity::Warning,
            AdminError::InvalidStateTransition { .. } => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }

    /// Message suitable for showing inside a form
    pub fn user_message(&self) -> String {
        match self {
            AdminError::Form(e) => e.to_string(),
            AdminError::Api(ApiError::Timeout { .. }) => "Таймаут запроса".to_string(),
            AdminError::Api(ApiError::Network { .. }) => "Ошибка сети".to_string(),
            AdminError::Api(ApiError::Status { status: 404, .. }) => "Ресурс не найден".to_string(),
            AdminError::Api(ApiError::Status { status, .. }) if *status >= 500 => "Ошибка сервера".to_string(),
            _ => "Не удалось сохранить изменения".to_string(),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
