//! Achievements Admin Console
//!
//! A server-rendered administrative console for a gamification backend.
//! This library provides the REST client for the achievements API, the
//! multilingual text editor, the resource pages for categories, achievements,
//! rewards and user progress, and the HTTP router serving them.

pub mod config;
pub mod handlers;
pub mod i18n;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod views;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{AdminError, ApiError, FormError, Result};

// Re-export main components for easy access
pub use handlers::{router, AppState};
pub use i18n::{Language, LocalizedText, TranslationEditor};
pub use services::ApiClient;
pub use state::{ResourcePage, PageState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
