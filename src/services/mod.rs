//! Services module
//!
//! Outbound calls to the achievements API and the health probe built on them

pub mod api;
pub mod health;
pub mod resources;

// Re-export commonly used services
pub use api::ApiClient;
pub use health::{check_health, HealthReport};
pub use resources::Endpoint;
