//! Middleware module
//!
//! This module contains middleware for request processing

pub mod logging;
pub mod security;

// Re-export commonly used middleware
pub use logging::log_requests;
pub use security::with_security_headers;
