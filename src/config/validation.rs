//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{AdminError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_server_config(&settings.server)?;
    validate_api_config(&settings.api)?;
    validate_app_config(&settings.app)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate HTTP server configuration
fn validate_server_config(config: &super::ServerConfig) -> Result<()> {
    if config.host.is_empty() {
        return Err(AdminError::Config(
            "Server host is required".to_string()
        ));
    }

    if config.port == 0 {
        return Err(AdminError::Config(
            "Server port must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate achievements API configuration
fn validate_api_config(config: &super::ApiConfig) -> Result<()> {
    if config.base_url.is_empty() {
        return Err(AdminError::Config(
            "API base URL is required".to_string()
        ));
    }

    let url = url::Url::parse(&config.base_url)?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(AdminError::Config(
            format!("API base URL must use http or https, got: {}", url.scheme())
        ));
    }

    if config.timeout_seconds == 0 {
        return Err(AdminError::Config(
            "API timeout must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate deployment settings
fn validate_app_config(config: &super::AppConfig) -> Result<()> {
    if config.environment.is_empty() {
        return Err(AdminError::Config(
            "Environment name is required".to_string()
        ));
    }

    for domain in &config.image_domains {
        if domain.is_empty() || domain.contains("://") || domain.contains('/') {
            return Err(AdminError::Config(
                format!("Image domain must be a bare host name: {}", domain)
            ));
        }
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(AdminError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(AdminError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}
