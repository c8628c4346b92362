//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub api: ApiConfig,
    pub app: AppConfig,
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Achievements API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

/// Deployment settings exposed to the rendered pages
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub environment: String,
    pub custom_key: Option<String>,
    pub image_domains: Vec<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for daily rolling log files; stdout only when unset
    pub directory: Option<String>,
    pub json: bool,
}

/// Prefix for nested environment overrides, e.g. `ADMIN__API__BASE_URL`
const ENV_PREFIX: &str = "ADMIN";

impl Settings {
    /// Load settings from `config.toml` (if present) and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::load(None)
    }

    /// Load settings, reading the given file instead of `config.toml`
    pub fn load(file: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file_source = match file {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("config").required(false),
        };

        let image_domains = std::env::var("IMAGE_DOMAINS").ok().map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|domain| !domain.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        });

        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&Settings::default())?)
            .add_source(file_source)
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .set_override_option("api.base_url", std::env::var("API_URL").ok())?
            .set_override_option("app.environment", std::env::var("APP_ENV").ok())?
            .set_override_option("app.custom_key", std::env::var("CUSTOM_KEY").ok())?
            .set_override_option("app.image_domains", image_domains)?
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::AdminError> {
        super::validation::validate_settings(self)
    }

    /// Socket address the HTTP server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn is_production(&self) -> bool {
        self.app.environment == "production"
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3001,
            },
            api: ApiConfig {
                base_url: "http://localhost:3000".to_string(),
                timeout_seconds: 10,
            },
            app: AppConfig {
                environment: "development".to_string(),
                custom_key: None,
                image_domains: vec!["test.aquadaddy.app".to_string()],
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                directory: None,
                json: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    fn clear_env() {
        for key in ["API_URL", "APP_ENV", "CUSTOM_KEY", "IMAGE_DOMAINS", "ADMIN__SERVER__PORT"] {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_defaults_without_sources() {
        clear_env();
        let settings = Settings::new().unwrap();
        assert_eq!(settings.api.base_url, "http://localhost:3000");
        assert_eq!(settings.api.timeout_seconds, 10);
        assert_eq!(settings.app.environment, "development");
        assert!(settings.app.custom_key.is_none());
    }

    #[test]
    #[serial]
    fn test_well_known_env_overrides() {
        clear_env();
        std::env::set_var("API_URL", "https://api.example.com");
        std::env::set_var("APP_ENV", "production");
        std::env::set_var("CUSTOM_KEY", "secret-key");
        std::env::set_var("IMAGE_DOMAINS", "cdn.example.com, img.example.com");
        std::env::set_var("ADMIN__SERVER__PORT", "8080");

        let settings = Settings::new().unwrap();
        clear_env();

        assert_eq!(settings.api.base_url, "https://api.example.com");
        assert!(settings.is_production());
        assert_eq!(settings.app.custom_key.as_deref(), Some("secret-key"));
        assert_eq!(settings.app.image_domains, vec!["cdn.example.com", "img.example.com"]);
        assert_eq!(settings.server.port, 8080);
    }

    #[test]
    #[serial]
    fn test_load_from_file() {
        clear_env();
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[api]\nbase_url = \"http://backend:4000\"\ntimeout_seconds = 3").unwrap();

        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.api.base_url, "http://backend:4000");
        assert_eq!(settings.api.timeout_seconds, 3);
        assert_eq!(settings.server.port, 3001);
    }
}
