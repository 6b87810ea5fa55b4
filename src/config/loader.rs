//! Configuration loading from disk and environment.

use std::env;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::SiteConfig;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid environment variable {name}: {value}")]
    Env { name: String, value: String },

    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),
}

/// Load configuration, apply environment overrides, and validate.
///
/// With no path the defaults are used, so the server runs unconfigured.
/// `HOST` and `PORT` always win over the file.
pub fn load_config(path: Option<&Path>) -> Result<SiteConfig, ConfigError> {
    let mut config = match path {
        Some(p) => {
            let content = fs::read_to_string(p)?;
            toml::from_str(&content)?
        }
        None => SiteConfig::default(),
    };

    apply_env_overrides(&mut config)?;
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

fn apply_env_overrides(config: &mut SiteConfig) -> Result<(), ConfigError> {
    if let Ok(host) = env::var("HOST") {
        if !host.is_empty() {
            config.listener.host = host;
        }
    }
    if let Ok(port) = env::var("PORT") {
        config.listener.port = port.parse().map_err(|_| ConfigError::Env {
            name: "PORT".to_string(),
            value: port,
        })?;
    }
    Ok(())
}

/// Semantic validation. Returns all errors, not just the first.
fn validate_config(config: &SiteConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if config.listener.host.is_empty() {
        errors.push("listener.host must not be empty".to_string());
    }
    if config.content.public_dir.is_empty() {
        errors.push("content.public_dir must not be empty".to_string());
    }
    if config.contact.data_file.is_empty() {
        errors.push("contact.data_file must not be empty".to_string());
    }
    if config.contact.max_body_bytes == 0 {
        errors.push("contact.max_body_bytes must be greater than zero".to_string());
    }
    if config.rate_limit.window_ms == 0 {
        errors.push("rate_limit.window_ms must be greater than zero".to_string());
    }
    if config.rate_limit.max_requests == 0 {
        errors.push("rate_limit.max_requests must be greater than zero".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
