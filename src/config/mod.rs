//! Configuration management for the access service
//!
//! This module handles loading, validation, and environment overrides of the
//! service configuration.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{AccessError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the access service
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Service configuration
    pub service: ServiceConfig,
}

impl Config {
    /// Load configuration from a YAML file, then apply environment overrides
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AccessError::Config(format!("Failed to read config file: {}", e)))?;

        let service: ServiceConfig = serde_yaml::from_str(&content)
            .map_err(|e| AccessError::Config(format!("Failed to parse config: {}", e)))?;

        let mut config = Self { service };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Build configuration from defaults plus environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut config = Self::default();
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `EZTEST_*` style overrides through `lookup`
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let service = &mut self.service;

        if let Some(host) = lookup("EZTEST_HOST") {
            service.server.host = host;
        }
        if let Some(port) = lookup("EZTEST_PORT") {
            service.server.port = port
                .parse()
                .map_err(|e| AccessError::Config(format!("Invalid EZTEST_PORT: {}", e)))?;
        }
        if let Some(url) = lookup("DATABASE_URL") {
            service.storage.database.url = url;
        }
        if let Some(secret) = lookup("JWT_SECRET") {
            service.auth.jwt_secret = secret;
        }
        if let Some(cookie) = lookup("SESSION_COOKIE_NAME") {
            service.auth.session_cookie_name = cookie;
        }
        if let Some(timeout) = lookup("EZTEST_LOOKUP_TIMEOUT_MS") {
            service.auth.lookup_timeout_ms = timeout.parse().map_err(|e| {
                AccessError::Config(format!("Invalid EZTEST_LOOKUP_TIMEOUT_MS: {}", e))
            })?;
        }

        Ok(())
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.service.server
    }

    /// Get auth configuration
    pub fn auth(&self) -> &AuthConfig {
        &self.service.auth
    }

    /// Get storage configuration
    pub fn storage(&self) -> &StorageConfig {
        &self.service.storage
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.service.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        self.service.validate().map_err(AccessError::Config)
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.service)
            .map_err(|e| AccessError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
