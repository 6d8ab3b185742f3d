//! Validators for each configuration section

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::debug;

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating service configuration");

        self.server.validate()?;
        self.auth.validate()?;
        self.storage.validate()?;
        self.logging.validate()?;

        Ok(())
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.host.is_empty() {
            return Err("Server host cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }

        if self.max_body_size == 0 {
            return Err("Max body size cannot be 0".to_string());
        }

        if let Some(0) = self.workers {
            return Err("Worker count must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for AuthConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating auth configuration");

        if self.jwt_secret.len() < 32 {
            return Err("JWT secret must be at least 32 characters long".to_string());
        }

        if self.jwt_secret.starts_with("change-me") || self.jwt_secret == "your-secret-key" {
            return Err("JWT secret must not use a placeholder value".to_string());
        }

        if self.jwt_expiration == 0 {
            return Err("JWT expiration must be greater than 0".to_string());
        }

        if self.jwt_issuer.is_empty() {
            return Err("JWT issuer cannot be empty".to_string());
        }

        if self.session_cookie_name.is_empty()
            || self
                .session_cookie_name
                .chars()
                .any(|c| c.is_whitespace() || c == ';' || c == '=')
        {
            return Err(format!(
                "Invalid session cookie name: {:?}",
                self.session_cookie_name
            ));
        }

        if self.lookup_timeout_ms == 0 {
            return Err("Lookup timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for StorageConfig {
    fn validate(&self) -> Result<(), String> {
        let db = &self.database;

        if db.url.is_empty() {
            return Err("Database URL cannot be empty".to_string());
        }

        if !(db.url.starts_with("sqlite:")
            || db.url.starts_with("postgres://")
            || db.url.starts_with("postgresql://"))
        {
            return Err(format!("Unsupported database URL scheme: {}", db.url));
        }

        if db.max_connections == 0 {
            return Err("Database max connections must be greater than 0".to_string());
        }

        if db.connection_timeout == 0 || db.acquire_timeout == 0 {
            return Err("Database timeouts must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.filter.trim().is_empty() {
            return Err("Log filter cannot be empty".to_string());
        }
        Ok(())
    }
}
