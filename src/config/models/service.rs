//! Top-level service configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Everything the access service reads from `config/eztest.yaml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServiceConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Identity and access configuration
    #[serde(default)]
    pub auth: AuthConfig,
    /// Persistence configuration
    #[serde(default)]
    pub storage: StorageConfig,
    /// Log output configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}
