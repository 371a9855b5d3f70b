//! Configuration management for rolegate
//!
//! This module handles loading, validation, and management of all configuration.

pub mod loader;
pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{GateError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Redirect destinations for denied requests
    #[serde(default)]
    pub gate: GateConfig,
    /// Identity provider configuration
    #[serde(default)]
    pub identity: IdentityConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| GateError::Config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml_str(&content)?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse and validate configuration from a YAML document
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| GateError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables on top of defaults
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self::default().with_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `ROLEGATE_*` environment variables over this configuration
    pub fn with_env_overrides(self) -> Result<Self> {
        loader::apply_overrides(self, |key| std::env::var(key).ok())
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.server
    }

    /// Get gate configuration
    pub fn gate(&self) -> &GateConfig {
        &self.gate
    }

    /// Get identity provider configuration
    pub fn identity(&self) -> &IdentityConfig {
        &self.identity
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        Validate::validate(self)?;

        // Warn about insecure configurations
        crate::config::models::identity::warn_insecure_config(&self.identity);
        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| GateError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
