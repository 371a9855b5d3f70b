//! Application state shared across HTTP handlers

use crate::auth::{AccessGate, provider};
use crate::config::Config;
use crate::utils::error::Result;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Everything here is read-only after startup; gate invocations share no
/// mutable state.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Service configuration
    pub config: Arc<Config>,
    /// Access gate for dashboard pages
    pub gate: Arc<AccessGate>,
}

impl AppState {
    /// Create state from an already built gate
    pub fn new(config: Config, gate: AccessGate) -> Self {
        Self {
            config: Arc::new(config),
            gate: Arc::new(gate),
        }
    }

    /// Build the identity provider and gate described by `config`
    pub fn from_config(config: Config) -> Result<Self> {
        let provider = provider::from_config(config.identity())?;
        let gate = AccessGate::new(provider, config.gate().clone());
        Ok(Self::new(config, gate))
    }

    /// Get service configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
