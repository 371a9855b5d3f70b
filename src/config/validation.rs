//! Configuration validation
//!
//! Section validators return plain strings; this layer labels them and lifts
//! them into `GateError::Config`.

use super::Config;
use crate::utils::error::{GateError, Result};
use tracing::debug;

/// Validation trait for configuration structures
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

impl Validate for Config {
    fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.server
            .validate()
            .map_err(|e| GateError::Config(format!("Server config error: {}", e)))?;

        self.gate
            .validate()
            .map_err(|e| GateError::Config(format!("Gate config error: {}", e)))?;

        self.identity
            .validate()
            .map_err(|e| GateError::Config(format!("Identity config error: {}", e)))?;

        self.logging
            .validate()
            .map_err(|e| GateError::Config(format!("Logging config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }
}
