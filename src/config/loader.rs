//! Environment overrides
//!
//! `ROLEGATE_*` variables are applied on top of whatever configuration was
//! loaded from file or defaults. Lookups go through a closure so the mapping
//! can be exercised without touching the process environment.

use super::models::*;
use super::Config;
use crate::utils::error::{GateError, Result};
use tracing::debug;

pub const ENV_HOST: &str = "ROLEGATE_HOST";
pub const ENV_PORT: &str = "ROLEGATE_PORT";
pub const ENV_WORKERS: &str = "ROLEGATE_WORKERS";
pub const ENV_SIGN_IN_PATH: &str = "ROLEGATE_SIGN_IN_PATH";
pub const ENV_FORBIDDEN_PATH: &str = "ROLEGATE_FORBIDDEN_PATH";
pub const ENV_JWT_SECRET: &str = "ROLEGATE_JWT_SECRET";
pub const ENV_SESSION_ENDPOINT: &str = "ROLEGATE_SESSION_ENDPOINT";
pub const ENV_LOG_LEVEL: &str = "ROLEGATE_LOG_LEVEL";

/// Apply environment overrides using `lookup` to read variables
pub fn apply_overrides<F>(mut config: Config, lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    // Server configuration
    if let Some(host) = lookup(ENV_HOST) {
        config.server.host = host;
    }
    if let Some(port) = lookup(ENV_PORT) {
        config.server.port = port
            .parse()
            .map_err(|e| GateError::Config(format!("Invalid port: {}", e)))?;
    }
    if let Some(workers) = lookup(ENV_WORKERS) {
        config.server.workers = Some(
            workers
                .parse()
                .map_err(|e| GateError::Config(format!("Invalid workers count: {}", e)))?,
        );
    }

    // Gate destinations
    if let Some(path) = lookup(ENV_SIGN_IN_PATH) {
        config.gate.sign_in_path = path;
    }
    if let Some(path) = lookup(ENV_FORBIDDEN_PATH) {
        config.gate.forbidden_path = path;
    }

    // Identity provider; a session endpoint switches to the remote provider
    if let Some(endpoint) = lookup(ENV_SESSION_ENDPOINT) {
        let timeout_ms = match &config.identity {
            IdentityConfig::Remote(remote) => remote.timeout_ms,
            IdentityConfig::Jwt(_) => default_provider_timeout_ms(),
        };
        config.identity = IdentityConfig::Remote(RemoteProviderConfig {
            endpoint,
            timeout_ms,
        });
    }
    if let Some(secret) = lookup(ENV_JWT_SECRET) {
        match &mut config.identity {
            IdentityConfig::Jwt(jwt) => jwt.secret = Some(secret),
            IdentityConfig::Remote(_) => {
                return Err(GateError::Config(format!(
                    "{} is set but the identity provider is remote",
                    ENV_JWT_SECRET
                )));
            }
        }
    }

    if let Some(level) = lookup(ENV_LOG_LEVEL) {
        config.logging.level = level;
    }

    debug!("Environment overrides applied");
    Ok(config)
}
