//! Configuration data models
//!
//! This module defines all configuration structures used by rolegate.

#![allow(missing_docs)]

pub mod gate;
pub mod identity;
pub mod logging;
pub mod server;

pub use gate::*;
pub use identity::*;
pub use logging::*;
pub use server::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8080
}

pub fn default_sign_in_path() -> String {
    "/signin".to_string()
}

pub fn default_forbidden_path() -> String {
    "/forbidden".to_string()
}

pub fn default_return_to_param() -> Option<String> {
    Some("callbackUrl".to_string())
}

pub fn default_session_cookie() -> String {
    "session".to_string()
}

pub fn default_issuer() -> String {
    "rolegate".to_string()
}

pub fn default_token_ttl() -> u64 {
    8 * 3600 // one shift
}

pub fn default_provider_timeout_ms() -> u64 {
    5000
}

pub fn default_log_level() -> String {
    "info".to_string()
}
