//! Identity provider configuration

use super::*;
use rand::distributions::Alphanumeric;
use rand::{Rng, thread_rng};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Which identity provider resolves sessions, and how
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IdentityConfig {
    /// Signed session tokens verified locally
    Jwt(JwtProviderConfig),
    /// Sessions resolved by calling an external session endpoint
    Remote(RemoteProviderConfig),
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self::Jwt(JwtProviderConfig::default())
    }
}

impl IdentityConfig {
    /// Validate identity configuration
    pub fn validate(&self) -> Result<(), String> {
        match self {
            Self::Jwt(jwt) => jwt.validate(),
            Self::Remote(remote) => remote.validate(),
        }
    }
}

/// Signed session token settings
#[derive(Clone, Serialize, Deserialize)]
pub struct JwtProviderConfig {
    /// HMAC secret; a random one is generated at startup when unset
    #[serde(default)]
    pub secret: Option<String>,
    /// Cookie holding the session token
    #[serde(default = "default_session_cookie")]
    pub cookie_name: String,
    /// Also accept `Authorization: Bearer <token>`
    #[serde(default)]
    pub accept_bearer: bool,
    /// Expected `iss` claim
    #[serde(default = "default_issuer")]
    pub issuer: String,
    /// Lifetime of minted tokens in seconds
    #[serde(default = "default_token_ttl")]
    pub token_ttl: u64,
}

impl std::fmt::Debug for JwtProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtProviderConfig")
            .field("secret", &"[REDACTED]")
            .field("cookie_name", &self.cookie_name)
            .field("accept_bearer", &self.accept_bearer)
            .field("issuer", &self.issuer)
            .field("token_ttl", &self.token_ttl)
            .finish()
    }
}

impl Default for JwtProviderConfig {
    fn default() -> Self {
        Self {
            secret: None,
            cookie_name: default_session_cookie(),
            accept_bearer: false,
            issuer: default_issuer(),
            token_ttl: default_token_ttl(),
        }
    }
}

impl JwtProviderConfig {
    /// Validate JWT provider configuration
    pub fn validate(&self) -> Result<(), String> {
        if let Some(secret) = &self.secret {
            if secret.len() < 32 {
                return Err("JWT secret must be at least 32 characters long".to_string());
            }
            if secret == "your-secret-key" || secret == "change-me" {
                return Err("JWT secret must not use a placeholder value".to_string());
            }
        }
        if self.cookie_name.is_empty()
            || self
                .cookie_name
                .chars()
                .any(|c| c.is_whitespace() || c == ';' || c == '=' || c == ',')
        {
            return Err(format!("Invalid session cookie name: '{}'", self.cookie_name));
        }
        if self.issuer.is_empty() {
            return Err("JWT issuer cannot be empty".to_string());
        }
        if self.token_ttl < 60 {
            return Err("Token lifetime should be at least 60 seconds".to_string());
        }
        Ok(())
    }
}

/// Remote session endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteProviderConfig {
    /// URL answering with the caller's session as JSON
    pub endpoint: String,
    /// Per-lookup timeout in milliseconds
    #[serde(default = "default_provider_timeout_ms")]
    pub timeout_ms: u64,
}

impl RemoteProviderConfig {
    /// Validate remote provider configuration
    pub fn validate(&self) -> Result<(), String> {
        let url = url::Url::parse(&self.endpoint)
            .map_err(|e| format!("Session endpoint has invalid URL format: {}", e))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(format!(
                "Session endpoint must use http:// or https:// scheme, got: {}",
                url.scheme()
            ));
        }
        if self.timeout_ms == 0 {
            return Err("Session endpoint timeout must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl JwtProviderConfig {
    /// Configured secret, or a freshly generated one
    pub fn secret_or_generate(&self) -> String {
        match &self.secret {
            Some(secret) => secret.clone(),
            None => {
                warn!(
                    "No JWT secret configured; using a random secret. Session tokens will not survive a restart."
                );
                generate_secure_secret()
            }
        }
    }
}

/// Generate a random 64-character secret
fn generate_secure_secret() -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(64)
        .map(char::from)
        .collect()
}

/// Warn about settings that only make sense in development
pub fn warn_insecure_config(config: &IdentityConfig) {
    match config {
        IdentityConfig::Jwt(jwt) if jwt.accept_bearer && jwt.secret.is_none() => warn!(
            "Bearer tokens are accepted but the JWT secret is generated per process"
        ),
        IdentityConfig::Remote(remote) if remote.endpoint.starts_with("http://") => warn!(
            endpoint = %remote.endpoint,
            "Session endpoint is not using TLS; session cookies are forwarded in cleartext"
        ),
        _ => {}
    }
}
