//! Remote session endpoint
//!
//! Asks an external auth service who the caller is by replaying the caller's
//! cookies and authorization header against its session endpoint. The
//! endpoint answers `{"user": {"id": ..., "role": ...}, "expires": ...}` for a
//! signed-in caller and `{}` (or `null`) otherwise.

use super::IdentityProvider;
use crate::auth::session::{RoleClaim, Session};
use crate::config::RemoteProviderConfig;
use crate::core::RequestContext;
use crate::utils::error::{GateError, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, AUTHORIZATION, COOKIE};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct SessionEnvelope {
    #[serde(default)]
    user: Option<SessionUser>,
    #[serde(default)]
    expires: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Debug, Deserialize)]
struct SessionUser {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    sub: Option<String>,
    #[serde(default)]
    email: Option<String>,
    role: String,
}

impl SessionUser {
    /// First identifier present, in `id`, `sub`, `email` order
    fn subject(self) -> Option<String> {
        self.id.or(self.sub).or(self.email)
    }
}

/// Identity provider backed by an HTTP session endpoint
#[derive(Debug, Clone)]
pub struct RemoteSessionProvider {
    client: reqwest::Client,
    endpoint: String,
}

impl RemoteSessionProvider {
    /// Create a provider from configuration
    pub fn new(config: &RemoteProviderConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    /// Session endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl IdentityProvider for RemoteSessionProvider {
    async fn get_session(&self, ctx: &RequestContext) -> Result<Option<Session>> {
        let mut request = self
            .client
            .get(&self.endpoint)
            .header(ACCEPT, "application/json")
            .header("x-request-id", &ctx.request_id);
        if let Some(cookie) = &ctx.cookie_header {
            request = request.header(COOKIE, cookie);
        }
        if let Some(authorization) = &ctx.authorization {
            request = request.header(AUTHORIZATION, authorization);
        }

        let response = request.send().await.map_err(|e| {
            GateError::identity_provider(format!("Session endpoint request failed: {}", e))
        })?;

        let status = response.status();
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::NO_CONTENT => {
                debug!(request_id = %ctx.request_id, %status, "Session endpoint reports no session");
                return Ok(None);
            }
            s if s.is_success() => {}
            s => {
                return Err(GateError::identity_provider(format!(
                    "Session endpoint returned {}",
                    s
                )));
            }
        }

        let body = response.bytes().await.map_err(|e| {
            GateError::identity_provider(format!("Failed to read session response: {}", e))
        })?;
        let envelope: Option<SessionEnvelope> = serde_json::from_slice(&body).map_err(|e| {
            GateError::identity_provider(format!("Malformed session response: {}", e))
        })?;

        let Some(SessionEnvelope {
            user: Some(user),
            expires,
        }) = envelope
        else {
            debug!(request_id = %ctx.request_id, "Session endpoint returned an empty session");
            return Ok(None);
        };

        let role = RoleClaim::from(user.role.as_str());
        let Some(subject) = user.subject() else {
            return Err(GateError::identity_provider(
                "Session response has no user identifier",
            ));
        };
        let mut session = Session::new(subject, role);
        if let Some(expires_at) = expires {
            session = session.with_expiry(expires_at);
        }
        Ok(Some(session))
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}
