//! Test fixtures and data factories
//!
//! Provides stub identity providers and session token factories with
//! sensible defaults.

use async_trait::async_trait;
use rolegate::auth::{IdentityProvider, JwtSessionProvider, RoleClaim};
use rolegate::config::{Config, IdentityConfig, JwtProviderConfig};
use rolegate::server::AppState;
use rolegate::{GateError, RequestContext, Role, Session};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Secret shared by every token minted in tests
pub const TEST_SECRET: &str = "Integration-Test-Secret-0123456789-abcdefghij";

/// Identity provider returning a fixed outcome and counting lookups
pub struct StaticProvider {
    outcome: Result<Option<Session>, String>,
    calls: AtomicUsize,
}

impl StaticProvider {
    /// Every lookup finds a session with `role`
    pub fn signed_in<R: Into<RoleClaim>>(subject: &str, role: R) -> Self {
        Self::with_outcome(Ok(Some(Session::new(subject, role))))
    }

    /// Every lookup finds nobody signed in
    pub fn signed_out() -> Self {
        Self::with_outcome(Ok(None))
    }

    /// Every lookup fails
    pub fn failing(message: &str) -> Self {
        Self::with_outcome(Err(message.to_string()))
    }

    fn with_outcome(outcome: Result<Option<Session>, String>) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of lookups so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityProvider for StaticProvider {
    async fn get_session(&self, _ctx: &RequestContext) -> rolegate::Result<Option<Session>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome
            .clone()
            .map_err(GateError::identity_provider)
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

/// JWT provider settings matching [`TEST_SECRET`]
pub fn jwt_config() -> JwtProviderConfig {
    JwtProviderConfig {
        secret: Some(TEST_SECRET.to_string()),
        ..JwtProviderConfig::default()
    }
}

/// Factory for session tokens
pub struct SessionFactory;

impl SessionFactory {
    /// Signed token for `subject` with `role`
    pub fn token(subject: &str, role: Role) -> String {
        JwtSessionProvider::new(&jwt_config())
            .issue_token(subject, role)
            .unwrap()
    }

    /// `Cookie` header value carrying a session token
    pub fn cookie(subject: &str, role: Role) -> String {
        format!("session={}", Self::token(subject, role))
    }
}

/// Application state using the JWT provider with [`TEST_SECRET`]
pub fn jwt_app_state() -> AppState {
    let config = Config {
        identity: IdentityConfig::Jwt(jwt_config()),
        ..Config::default()
    };
    AppState::from_config(config).unwrap()
}
