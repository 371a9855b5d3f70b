//! Identity providers
//!
//! An identity provider turns the request context into the caller's session,
//! if there is one. Providers distinguish "nobody is signed in" (`Ok(None)`)
//! from "could not find out" (`Err`); the gate treats both as
//! unauthenticated.

mod jwt;
mod remote;

pub use jwt::{JwtSessionProvider, SessionClaims};
pub use remote::RemoteSessionProvider;

use super::session::Session;
use crate::config::IdentityConfig;
use crate::core::RequestContext;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Source of sessions for the access gate
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolve the caller's session from the request context
    async fn get_session(&self, ctx: &RequestContext) -> Result<Option<Session>>;

    /// Short name used in logs
    fn name(&self) -> &'static str {
        "identity"
    }
}

/// Build the provider selected by configuration
pub fn from_config(config: &IdentityConfig) -> Result<Arc<dyn IdentityProvider>> {
    let provider: Arc<dyn IdentityProvider> = match config {
        IdentityConfig::Jwt(jwt) => Arc::new(JwtSessionProvider::new(jwt)),
        IdentityConfig::Remote(remote) => Arc::new(RemoteSessionProvider::new(remote)?),
    };
    Ok(provider)
}
