//! Access gate
//!
//! The gate runs before a page renders. It resolves the caller's session and
//! either hands it back to the page or ends the request with a redirect:
//! callers without a session go to sign-in, callers with the wrong role go to
//! the forbidden destination. Provider failures count as "no session".

use super::provider::IdentityProvider;
use super::requirement::RoleRequirement;
use super::role::Role;
use super::session::Session;
use crate::config::GateConfig;
use crate::core::RequestContext;
use crate::utils::error::{GateError, Result};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Why a request was turned away
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denial {
    /// No session
    Unauthenticated,
    /// Session role not in the allowed set
    Forbidden,
}

impl Denial {
    /// Stable lowercase label used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Denial::Unauthenticated => "unauthenticated",
            Denial::Forbidden => "forbidden",
        }
    }
}

/// Outcome of evaluating a session against a requirement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    /// Rendering may proceed
    Allow(Session),
    /// Rendering must not start
    Deny(Denial),
}

/// Decide whether `session` satisfies `requirement`.
///
/// A missing session is always `Unauthenticated`, whatever the requirement.
/// A role tag outside the known role set never satisfies a requirement.
pub fn evaluate(session: Option<Session>, requirement: &RoleRequirement) -> AccessDecision {
    match session {
        None => AccessDecision::Deny(Denial::Unauthenticated),
        Some(session) => match session.role() {
            Some(role) if requirement.permits(role) => AccessDecision::Allow(session),
            _ => AccessDecision::Deny(Denial::Forbidden),
        },
    }
}

/// Role gate for server-rendered pages
#[derive(Clone)]
pub struct AccessGate {
    provider: Arc<dyn IdentityProvider>,
    config: Arc<GateConfig>,
}

impl std::fmt::Debug for AccessGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessGate")
            .field("provider", &self.provider.name())
            .field("config", &self.config)
            .finish()
    }
}

impl AccessGate {
    /// Create a gate over `provider` with redirect destinations from `config`
    pub fn new(provider: Arc<dyn IdentityProvider>, config: GateConfig) -> Self {
        Self {
            provider,
            config: Arc::new(config),
        }
    }

    /// Redirect destinations
    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Require one of `roles`. An empty slice is a caller bug and fails with
    /// `GateError::EmptyRequirement` before the session is looked up.
    pub async fn require_role(&self, ctx: &RequestContext, roles: &[Role]) -> Result<Session> {
        let requirement = RoleRequirement::any_of(roles.iter().copied())?;
        self.check_access(ctx, &requirement).await
    }

    /// Resolve the session and check it against `requirement`.
    ///
    /// Returns the session when access is granted. Otherwise returns
    /// `GateError::Unauthenticated` or `GateError::Forbidden`, whose HTTP
    /// rendering is the redirect; callers propagate it with `?` before
    /// producing any output.
    pub async fn check_access(
        &self,
        ctx: &RequestContext,
        requirement: &RoleRequirement,
    ) -> Result<Session> {
        let session = match self.provider.get_session(ctx).await {
            Ok(session) => session,
            Err(e) => {
                warn!(
                    request_id = %ctx.request_id,
                    provider = self.provider.name(),
                    "Identity lookup failed, treating request as unauthenticated: {}",
                    e
                );
                None
            }
        };

        match evaluate(session, requirement) {
            AccessDecision::Allow(session) => {
                debug!(
                    request_id = %ctx.request_id,
                    path = %ctx.path,
                    subject = %session.subject,
                    role = %session.role,
                    "Access granted"
                );
                Ok(session)
            }
            AccessDecision::Deny(denial) => {
                let location = self.redirect_location(denial, ctx);
                info!(
                    request_id = %ctx.request_id,
                    path = %ctx.path,
                    required = %requirement,
                    denial = denial.as_str(),
                    location = %location,
                    "Access denied"
                );
                Err(match denial {
                    Denial::Unauthenticated => GateError::unauthenticated(location),
                    Denial::Forbidden => GateError::forbidden(location),
                })
            }
        }
    }

    /// Where a denial sends the caller
    pub fn redirect_location(&self, denial: Denial, ctx: &RequestContext) -> String {
        match denial {
            Denial::Forbidden => self.config.forbidden_path.clone(),
            Denial::Unauthenticated => match &self.config.return_to_param {
                Some(param) => append_query(
                    &self.config.sign_in_path,
                    param,
                    &ctx.original_location(),
                ),
                None => self.config.sign_in_path.clone(),
            },
        }
    }
}

/// Append `name=value` (form-encoded) to `base`, keeping any existing query
fn append_query(base: &str, name: &str, value: &str) -> String {
    let encoded = url::form_urlencoded::Serializer::new(String::new())
        .append_pair(name, value)
        .finish();
    let separator = if base.contains('?') { '&' } else { '?' };
    format!("{}{}{}", base, separator, encoded)
}
