//! Signed session tokens
//!
//! Sessions live in an HS256-signed token, normally in a cookie set by the
//! sign-in flow. Verification is local; nothing is stored server-side.

use super::IdentityProvider;
use crate::auth::role::Role;
use crate::auth::session::{RoleClaim, Session};
use crate::config::JwtProviderConfig;
use crate::core::RequestContext;
use crate::utils::error::{GateError, Result};
use async_trait::async_trait;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

/// Claims carried by a session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (user ID)
    pub sub: String,
    /// Role tag
    pub role: String,
    /// Issued at timestamp
    pub iat: u64,
    /// Expiration timestamp
    pub exp: u64,
    /// Issuer
    pub iss: String,
}

/// Identity provider backed by signed session tokens
#[derive(Clone)]
pub struct JwtSessionProvider {
    /// Encoding key for minting tokens
    encoding_key: EncodingKey,
    /// Decoding key for verifying tokens
    decoding_key: DecodingKey,
    /// JWT algorithm
    algorithm: Algorithm,
    /// Cookie holding the token
    cookie_name: String,
    /// Whether `Authorization: Bearer` is honored
    accept_bearer: bool,
    /// Token issuer
    issuer: String,
    /// Lifetime of minted tokens in seconds
    token_ttl: u64,
}

impl std::fmt::Debug for JwtSessionProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSessionProvider")
            .field("algorithm", &self.algorithm)
            .field("cookie_name", &self.cookie_name)
            .field("accept_bearer", &self.accept_bearer)
            .field("issuer", &self.issuer)
            .field("token_ttl", &self.token_ttl)
            .field("encoding_key", &"[REDACTED]")
            .field("decoding_key", &"[REDACTED]")
            .finish()
    }
}

impl JwtSessionProvider {
    /// Create a provider from configuration
    pub fn new(config: &JwtProviderConfig) -> Self {
        let secret = config.secret_or_generate();
        let secret = secret.as_bytes();

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            cookie_name: config.cookie_name.clone(),
            accept_bearer: config.accept_bearer,
            issuer: config.issuer.clone(),
            token_ttl: config.token_ttl,
        }
    }

    /// Name of the session cookie
    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    /// Mint a session token for `subject` with `role`
    pub fn issue_token(&self, subject: &str, role: Role) -> Result<String> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| GateError::internal(format!("System time error: {}", e)))?
            .as_secs();

        let claims = SessionClaims {
            sub: subject.to_string(),
            role: role.as_str().to_string(),
            iat: now,
            exp: now + self.token_ttl,
            iss: self.issuer.clone(),
        };

        self.encode_claims(&claims)
    }

    /// Sign arbitrary claims
    pub fn encode_claims(&self, claims: &SessionClaims) -> Result<String> {
        let header = Header::new(self.algorithm);
        let token = encode(&header, claims, &self.encoding_key)?;
        debug!("Issued session token for subject: {}", claims.sub);
        Ok(token)
    }

    /// Verify a token and return its claims
    pub fn verify_token(&self, token: &str) -> Result<SessionClaims> {
        let mut validation = Validation::new(self.algorithm);
        validation.set_issuer(&[&self.issuer]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);

        let token_data = decode::<SessionClaims>(token, &self.decoding_key, &validation)?;
        Ok(token_data.claims)
    }

    /// Candidate tokens in the request: cookie first, then bearer header
    fn candidate_tokens<'a>(&self, ctx: &'a RequestContext) -> Vec<&'a str> {
        let cookie = ctx.cookie(&self.cookie_name).filter(|token| !token.is_empty());
        let bearer = if self.accept_bearer {
            ctx.bearer_token().filter(|token| !token.is_empty())
        } else {
            None
        };
        cookie.into_iter().chain(bearer).collect()
    }
}

#[async_trait]
impl IdentityProvider for JwtSessionProvider {
    async fn get_session(&self, ctx: &RequestContext) -> Result<Option<Session>> {
        let tokens = self.candidate_tokens(ctx);
        if tokens.is_empty() {
            debug!(request_id = %ctx.request_id, "No session token on request");
            return Ok(None);
        }

        // Tokens that all fail verification mean nobody is signed in.
        let mut verified = None;
        for token in tokens {
            match self.verify_token(token) {
                Ok(claims) => {
                    verified = Some(claims);
                    break;
                }
                Err(e) => debug!(request_id = %ctx.request_id, "Session token rejected: {}", e),
            }
        }
        let Some(claims) = verified else {
            return Ok(None);
        };

        let mut session = Session::new(claims.sub, RoleClaim::from(claims.role.as_str()));
        if let Some(expires_at) = chrono::DateTime::from_timestamp(claims.exp as i64, 0) {
            session = session.with_expiry(expires_at);
        }
        Ok(Some(session))
    }

    fn name(&self) -> &'static str {
        "jwt"
    }
}
