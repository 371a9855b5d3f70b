//! # rolegate
//!
//! Role-based access gating for server-rendered pages.
//!
//! A page declares which roles may see it. Before any output is produced the
//! [`AccessGate`] resolves the caller's session through an
//! [`IdentityProvider`](auth::IdentityProvider) and either hands the session
//! to the page or ends the request with a redirect: to sign-in when nobody is
//! signed in, to the forbidden page when the role is not allowed.
//!
//! ## Features
//!
//! - **Fail closed**: provider errors are treated as "not signed in"
//! - **Two identity providers**: signed session cookies (JWT) or a remote
//!   session endpoint
//! - **actix-web integration**: handler-level checks, a scope middleware and
//!   a `Session` extractor
//!
//! ## Handler-level gating
//!
//! ```rust,no_run
//! use actix_web::{HttpResponse, web};
//! use rolegate::core::RequestContext;
//! use rolegate::server::AppState;
//! use rolegate::{Result, Role};
//!
//! async fn audit_log(state: web::Data<AppState>, ctx: RequestContext) -> Result<HttpResponse> {
//!     let session = state.gate.require_role(&ctx, &[Role::Owner]).await?;
//!     Ok(HttpResponse::Ok().body(format!("hello {}", session.subject)))
//! }
//! ```
//!
//! ## Server mode
//!
//! ```rust,no_run
//! #[tokio::main]
//! async fn main() -> rolegate::Result<()> {
//!     rolegate::server::builder::run_server("config/rolegate.yaml").await
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod config;
pub mod core;
pub mod server;
pub mod utils;

// Re-export main types
pub use auth::{AccessDecision, AccessGate, Denial, Role, RoleRequirement, Session, evaluate};
pub use config::Config;
pub use crate::core::RequestContext;
pub use utils::error::{GateError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build timestamp (seconds since the epoch)
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: env!("BUILD_TIME"),
            git_hash: env!("GIT_HASH"),
            rust_version: env!("RUST_VERSION"),
        }
    }
}

/// Build information
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
