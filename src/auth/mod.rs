//! Role-based access gating
//!
//! Pages declare which roles may see them. Before anything is rendered the
//! [`AccessGate`] resolves the caller's session through an
//! [`IdentityProvider`] and either returns the session or fails with a
//! redirect error.

pub mod gate;
pub mod provider;
pub mod requirement;
pub mod role;
pub mod session;

pub use gate::{AccessDecision, AccessGate, Denial, evaluate};
pub use provider::{IdentityProvider, JwtSessionProvider, RemoteSessionProvider, SessionClaims};
pub use requirement::RoleRequirement;
pub use role::Role;
pub use session::{RoleClaim, Session};
