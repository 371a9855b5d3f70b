//! HTTP middleware implementations
//!
//! - Request ID tracking
//! - Role gating for whole route scopes

mod request_id;
mod require_roles;


pub use request_id::{RequestIdMiddleware, RequestIdMiddlewareService};
pub use require_roles::{RequireRoles, RequireRolesService};
