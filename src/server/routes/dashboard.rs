//! Dashboard pages
//!
//! Audit log and driver review check access as the first statement of the
//! handler; the history scope is wrapped by [`RequireRoles`]. Either way no
//! page output is produced before the gate has decided.

use crate::auth::{Role, RoleRequirement, Session};
use crate::core::RequestContext;
use crate::server::middleware::RequireRoles;
use crate::server::routes::{escape_html, html_page};
use crate::server::state::AppState;
use actix_web::{HttpResponse, web};
use std::sync::Arc;

/// Roles allowed to read the audit log
pub const AUDIT_LOG_ROLES: &[Role] = &[Role::Owner];

/// Roles allowed to review drivers
pub const DRIVER_REVIEW_ROLES: &[Role] = &[Role::Owner, Role::Staff];

/// Roles allowed to see trip history
pub fn history_requirement() -> RoleRequirement {
    RoleRequirement::only(Role::Owner)
        .or(Role::Staff)
        .or(Role::Driver)
}

/// Configure dashboard routes
pub fn configure_routes(cfg: &mut web::ServiceConfig, state: &AppState) {
    let history_gate = RequireRoles::new(Arc::clone(&state.gate), history_requirement());

    cfg.service(
        web::scope("/dashboard")
            .route("/audit-log", web::get().to(audit_log))
            .route("/driver-review", web::get().to(driver_review))
            .service(
                web::scope("/history")
                    .wrap(history_gate)
                    .route("", web::get().to(history)),
            ),
    );
}

async fn audit_log(state: web::Data<AppState>, ctx: RequestContext) -> HttpResponse {
    match state.gate.require_role(&ctx, AUDIT_LOG_ROLES).await {
        Ok(session) => render("Audit log", &session),
        Err(e) => e.response_for(Some(&ctx.request_id)),
    }
}

async fn driver_review(state: web::Data<AppState>, ctx: RequestContext) -> HttpResponse {
    match state.gate.require_role(&ctx, DRIVER_REVIEW_ROLES).await {
        Ok(session) => render("Driver review", &session),
        Err(e) => e.response_for(Some(&ctx.request_id)),
    }
}

async fn history(session: Session) -> HttpResponse {
    render("History", &session)
}

fn render(title: &str, session: &Session) -> HttpResponse {
    html_page(
        title,
        &format!(
            "<p>Signed in as <strong>{}</strong> ({})</p>",
            escape_html(&session.subject),
            escape_html(&session.role.to_string())
        ),
    )
}
