//! Public landing pages
//!
//! Denied requests are redirected here. The sign-in flow itself lives
//! elsewhere; this page only shows where the caller will be sent back to.

use crate::server::routes::{escape_html, html_page};
use crate::server::state::AppState;
use actix_web::{HttpResponse, web};
use std::collections::HashMap;

/// Configure landing routes at the configured gate destinations, when those
/// are local paths
pub fn configure_routes(cfg: &mut web::ServiceConfig, state: &AppState) {
    let gate = state.config().gate();
    if let Some(path) = local_path(&gate.sign_in_path) {
        cfg.route(&path, web::get().to(sign_in));
    }
    if let Some(path) = local_path(&gate.forbidden_path) {
        cfg.route(&path, web::get().to(forbidden));
    }
}

/// Path component of a local destination, without any query
fn local_path(destination: &str) -> Option<String> {
    if !destination.starts_with('/') || destination.starts_with("//") {
        return None;
    }
    let path = destination.split('?').next().unwrap_or(destination);
    Some(path.to_string())
}

async fn sign_in(
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> HttpResponse {
    let return_to = state
        .config()
        .gate()
        .return_to_param
        .as_ref()
        .and_then(|param| query.get(param));

    let body = match return_to {
        Some(location) => format!(
            "<p>Sign in to continue to <code>{}</code>.</p>",
            escape_html(location)
        ),
        None => "<p>Sign in to continue.</p>".to_string(),
    };
    html_page("Sign in", &body)
}

async fn forbidden() -> HttpResponse {
    html_page(
        "Forbidden",
        "<p>Your account does not have access to that page.</p>",
    )
}
