//! Request extractors
//!
//! `RequestContext` is built fresh from every request. `Session` can only be
//! extracted inside a scope wrapped by [`RequireRoles`](super::middleware::RequireRoles).

use crate::auth::Session;
use crate::core::RequestContext;
use crate::utils::error::GateError;
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use futures::future::{Ready, ready};
use uuid::Uuid;

/// Request ID header name
pub const REQUEST_ID_HEADER: &str = "x-request-id";

fn header_value(req: &HttpRequest, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

/// Capture what the gate and identity providers need from `req`
pub fn request_context(req: &HttpRequest) -> RequestContext {
    let request_id =
        header_value(req, REQUEST_ID_HEADER).unwrap_or_else(|| Uuid::new_v4().to_string());
    let client_ip = req.connection_info().realip_remote_addr().map(str::to_string);

    let mut ctx = RequestContext::new(req.path())
        .with_request_id(request_id)
        .with_query(req.query_string())
        .with_client_info(client_ip, header_value(req, "user-agent"));

    if let Some(cookie) = header_value(req, "cookie") {
        ctx = ctx.with_cookie_header(cookie);
    }
    if let Some(authorization) = header_value(req, "authorization") {
        ctx = ctx.with_authorization(authorization);
    }
    ctx
}

impl FromRequest for RequestContext {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(request_context(req)))
    }
}

impl FromRequest for Session {
    type Error = GateError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<Session>()
                .cloned()
                .ok_or_else(|| GateError::internal("Session extracted outside a role-gated scope")),
        )
    }
}
