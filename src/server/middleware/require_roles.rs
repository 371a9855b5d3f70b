//! Role gate middleware for route scopes
//!
//! Wrap a scope whose pages share one allowed-role set. The gate runs to
//! completion before the inner service is called; a denied request never
//! reaches it and gets the redirect response instead. On success the
//! `Session` is stored in request extensions for the `Session` extractor.

use crate::auth::{AccessGate, RoleRequirement};
use crate::server::extract::request_context;
use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::HttpMessage;
use futures::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use std::sync::Arc;

/// Middleware factory requiring one of a set of roles
#[derive(Debug, Clone)]
pub struct RequireRoles {
    gate: Arc<AccessGate>,
    requirement: Rc<RoleRequirement>,
}

impl RequireRoles {
    /// Gate a scope with `gate`, allowing the roles in `requirement`
    pub fn new(gate: Arc<AccessGate>, requirement: RoleRequirement) -> Self {
        Self {
            gate,
            requirement: Rc::new(requirement),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireRoles
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = RequireRolesService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireRolesService {
            service: Rc::new(service),
            gate: Arc::clone(&self.gate),
            requirement: Rc::clone(&self.requirement),
        }))
    }
}

/// Service implementation for the role gate middleware
pub struct RequireRolesService<S> {
    service: Rc<S>,
    gate: Arc<AccessGate>,
    requirement: Rc<RoleRequirement>,
}

impl<S, B> Service<ServiceRequest> for RequireRolesService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let gate = Arc::clone(&self.gate);
        let requirement = Rc::clone(&self.requirement);

        Box::pin(async move {
            let ctx = request_context(req.request());
            match gate.check_access(&ctx, &requirement).await {
                Ok(session) => {
                    req.extensions_mut().insert(session);
                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                }
                Err(e) => {
                    let response = e.response_for(Some(&ctx.request_id));
                    Ok(req.into_response(response).map_into_right_body())
                }
            }
        })
    }
}
