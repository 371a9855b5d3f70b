//! HTTP server implementation
//!
//! This module provides the actix-web application: role-gated dashboard
//! pages, the landing pages denials redirect to, and the middleware and
//! extractors that wire the access gate into request handling.

pub mod builder;
pub mod extract;
mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;


pub use extract::request_context;
pub use server::{HttpServer, create_app};
pub use state::AppState;
