//! Core data structures shared by the gate and its integrations

pub mod context;

pub use context::{RequestContext, parse_cookie_header};
