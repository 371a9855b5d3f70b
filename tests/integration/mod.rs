//! Integration tests for rolegate
//!
//! These tests drive the public API and the full HTTP application.
//! Identity is supplied by stub providers, real signed tokens, or a stub
//! session endpoint.

pub mod dashboard_route_tests;
pub mod gate_flow_tests;
pub mod remote_provider_tests;
