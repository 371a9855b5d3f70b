//! Utility modules
//!
//! - **error**: error taxonomy and its HTTP mapping
//! - **logging**: tracing subscriber setup

pub mod error;
pub mod logging;
