//! Error handling for rolegate
//!
//! This module defines the error taxonomy used by the gate, the identity
//! providers and the configuration layer, and how each error is rendered
//! over HTTP.

#![allow(missing_docs)]

mod helpers;
mod response;
mod types;

pub use response::{ErrorDetail, ErrorResponse};
pub use types::{GateError, Result};
