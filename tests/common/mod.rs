//! Common test utilities for rolegate
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::common::fixtures::{StaticProvider, SessionFactory};
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let provider = StaticProvider::signed_in("owner-1", Role::Owner);
//!     let cookie = SessionFactory::cookie("staff-1", Role::Staff);
//!     // ...
//! }
//! ```

pub mod fixtures;

// Re-export commonly used items
pub use fixtures::{SessionFactory, StaticProvider, jwt_app_state};

/// Assert that a result is Ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert that a result is Err
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(v) => panic!("Expected Err, got Ok: {:?}", v),
            Err(e) => e,
        }
    };
}
