//! Error types for the access gate

use thiserror::Error;

/// Result type alias for rolegate
pub type Result<T> = std::result::Result<T, GateError>;

/// Main error type for rolegate
#[derive(Error, Debug)]
pub enum GateError {
    /// No session could be resolved; the render is replaced by a redirect
    /// to the sign-in destination.
    #[error("Unauthenticated: redirecting to {location}")]
    Unauthenticated { location: String },

    /// A session exists but its role is not in the allowed set; the render
    /// is replaced by a redirect to the forbidden destination.
    #[error("Forbidden: redirecting to {location}")]
    Forbidden { location: String },

    /// A gate was invoked with an empty role set
    #[error("Role requirement must name at least one role")]
    EmptyRequirement,

    /// The identity provider failed to answer
    #[error("Identity provider error: {0}")]
    IdentityProvider(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// JWT errors
    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}
