//! Helper functions for creating specific error types

use super::types::GateError;

impl GateError {
    pub fn unauthenticated<S: Into<String>>(location: S) -> Self {
        Self::Unauthenticated {
            location: location.into(),
        }
    }

    pub fn forbidden<S: Into<String>>(location: S) -> Self {
        Self::Forbidden {
            location: location.into(),
        }
    }

    pub fn identity_provider<S: Into<String>>(message: S) -> Self {
        Self::IdentityProvider(message.into())
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Whether this error is one of the two gate denials that end in a redirect
    pub fn is_redirect(&self) -> bool {
        matches!(self, Self::Unauthenticated { .. } | Self::Forbidden { .. })
    }

    /// Redirect destination for a gate denial
    pub fn redirect_location(&self) -> Option<&str> {
        match self {
            Self::Unauthenticated { location } | Self::Forbidden { location } => {
                Some(location.as_str())
            }
            _ => None,
        }
    }
}
