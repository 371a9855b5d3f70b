//! Session read model

use super::role::Role;
use serde::{Deserialize, Serialize};

/// Role carried by a session. Tags the current role set does not know
/// (a session minted before a role was renamed, say) stay distinguishable
/// from known roles instead of being coerced into one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleClaim {
    /// A role from the current enumeration
    Known(Role),
    /// A tag no current role matches
    Unrecognized(String),
}

impl RoleClaim {
    /// Known role, if any
    pub fn role(&self) -> Option<Role> {
        match self {
            RoleClaim::Known(role) => Some(*role),
            RoleClaim::Unrecognized(_) => None,
        }
    }
}

impl From<&str> for RoleClaim {
    fn from(tag: &str) -> Self {
        match tag.parse::<Role>() {
            Ok(role) => RoleClaim::Known(role),
            Err(_) => RoleClaim::Unrecognized(tag.to_string()),
        }
    }
}

impl From<Role> for RoleClaim {
    fn from(role: Role) -> Self {
        RoleClaim::Known(role)
    }
}

impl std::fmt::Display for RoleClaim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoleClaim::Known(role) => write!(f, "{}", role),
            RoleClaim::Unrecognized(tag) => write!(f, "unrecognized({})", tag),
        }
    }
}

impl Serialize for RoleClaim {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RoleClaim::Known(role) => serializer.serialize_str(role.as_str()),
            RoleClaim::Unrecognized(tag) => serializer.serialize_str(tag),
        }
    }
}

impl<'de> Deserialize<'de> for RoleClaim {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(RoleClaim::from(tag.as_str()))
    }
}

/// Authenticated identity resolved for the current request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// User identifier assigned by the identity provider
    pub subject: String,
    /// Role claim
    pub role: RoleClaim,
    /// Expiry, when the provider reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Session {
    /// Create a session
    pub fn new<S: Into<String>, R: Into<RoleClaim>>(subject: S, role: R) -> Self {
        Self {
            subject: subject.into(),
            role: role.into(),
            expires_at: None,
        }
    }

    /// Set expiry
    pub fn with_expiry(mut self, expires_at: chrono::DateTime<chrono::Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    /// Known role, if any
    pub fn role(&self) -> Option<Role> {
        self.role.role()
    }
}
