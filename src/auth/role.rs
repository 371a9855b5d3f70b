//! Role tags

use serde::{Deserialize, Serialize};

/// Permission level of a signed-in user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Business owner
    Owner,
    /// Office staff
    Staff,
    /// Driver
    Driver,
}

impl Role {
    /// Every known role
    pub const ALL: [Role; 3] = [Role::Owner, Role::Staff, Role::Driver];

    /// Wire tag
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Owner => "OWNER",
            Role::Staff => "STAFF",
            Role::Driver => "DRIVER",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "OWNER" => Ok(Role::Owner),
            "STAFF" => Ok(Role::Staff),
            "DRIVER" => Ok(Role::Driver),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}
