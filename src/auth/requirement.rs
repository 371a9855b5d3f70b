//! Role requirements

use super::role::Role;
use crate::utils::error::{GateError, Result};
use std::collections::BTreeSet;

/// Non-empty set of roles allowed through a gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleRequirement {
    allowed: BTreeSet<Role>,
}

impl RoleRequirement {
    /// Allow any of `roles`. An empty set can never be satisfied and is
    /// rejected.
    pub fn any_of<I>(roles: I) -> Result<Self>
    where
        I: IntoIterator<Item = Role>,
    {
        let allowed: BTreeSet<Role> = roles.into_iter().collect();
        if allowed.is_empty() {
            return Err(GateError::EmptyRequirement);
        }
        Ok(Self { allowed })
    }

    /// Allow exactly one role
    pub fn only(role: Role) -> Self {
        Self {
            allowed: BTreeSet::from([role]),
        }
    }

    /// Also allow `role`
    pub fn or(mut self, role: Role) -> Self {
        self.allowed.insert(role);
        self
    }

    /// Whether `role` satisfies this requirement
    pub fn permits(&self, role: Role) -> bool {
        self.allowed.contains(&role)
    }

    /// Allowed roles, in declaration order
    pub fn roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.allowed.iter().copied()
    }
}

impl std::fmt::Display for RoleRequirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tags: Vec<&str> = self.allowed.iter().map(Role::as_str).collect();
        write!(f, "{{{}}}", tags.join(", "))
    }
}
