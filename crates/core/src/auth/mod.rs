//! Authentication and authorization primitives.
//!
//! This module provides:
//! - Password hashing with Argon2id
//! - Password verification
//! - Role definitions with explicit capability checks

mod password;

pub use password::{PasswordError, hash_password, verify_password};

use serde::{Deserialize, Serialize};

/// User roles.
///
/// A user has exactly one role. Authorization is expressed as explicit
/// capability checks on the role instead of ad-hoc role-name comparisons
/// scattered through handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full access, including user and settings management.
    Superadmin,
    /// Manages inventory and approves item requests.
    Admin,
    /// Browses products and files item requests.
    User,
}

impl Role {
    /// Parses a role from its stored name (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "superadmin" => Some(Self::Superadmin),
            "admin" => Some(Self::Admin),
            "user" => Some(Self::User),
            _ => None,
        }
    }

    /// Returns the string representation of the role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Superadmin => "superadmin",
            Self::Admin => "admin",
            Self::User => "user",
        }
    }

    /// Returns true if this role can approve, reject, or delete item requests.
    #[must_use]
    pub const fn can_approve_requests(&self) -> bool {
        matches!(self, Self::Superadmin | Self::Admin)
    }

    /// Returns true if this role can create and edit products and categories.
    #[must_use]
    pub const fn can_manage_inventory(&self) -> bool {
        matches!(self, Self::Superadmin | Self::Admin)
    }

    /// Returns true if this role can see every user's item requests.
    #[must_use]
    pub const fn can_view_all_requests(&self) -> bool {
        matches!(self, Self::Superadmin | Self::Admin)
    }

    /// Returns true if this role can manage users and email settings.
    #[must_use]
    pub const fn can_manage_users(&self) -> bool {
        matches!(self, Self::Superadmin | Self::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse() {
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("Superadmin"), Some(Role::Superadmin));
        assert_eq!(Role::parse("USER"), Some(Role::User));
        assert_eq!(Role::parse("ghost"), None);
    }

    #[test]
    fn test_role_capabilities() {
        assert!(Role::Superadmin.can_approve_requests());
        assert!(Role::Admin.can_approve_requests());
        assert!(!Role::User.can_approve_requests());

        assert!(Role::Admin.can_manage_inventory());
        assert!(!Role::User.can_manage_inventory());

        assert!(Role::Admin.can_view_all_requests());
        assert!(!Role::User.can_view_all_requests());

        assert!(Role::Superadmin.can_manage_users());
        assert!(!Role::User.can_manage_users());
    }

    #[test]
    fn test_role_display() {
        assert_eq!(Role::Admin.to_string(), "admin");
        assert_eq!(Role::Superadmin.to_string(), "superadmin");
    }
}
