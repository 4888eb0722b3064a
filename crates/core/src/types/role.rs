//! Platform roles.

use serde::{Deserialize, Serialize};

/// Error returned when a role string is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid role: {0}")]
pub struct RoleError(pub String);

/// Role of a platform account.
///
/// Each role has its own dashboard. The snake-case string form is what the
/// forms submit and what the user list sorts and searches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Normal user who browses and rates stores.
    #[default]
    User,
    /// Owner of a store, sees who rated it.
    StoreOwner,
    /// System administrator, manages stores and users.
    Admin,
}

impl Role {
    /// All roles in the order the add-user form offers them.
    pub const ALL: [Self; 3] = [Self::User, Self::StoreOwner, Self::Admin];

    /// Snake-case identifier (`user`, `store_owner`, `admin`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::StoreOwner => "store_owner",
            Self::Admin => "admin",
        }
    }

    /// Short badge label used in the user list.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::User => "User",
            Self::StoreOwner => "Store Owner",
            Self::Admin => "Admin",
        }
    }

    /// Long label used in the role picker.
    #[must_use]
    pub const fn option_label(&self) -> &'static str {
        match self {
            Self::User => "Normal User",
            Self::StoreOwner => "Store Owner",
            Self::Admin => "System Administrator",
        }
    }

    /// CSS class for the role badge.
    #[must_use]
    pub const fn badge_class(&self) -> &'static str {
        match self {
            Self::User => "badge badge-outline",
            Self::StoreOwner => "badge badge-blue",
            Self::Admin => "badge badge-red",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "store_owner" => Ok(Self::StoreOwner),
            "admin" => Ok(Self::Admin),
            _ => Err(RoleError(s.to_string())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_str() {
        assert_eq!("user".parse::<Role>().unwrap(), Role::User);
        assert_eq!("store_owner".parse::<Role>().unwrap(), Role::StoreOwner);
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert!("owner".parse::<Role>().is_err());
        assert!("Admin".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_display_matches_as_str() {
        for role in Role::ALL {
            assert_eq!(role.to_string(), role.as_str());
        }
    }

    #[test]
    fn test_role_serde() {
        let json = serde_json::to_string(&Role::StoreOwner).unwrap();
        assert_eq!(json, "\"store_owner\"");
        let role: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, Role::Admin);
    }

    #[test]
    fn test_default_role_is_user() {
        assert_eq!(Role::default(), Role::User);
    }
}
