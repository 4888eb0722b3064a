//! User records as the admin dashboard sees them.

use std::cmp::Ordering;

use store_rating_core::{Email, Role, Searchable, SortColumn, UserId, format_rating};

/// A user row in the admin user list.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub address: String,
    pub role: Role,
    /// Average rating of the user's store; only store owners have one.
    pub rating: Option<f64>,
}

impl User {
    /// Rating shown in the list: one decimal for store owners, `None` for
    /// everyone else.
    #[must_use]
    pub fn display_rating(&self) -> Option<String> {
        match (self.role, self.rating) {
            (Role::StoreOwner, Some(rating)) => Some(format_rating(rating)),
            _ => None,
        }
    }
}

impl Searchable for User {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.email.as_str(),
            self.address.as_str(),
            self.role.as_str(),
        ]
    }
}

/// Sortable columns of the admin user list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserColumn {
    Name,
    Email,
    Address,
    Role,
}

impl SortColumn for UserColumn {
    type Record = User;

    const DEFAULT: Self = Self::Name;

    fn from_param(param: &str) -> Option<Self> {
        match param {
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "address" => Some(Self::Address),
            "role" => Some(Self::Role),
            _ => None,
        }
    }

    fn as_param(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Address => "address",
            Self::Role => "role",
        }
    }

    fn compare(&self, a: &User, b: &User) -> Ordering {
        match self {
            Self::Name => a.name.cmp(&b.name),
            Self::Email => a.email.cmp(&b.email),
            Self::Address => a.address.cmp(&b.address),
            Self::Role => a.role.as_str().cmp(b.role.as_str()),
        }
    }
}

/// A validated user submitted through the add-user form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: Email,
    pub address: String,
    pub role: Role,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use store_rating_core::{SortDirection, filter_by_query, sort_records};

    fn user(id: i32, name: &str, role: Role, rating: Option<f64>) -> User {
        User {
            id: UserId::new(id),
            name: name.to_string(),
            email: format!("user{id}@example.com"),
            address: "Main St, Noida".to_string(),
            role,
            rating,
        }
    }

    #[test]
    fn test_display_rating_only_for_store_owners() {
        assert_eq!(
            user(1, "Raman", Role::StoreOwner, Some(4.7)).display_rating(),
            Some("4.7".to_string())
        );
        assert_eq!(user(2, "Shyam", Role::StoreOwner, None).display_rating(), None);
        assert_eq!(user(3, "Urvil", Role::Admin, Some(4.0)).display_rating(), None);
        assert_eq!(user(4, "Gaurav", Role::User, None).display_rating(), None);
    }

    #[test]
    fn test_user_search_matches_role_identifier() {
        let users = vec![
            user(1, "Shyam Kumar", Role::User, None),
            user(2, "Raman", Role::StoreOwner, Some(4.7)),
        ];

        let owners = filter_by_query(users.clone(), "store_owner");
        assert_eq!(owners.len(), 1);
        assert_eq!(owners[0].name, "Raman");

        // The badge label is not searchable, only the identifier.
        assert!(filter_by_query(users, "store owner").is_empty());
    }

    #[test]
    fn test_user_sort_by_role_uses_identifier() {
        let mut users = vec![
            user(1, "A", Role::User, None),
            user(2, "B", Role::StoreOwner, Some(4.2)),
            user(3, "C", Role::Admin, None),
        ];

        sort_records(&mut users, UserColumn::Role, SortDirection::Asc);
        let roles: Vec<Role> = users.iter().map(|u| u.role).collect();
        assert_eq!(roles, vec![Role::Admin, Role::StoreOwner, Role::User]);
    }
}
