//! Store records as the dashboards see them.

use std::cmp::Ordering;

use store_rating_core::{Email, Score, Searchable, SortColumn, StoreId};

/// A store row in the admin store list.
#[derive(Debug, Clone, PartialEq)]
pub struct Store {
    pub id: StoreId,
    pub name: String,
    pub email: String,
    pub address: String,
    /// Average rating across all users.
    pub rating: f64,
}

impl Searchable for Store {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.address.as_str()]
    }
}

/// Sortable columns of the admin store list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreColumn {
    Name,
    Email,
    Address,
    Rating,
}

impl SortColumn for StoreColumn {
    type Record = Store;

    const DEFAULT: Self = Self::Name;

    fn from_param(param: &str) -> Option<Self> {
        match param {
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "address" => Some(Self::Address),
            "rating" => Some(Self::Rating),
            _ => None,
        }
    }

    fn as_param(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Address => "address",
            Self::Rating => "rating",
        }
    }

    fn compare(&self, a: &Store, b: &Store) -> Ordering {
        match self {
            Self::Name => a.name.cmp(&b.name),
            Self::Email => a.email.cmp(&b.email),
            Self::Address => a.address.cmp(&b.address),
            Self::Rating => a.rating.total_cmp(&b.rating),
        }
    }
}

/// A store card in the end-user store browser.
#[derive(Debug, Clone, PartialEq)]
pub struct UserStore {
    pub id: StoreId,
    pub name: String,
    pub address: String,
    /// Overall rating across all users.
    pub rating: f64,
    /// The current user's own rating, if they gave one.
    pub user_rating: Option<Score>,
}

impl Searchable for UserStore {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.address.as_str()]
    }
}

/// Summary of the store shown on the owner dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnerStore {
    pub name: String,
    pub address: String,
    pub average_rating: f64,
    pub total_ratings: u32,
    pub total_users: u32,
}

/// Platform-wide totals on the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformStats {
    pub total_users: u32,
    pub total_stores: u32,
    pub total_ratings: u32,
}

/// A validated store submitted through the add-store form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStore {
    pub name: String,
    pub email: Email,
    pub address: String,
}
