//! Hardcoded records served by the mock backend.
//!
//! Each list is rebuilt on every call so no request can observe another's
//! changes. The lists are independent of each other: the same store can
//! carry a different name or address in two of them.

use chrono::NaiveDate;

use store_rating_core::{RatingId, Role, Score, StoreId, UserId};

use crate::models::{OwnerStore, PlatformStats, RatingEntry, Store, User, UserStore};

fn store(id: i32, name: &str, email: &str, address: &str, rating: f64) -> Store {
    Store {
        id: StoreId::new(id),
        name: name.to_string(),
        email: email.to_string(),
        address: address.to_string(),
        rating,
    }
}

fn user(id: i32, name: &str, email: &str, address: &str, role: Role, rating: Option<f64>) -> User {
    User {
        id: UserId::new(id),
        name: name.to_string(),
        email: email.to_string(),
        address: address.to_string(),
        role,
        rating,
    }
}

fn rating_entry(id: i32, name: &str, email: &str, score: Score, date: NaiveDate) -> RatingEntry {
    RatingEntry {
        id: RatingId::new(id),
        name: name.to_string(),
        email: email.to_string(),
        rating: score,
        date,
    }
}

fn user_store(
    id: i32,
    name: &str,
    address: &str,
    rating: f64,
    user_rating: Option<Score>,
) -> UserStore {
    UserStore {
        id: StoreId::new(id),
        name: name.to_string(),
        address: address.to_string(),
        rating,
        user_rating,
    }
}

/// Scores in fixtures are literals within 1..=5.
fn score(value: u8) -> Score {
    Score::new(value).unwrap_or_else(|_| unreachable!("fixture score {value} out of range"))
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| unreachable!("fixture date {year}-{month}-{day} is invalid"))
}

/// Stores in the admin store list.
#[must_use]
pub fn admin_stores() -> Vec<Store> {
    vec![
        store(
            1,
            "Grocery Express",
            "contact@groceryexpress.com",
            "123 Main St, Noida Sector 45, UP 201303",
            4.5,
        ),
        store(
            2,
            "Tech Shyam",
            "info@techhaven.com",
            "456 Main St, Noida Sector 62, UP 201301",
            3.8,
        ),
        store(
            3,
            "Fashion Boutique Parlour",
            "hello@fashionboutique.com",
            "789 Main St, Noida Sector 15, UP 201301",
            4.2,
        ),
        store(
            4,
            "Home Essentials",
            "support@homeessentials.com",
            "101 Main St, Noida, UP 201305",
            3.9,
        ),
        store(
            5,
            "Pine Tree Tech",
            "books@bookworm.com",
            "202 Main St, Noida, UP 201309",
            4.7,
        ),
        store(
            6,
            "Gaurav Delights",
            "taste@gourmetdelights.com",
            "303 Main St, Noida, UP 201307",
            4.4,
        ),
    ]
}

/// Accounts in the admin user list.
#[must_use]
pub fn admin_users() -> Vec<User> {
    vec![
        user(
            1,
            "Shyam Kumar",
            "shyam@example.com",
            "123 Main St, Noida, UP 201303",
            Role::User,
            None,
        ),
        user(
            2,
            "Gaurav Kumar",
            "gaurav@example.com",
            "456 Main St, Noida, UP 201303",
            Role::User,
            None,
        ),
        user(
            3,
            "Abhishek Kumar",
            "abhi@example.com",
            "789 Main St, Noida, UP 201303",
            Role::StoreOwner,
            Some(4.2),
        ),
        user(
            4,
            "Shyam Urvil",
            "urvil@example.com",
            "101 Main St, Noida, UP 201303",
            Role::Admin,
            None,
        ),
        user(
            5,
            "Raman",
            "raman@example.com",
            "202 Main St, Noida, UP 201303",
            Role::StoreOwner,
            Some(4.7),
        ),
        user(
            6,
            "Akanksha Gupta",
            "aku@example.com",
            "Main St, Noida, UP 201303",
            Role::User,
            None,
        ),
    ]
}

/// Users who rated the owner's store.
#[must_use]
pub fn store_ratings() -> Vec<RatingEntry> {
    vec![
        rating_entry(1, "Shyam Kumar", "shyam@example.com", score(4), date(2023, 5, 15)),
        rating_entry(2, "Gaurav Kumar", "gaurav@example.com", score(5), date(2023, 5, 20)),
        rating_entry(3, "Abhishek Kumar", "abhi@example.com", score(3), date(2023, 6, 1)),
        rating_entry(4, "Shyam Urvil", "urvil@example.com", score(4), date(2023, 6, 10)),
        rating_entry(5, "Raman", "raman@example.com", score(5), date(2023, 6, 15)),
        rating_entry(6, "Akanksha Gupta", "aku@example.com", score(2), date(2023, 6, 20)),
    ]
}

/// Stores in the end-user store browser.
#[must_use]
pub fn user_stores() -> Vec<UserStore> {
    vec![
        user_store(1, "Grocery Express", "123 Main St, New York, NY 10001", 4.5, Some(score(4))),
        user_store(2, "Tech Haven", "456 Broadway, New York, NY 10002", 3.8, None),
        user_store(3, "Fashion Boutique", "789 5th Ave, New York, NY 10003", 4.2, Some(score(5))),
        user_store(4, "Home Essentials", "101 Park Ave, New York, NY 10004", 3.9, Some(score(3))),
        user_store(5, "Bookworm's Paradise", "202 Lexington Ave, New York, NY 10005", 4.7, None),
        user_store(6, "Gourmet Delights", "303 Madison Ave, New York, NY 10006", 4.4, Some(score(4))),
    ]
}

/// The store belonging to the signed-in owner.
#[must_use]
pub fn owner_store() -> OwnerStore {
    OwnerStore {
        name: "Tech Haven".to_string(),
        address: "456 Broadway, New York, NY 10002".to_string(),
        average_rating: 4.2,
        total_ratings: 45,
        total_users: 38,
    }
}

/// Platform totals on the admin dashboard.
#[must_use]
pub const fn platform_stats() -> PlatformStats {
    PlatformStats {
        total_users: 124,
        total_stores: 48,
        total_ratings: 1256,
    }
}
