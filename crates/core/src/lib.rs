//! Store Rating Core - Shared types library.
//!
//! This crate provides the types and pure logic used by the store rating
//! dashboards:
//! - `web` - Role-based dashboards for admins, store owners and users
//! - `integration-tests` - End-to-end tests against the running router
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP,
//! no timers. This keeps it lightweight and easy to test.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, emails, roles and rating scores
//! - [`listing`] - Case-insensitive search and toggleable column sorting
//! - [`validation`] - Field-level validation for the "add store" and "add user" forms

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod listing;
pub mod types;
pub mod validation;

pub use listing::{Searchable, SortColumn, SortDirection, SortState, filter_by_query, sort_records};
pub use types::*;
pub use validation::{FieldErrors, NewStoreForm, NewUserForm};
