//! Core types for the store rating platform.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod rating;
pub mod role;

pub use email::{Email, EmailError};
pub use id::*;
pub use rating::{RatingDistribution, Score, ScoreError, StarFill, format_rating};
pub use role::{Role, RoleError};
