//! Records the dashboards display, and the per-visitor session state.

pub mod rating;
pub mod session;
pub mod store;
pub mod user;

pub use rating::{RatingColumn, RatingEntry};
pub use session::{SubmittedRating, Toast, ToastVariant};
pub use store::{NewStore, OwnerStore, PlatformStats, Store, StoreColumn, UserStore};
pub use user::{NewUser, User, UserColumn};
