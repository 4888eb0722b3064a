//! Backend services used by the route handlers.

pub mod fixtures;
pub mod mock_api;

pub use mock_api::{MockApi, MockApiError, MockSettings};
