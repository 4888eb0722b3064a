//! Reusable UI component definitions.

pub mod data_table;

pub use data_table::{DataTableConfig, HeaderCell, TableColumn};
