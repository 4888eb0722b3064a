//! Data table component types.
//!
//! A table is described once by a `DataTableConfig` (columns, search
//! placeholder, empty-state text) and rendered by the list templates with
//! `partials/table_head.html`. Sortable headers become links that apply the
//! next sort state while keeping the active tab and search query.

use store_rating_core::{SortColumn, SortState};

/// Column definition for a data table.
#[derive(Debug, Clone)]
pub struct TableColumn {
    /// Sort parameter value, and unique key for the column.
    pub key: String,
    /// Display label for the column header.
    pub label: String,
    /// Whether the column is sortable.
    pub sortable: bool,
}

impl TableColumn {
    /// Create a new sortable column.
    #[must_use]
    pub fn sortable(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            sortable: true,
        }
    }

    /// Create a new non-sortable column.
    #[must_use]
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            sortable: false,
        }
    }
}

/// Configuration for a data table.
#[derive(Debug, Clone)]
pub struct DataTableConfig {
    /// Unique table identifier.
    pub table_id: String,
    /// Column definitions.
    pub columns: Vec<TableColumn>,
    /// Search placeholder text.
    pub search_placeholder: String,
    /// Text shown when no row matches.
    pub empty_title: String,
    /// Whether rows carry view/edit/delete actions.
    pub has_row_actions: bool,
}

impl DataTableConfig {
    /// Create a new data table configuration.
    #[must_use]
    pub fn new(table_id: &str) -> Self {
        Self {
            table_id: table_id.to_string(),
            columns: vec![],
            search_placeholder: "Search...".to_string(),
            empty_title: "No items found".to_string(),
            has_row_actions: false,
        }
    }

    /// Add a column.
    #[must_use]
    pub fn column(mut self, column: TableColumn) -> Self {
        self.columns.push(column);
        self
    }

    /// Set search placeholder.
    #[must_use]
    pub fn search_placeholder(mut self, placeholder: &str) -> Self {
        self.search_placeholder = placeholder.to_string();
        self
    }

    /// Set the empty-state text.
    #[must_use]
    pub fn empty_state(mut self, title: &str) -> Self {
        self.empty_title = title.to_string();
        self
    }

    /// Add a trailing actions column.
    #[must_use]
    pub const fn with_row_actions(mut self) -> Self {
        self.has_row_actions = true;
        self
    }

    /// Number of columns including the actions column, for `colspan`.
    #[must_use]
    pub fn column_span(&self) -> usize {
        self.columns.len() + usize::from(self.has_row_actions)
    }

    /// Build the header row for the current sort state.
    ///
    /// `base_params` is the already-encoded query string (tab, search) that
    /// header links must keep.
    #[must_use]
    pub fn header_cells<K: SortColumn>(
        &self,
        state: &SortState<K>,
        path: &str,
        base_params: &str,
    ) -> Vec<HeaderCell> {
        self.columns
            .iter()
            .map(|column| {
                let key = column.sortable.then(|| K::from_param(&column.key)).flatten();
                match key {
                    Some(key) => {
                        let next = state.toggle(key);
                        HeaderCell {
                            label: column.label.clone(),
                            href: Some(sort_href(path, base_params, key.as_param(), next.direction.as_str())),
                            indicator: state.indicator(key).unwrap_or_default(),
                        }
                    }
                    None => HeaderCell {
                        label: column.label.clone(),
                        href: None,
                        indicator: "",
                    },
                }
            })
            .collect()
    }
}

/// A rendered column header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub label: String,
    /// Link that sorts by this column, for sortable columns.
    pub href: Option<String>,
    /// Sort arrow, empty unless this is the active column.
    pub indicator: &'static str,
}

fn sort_href(path: &str, base_params: &str, sort: &str, dir: &str) -> String {
    if base_params.is_empty() {
        format!("{path}?sort={sort}&dir={dir}")
    } else {
        format!("{path}?{base_params}&sort={sort}&dir={dir}")
    }
}

/// Build the admin stores table configuration.
#[must_use]
pub fn stores_table_config() -> DataTableConfig {
    DataTableConfig::new("stores")
        .column(TableColumn::sortable("name", "Name"))
        .column(TableColumn::sortable("email", "Email"))
        .column(TableColumn::sortable("address", "Address"))
        .column(TableColumn::sortable("rating", "Rating"))
        .with_row_actions()
        .search_placeholder("Search stores...")
        .empty_state("No stores found")
}

/// Build the admin users table configuration.
#[must_use]
pub fn users_table_config() -> DataTableConfig {
    DataTableConfig::new("users")
        .column(TableColumn::sortable("name", "Name"))
        .column(TableColumn::sortable("email", "Email"))
        .column(TableColumn::sortable("address", "Address"))
        .column(TableColumn::sortable("role", "Role"))
        .column(TableColumn::new("rating", "Rating"))
        .with_row_actions()
        .search_placeholder("Search users...")
        .empty_state("No users found")
}

/// Build the store owner's ratings table configuration.
#[must_use]
pub fn ratings_table_config() -> DataTableConfig {
    DataTableConfig::new("ratings")
        .column(TableColumn::sortable("name", "Name"))
        .column(TableColumn::sortable("email", "Email"))
        .column(TableColumn::sortable("rating", "Rating"))
        .column(TableColumn::sortable("date", "Date"))
        .search_placeholder("Search users...")
        .empty_state("No users found")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::models::{StoreColumn, UserColumn};
    use store_rating_core::SortDirection;

    #[test]
    fn test_column_span_counts_actions() {
        assert_eq!(stores_table_config().column_span(), 5);
        assert_eq!(users_table_config().column_span(), 6);
        assert_eq!(ratings_table_config().column_span(), 4);
    }

    #[test]
    fn test_header_cells_initial_state() {
        let config = stores_table_config();
        let state = SortState::<StoreColumn>::initial();
        let cells = config.header_cells(&state, "/admin/dashboard", "tab=stores");

        assert_eq!(cells.len(), 4);
        assert_eq!(cells[0].label, "Name");
        assert_eq!(cells[0].indicator, "↑");
        assert_eq!(
            cells[0].href.as_deref(),
            Some("/admin/dashboard?tab=stores&sort=name&dir=desc")
        );
        assert_eq!(cells[3].indicator, "");
        assert_eq!(
            cells[3].href.as_deref(),
            Some("/admin/dashboard?tab=stores&sort=rating&dir=asc")
        );
    }

    #[test]
    fn test_header_cells_descending_flips_back() {
        let config = stores_table_config();
        let state = SortState {
            key: StoreColumn::Email,
            direction: SortDirection::Desc,
        };
        let cells = config.header_cells(&state, "/admin/dashboard", "");

        assert_eq!(cells[1].indicator, "↓");
        assert_eq!(
            cells[1].href.as_deref(),
            Some("/admin/dashboard?sort=email&dir=asc")
        );
        assert_eq!(cells[0].indicator, "");
    }

    #[test]
    fn test_non_sortable_column_has_no_link() {
        let config = users_table_config();
        let state = SortState::<UserColumn>::initial();
        let cells = config.header_cells(&state, "/admin/dashboard", "tab=users");

        let rating = cells.iter().find(|c| c.label == "Rating").unwrap();
        assert_eq!(rating.href, None);
        assert_eq!(rating.indicator, "");
    }
}
