//! Query parameters and view types shared by the dashboard pages.

use serde::Deserialize;

use store_rating_core::{
    Score, Searchable, SortColumn, SortState, StarFill, filter_by_query, format_rating,
};

use crate::models::PlatformStats;

// =============================================================================
// Query Parameters
// =============================================================================

/// Query parameters for a list page with search and sorting.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Active dashboard tab.
    pub tab: Option<String>,
    /// Free-text search query.
    pub q: Option<String>,
    /// Sort column key.
    pub sort: Option<String>,
    /// Sort direction (asc/desc).
    pub dir: Option<String>,
}

impl ListQuery {
    /// The search query, empty when absent.
    #[must_use]
    pub fn search(&self) -> &str {
        self.q.as_deref().unwrap_or_default()
    }

    /// Requested sort state, if the `sort` parameter names a known column.
    #[must_use]
    pub fn sort_state<K: SortColumn>(&self) -> Option<SortState<K>> {
        SortState::from_params(self.sort.as_deref(), self.dir.as_deref())
    }
}

/// "name ↑" style summary of the active sort.
#[must_use]
pub fn sort_summary<K: SortColumn>(state: &SortState<K>) -> String {
    format!("{} {}", state.key.as_param(), state.direction.arrow())
}

/// Build query string parameters that sort links must keep.
#[must_use]
pub fn build_preserve_params(tab: Option<&str>, search: &str) -> String {
    let mut params = Vec::new();

    if let Some(tab) = tab {
        params.push(format!("tab={}", urlencoding::encode(tab)));
    }
    if !search.is_empty() {
        params.push(format!("q={}", urlencoding::encode(search)));
    }

    params.join("&")
}

// =============================================================================
// Listing
// =============================================================================

/// Records after search and sort, with the sort state to display.
pub struct Listing<K: SortColumn> {
    pub records: Vec<K::Record>,
    pub sort: SortState<K>,
}

/// Filter `records` by the search query, then sort them if a sort column
/// was requested.
///
/// Without a `sort` parameter the fetched order is kept and the default
/// sort state is reported for the header indicator.
pub fn apply_listing<K>(records: Vec<K::Record>, query: &ListQuery) -> Listing<K>
where
    K: SortColumn,
    K::Record: Searchable,
{
    let mut records = filter_by_query(records, query.search());
    let sort = match query.sort_state::<K>() {
        Some(state) => {
            state.apply(&mut records);
            state
        }
        None => SortState::initial(),
    };

    Listing { records, sort }
}

// =============================================================================
// View Types
// =============================================================================

/// A link in a dashboard tab bar.
#[derive(Debug, Clone)]
pub struct TabLink {
    pub label: &'static str,
    pub href: String,
    /// `tab` or `tab tab-active`.
    pub class: &'static str,
}

impl TabLink {
    #[must_use]
    pub fn new(label: &'static str, href: String, active: bool) -> Self {
        Self {
            label,
            href,
            class: if active { "tab tab-active" } else { "tab" },
        }
    }
}

/// A hidden input carried by the search form.
#[derive(Debug, Clone)]
pub struct HiddenField {
    pub name: &'static str,
    pub value: String,
}

/// The search box above a list.
///
/// Submitting it keeps the active tab and sort.
#[derive(Debug, Clone)]
pub struct SearchBox {
    pub action: &'static str,
    pub placeholder: String,
    pub value: String,
    pub hidden: Vec<HiddenField>,
}

impl SearchBox {
    #[must_use]
    pub fn new(action: &'static str, placeholder: &str, tab: Option<&str>, query: &ListQuery) -> Self {
        let kept = [
            ("tab", tab),
            ("sort", query.sort.as_deref()),
            ("dir", query.dir.as_deref()),
        ];
        let hidden = kept
            .into_iter()
            .filter_map(|(name, value)| {
                value.map(|value| HiddenField {
                    name,
                    value: value.to_string(),
                })
            })
            .collect();

        Self {
            action,
            placeholder: placeholder.to_string(),
            value: query.search().to_string(),
            hidden,
        }
    }
}

/// Platform totals for the admin stat cards.
#[derive(Debug, Clone)]
pub struct StatsView {
    pub total_users: u32,
    pub total_stores: u32,
    pub total_ratings: u32,
}

impl From<PlatformStats> for StatsView {
    fn from(stats: PlatformStats) -> Self {
        Self {
            total_users: stats.total_users,
            total_stores: stats.total_stores,
            total_ratings: stats.total_ratings,
        }
    }
}

/// CSS classes for five stars showing an integer score.
#[must_use]
pub fn score_stars(score: Score) -> Vec<&'static str> {
    score
        .stars()
        .iter()
        .map(|&filled| {
            if filled {
                StarFill::Full.css_class()
            } else {
                StarFill::Empty.css_class()
            }
        })
        .collect()
}

/// CSS classes for five stars showing a fractional average.
#[must_use]
pub fn average_stars(average: f64) -> Vec<&'static str> {
    StarFill::for_average(average)
        .iter()
        .map(StarFill::css_class)
        .collect()
}

/// An average rating ready for display.
#[derive(Debug, Clone)]
pub struct AverageView {
    /// One decimal, e.g. "4.2".
    pub value: String,
    pub stars: Vec<&'static str>,
}

impl AverageView {
    #[must_use]
    pub fn new(average: f64) -> Self {
        Self {
            value: format_rating(average),
            stars: average_stars(average),
        }
    }
}
