//! In-memory search and column sorting for dashboard lists.
//!
//! Every list widget works the same way: take the fetched records, keep the
//! ones whose designated text fields contain the search query (ignoring
//! case), then optionally sort by a column. Clicking a column header toggles
//! between ascending and descending on that column.

use std::cmp::Ordering;

/// A record that can be matched against a free-text search query.
pub trait Searchable {
    /// The text fields the search box looks at.
    fn search_fields(&self) -> Vec<&str>;

    /// Whether any search field contains `needle`, which must already be
    /// lowercased.
    fn matches(&self, needle: &str) -> bool {
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// A sortable column of some record type.
///
/// Implemented by small per-list enums, e.g. `StoreColumn::{Name, Email, ...}`.
pub trait SortColumn: Copy + PartialEq + Sized {
    /// The record type the column belongs to.
    type Record;

    /// Column used for the initial sort indicator.
    const DEFAULT: Self;

    /// Parse the `sort` query parameter.
    fn from_param(param: &str) -> Option<Self>;

    /// The value written to the `sort` query parameter.
    fn as_param(&self) -> &'static str;

    /// Ascending comparison of two records on this column.
    fn compare(&self, a: &Self::Record, b: &Self::Record) -> Ordering;
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Parse the `dir` query parameter. Anything but `desc` is ascending.
    #[must_use]
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("desc") => Self::Desc,
            _ => Self::Asc,
        }
    }

    /// The value written to the `dir` query parameter.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// The opposite direction.
    #[must_use]
    pub const fn toggled(&self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Arrow shown next to the active column header.
    #[must_use]
    pub const fn arrow(&self) -> &'static str {
        match self {
            Self::Asc => "↑",
            Self::Desc => "↓",
        }
    }
}

/// The active sort column and direction of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState<K> {
    pub key: K,
    pub direction: SortDirection,
}

impl<K: SortColumn> SortState<K> {
    /// Sort state of a freshly loaded list: default column, ascending.
    #[must_use]
    pub fn initial() -> Self {
        Self {
            key: K::DEFAULT,
            direction: SortDirection::Asc,
        }
    }

    /// Read the `sort`/`dir` query parameters.
    ///
    /// Returns `None` when no known column is requested, in which case the
    /// list keeps its fetched order.
    #[must_use]
    pub fn from_params(sort: Option<&str>, dir: Option<&str>) -> Option<Self> {
        let key = K::from_param(sort?)?;
        Some(Self {
            key,
            direction: SortDirection::from_param(dir),
        })
    }

    /// State after clicking the header of `key`.
    ///
    /// Clicking the active column while ascending flips to descending;
    /// anything else sorts ascending on the clicked column.
    #[must_use]
    pub fn toggle(&self, key: K) -> Self {
        let direction = if self.key == key && self.direction == SortDirection::Asc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        Self { key, direction }
    }

    /// Arrow to show on the header of `key`, if it is the active column.
    #[must_use]
    pub fn indicator(&self, key: K) -> Option<&'static str> {
        (self.key == key).then(|| self.direction.arrow())
    }

    /// Sort `records` in place according to this state.
    pub fn apply(&self, records: &mut [K::Record]) {
        sort_records(records, self.key, self.direction);
    }
}

/// Keep the records matching `query`, in their original order.
///
/// A blank query (empty or whitespace only) keeps everything. Otherwise the
/// query is lowercased, but not trimmed, and compared against each record's
/// lowercased search fields by substring.
#[must_use]
pub fn filter_by_query<T: Searchable>(records: Vec<T>, query: &str) -> Vec<T> {
    if query.trim().is_empty() {
        return records;
    }

    let needle = query.to_lowercase();
    records
        .into_iter()
        .filter(|record| record.matches(&needle))
        .collect()
}

/// Stable sort on `key`.
///
/// Descending order reverses the comparator rather than the output, so
/// records that compare equal keep their relative order either way.
pub fn sort_records<K: SortColumn>(records: &mut [K::Record], key: K, direction: SortDirection) {
    records.sort_by(|a, b| {
        let ordering = key.compare(a, b);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        name: &'static str,
        city: &'static str,
        score: f64,
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.name, self.city]
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum RowColumn {
        Name,
        City,
        Score,
    }

    impl SortColumn for RowColumn {
        type Record = Row;

        const DEFAULT: Self = Self::Name;

        fn from_param(param: &str) -> Option<Self> {
            match param {
                "name" => Some(Self::Name),
                "city" => Some(Self::City),
                "score" => Some(Self::Score),
                _ => None,
            }
        }

        fn as_param(&self) -> &'static str {
            match self {
                Self::Name => "name",
                Self::City => "city",
                Self::Score => "score",
            }
        }

        fn compare(&self, a: &Row, b: &Row) -> Ordering {
            match self {
                Self::Name => a.name.cmp(b.name),
                Self::City => a.city.cmp(b.city),
                Self::Score => a.score.total_cmp(&b.score),
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: 1, name: "Grocery Express", city: "Noida", score: 4.5 },
            Row { id: 2, name: "Tech Shyam", city: "Delhi", score: 3.8 },
            Row { id: 3, name: "Home Essentials", city: "Noida", score: 3.9 },
            Row { id: 4, name: "Pine Tree Tech", city: "Pune", score: 4.5 },
        ]
    }

    fn ids(rows: &[Row]) -> Vec<u32> {
        rows.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_blank_query_keeps_everything() {
        assert_eq!(ids(&filter_by_query(rows(), "")), vec![1, 2, 3, 4]);
        assert_eq!(ids(&filter_by_query(rows(), "   ")), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        assert_eq!(ids(&filter_by_query(rows(), "TECH")), vec![2, 4]);
        assert_eq!(ids(&filter_by_query(rows(), "noida")), vec![1, 3]);
    }

    #[test]
    fn test_query_only_returns_matches() {
        let query = "es";
        for row in filter_by_query(rows(), query) {
            assert!(
                row.name.to_lowercase().contains(query) || row.city.to_lowercase().contains(query)
            );
        }
        assert!(filter_by_query(rows(), "zzz").is_empty());
    }

    #[test]
    fn test_query_is_not_trimmed_for_matching() {
        // Leading space must match literally.
        assert_eq!(ids(&filter_by_query(rows(), " tech")), vec![4]);
    }

    #[test]
    fn test_sort_ascending_and_descending() {
        let mut list = rows();
        sort_records(&mut list, RowColumn::Name, SortDirection::Asc);
        assert_eq!(ids(&list), vec![1, 3, 4, 2]);

        sort_records(&mut list, RowColumn::Name, SortDirection::Desc);
        assert_eq!(ids(&list), vec![2, 4, 3, 1]);
    }

    #[test]
    fn test_sort_is_stable_in_both_directions() {
        let mut list = rows();
        sort_records(&mut list, RowColumn::City, SortDirection::Asc);
        // Noida rows (1, 3) keep their fetched order.
        assert_eq!(ids(&list), vec![2, 1, 3, 4]);

        let mut list = rows();
        sort_records(&mut list, RowColumn::City, SortDirection::Desc);
        assert_eq!(ids(&list), vec![4, 1, 3, 2]);

        let mut list = rows();
        sort_records(&mut list, RowColumn::Score, SortDirection::Desc);
        assert_eq!(ids(&list), vec![1, 4, 3, 2]);
    }

    #[test]
    fn test_sort_is_idempotent_and_reversible() {
        let mut once = rows();
        sort_records(&mut once, RowColumn::Name, SortDirection::Asc);
        let mut twice = once.clone();
        sort_records(&mut twice, RowColumn::Name, SortDirection::Asc);
        assert_eq!(once, twice);

        let mut reversed = once.clone();
        sort_records(&mut reversed, RowColumn::Name, SortDirection::Desc);
        let mut back = reversed.clone();
        sort_records(&mut back, RowColumn::Name, SortDirection::Asc);
        assert_eq!(back, once);
        reversed.reverse();
        assert_eq!(reversed, once);
    }

    #[test]
    fn test_toggle() {
        let state = SortState::<RowColumn>::initial();
        assert_eq!(state.key, RowColumn::Name);
        assert_eq!(state.direction, SortDirection::Asc);

        let state = state.toggle(RowColumn::Name);
        assert_eq!(state.direction, SortDirection::Desc);

        let state = state.toggle(RowColumn::Name);
        assert_eq!(state.direction, SortDirection::Asc);

        let state = state.toggle(RowColumn::Name).toggle(RowColumn::City);
        assert_eq!(state.key, RowColumn::City);
        assert_eq!(state.direction, SortDirection::Asc);
    }

    #[test]
    fn test_indicator() {
        let state = SortState {
            key: RowColumn::Score,
            direction: SortDirection::Desc,
        };
        assert_eq!(state.indicator(RowColumn::Score), Some("↓"));
        assert_eq!(state.indicator(RowColumn::Name), None);
    }

    #[test]
    fn test_from_params() {
        let state = SortState::<RowColumn>::from_params(Some("score"), Some("desc")).unwrap_or_else(SortState::initial);
        assert_eq!(state.key, RowColumn::Score);
        assert_eq!(state.direction, SortDirection::Desc);

        assert!(SortState::<RowColumn>::from_params(None, Some("desc")).is_none());
        assert!(SortState::<RowColumn>::from_params(Some("bogus"), None).is_none());

        let state = SortState::<RowColumn>::from_params(Some("city"), Some("sideways"));
        assert_eq!(state.map(|s| s.direction), Some(SortDirection::Asc));
    }

    #[test]
    fn test_apply_uses_state() {
        let mut list = rows();
        SortState {
            key: RowColumn::Score,
            direction: SortDirection::Asc,
        }
        .apply(&mut list);
        assert_eq!(ids(&list), vec![2, 3, 1, 4]);
        assert_eq!(RowColumn::Score.as_param(), "score");
    }
}
