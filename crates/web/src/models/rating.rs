//! Ratings a store owner has received.

use std::cmp::Ordering;

use chrono::NaiveDate;

use store_rating_core::{RatingId, Score, Searchable, SortColumn};

/// One user's rating of the owner's store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingEntry {
    pub id: RatingId,
    pub name: String,
    pub email: String,
    pub rating: Score,
    pub date: NaiveDate,
}

impl RatingEntry {
    /// Date in long US form, e.g. "May 15, 2023".
    #[must_use]
    pub fn formatted_date(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }
}

impl Searchable for RatingEntry {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }
}

/// Sortable columns of the owner's ratings list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingColumn {
    Name,
    Email,
    Rating,
    Date,
}

impl SortColumn for RatingColumn {
    type Record = RatingEntry;

    const DEFAULT: Self = Self::Name;

    fn from_param(param: &str) -> Option<Self> {
        match param {
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "rating" => Some(Self::Rating),
            "date" => Some(Self::Date),
            _ => None,
        }
    }

    fn as_param(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Rating => "rating",
            Self::Date => "date",
        }
    }

    fn compare(&self, a: &RatingEntry, b: &RatingEntry) -> Ordering {
        match self {
            Self::Name => a.name.cmp(&b.name),
            Self::Email => a.email.cmp(&b.email),
            Self::Rating => a.rating.cmp(&b.rating),
            Self::Date => a.date.cmp(&b.date),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use store_rating_core::{SortDirection, sort_records};

    fn entry(id: i32, rating: u8, date: (i32, u32, u32)) -> RatingEntry {
        RatingEntry {
            id: RatingId::new(id),
            name: format!("User {id}"),
            email: format!("user{id}@example.com"),
            rating: Score::new(rating).unwrap(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        }
    }

    #[test]
    fn test_formatted_date() {
        assert_eq!(entry(1, 4, (2023, 5, 15)).formatted_date(), "May 15, 2023");
        assert_eq!(entry(2, 3, (2023, 6, 1)).formatted_date(), "June 1, 2023");
    }

    #[test]
    fn test_sort_by_date_is_chronological() {
        let mut entries = vec![
            entry(1, 4, (2023, 6, 10)),
            entry(2, 5, (2023, 5, 20)),
            entry(3, 2, (2023, 6, 1)),
        ];

        sort_records(&mut entries, RatingColumn::Date, SortDirection::Asc);
        let ids: Vec<i32> = entries.iter().map(|e| e.id.as_i32()).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_sort_by_rating_keeps_ties_in_order() {
        let mut entries = vec![
            entry(1, 4, (2023, 5, 15)),
            entry(2, 5, (2023, 5, 20)),
            entry(3, 4, (2023, 6, 10)),
        ];

        sort_records(&mut entries, RatingColumn::Rating, SortDirection::Desc);
        let ids: Vec<i32> = entries.iter().map(|e| e.id.as_i32()).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }
}
