//! Rating scores and their display helpers.

use serde::{Deserialize, Serialize};

/// Error returned when a score is outside 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("rating must be between {min} and {max}, got {value}")]
pub struct ScoreError {
    /// The rejected value.
    pub value: u8,
    /// Smallest accepted score.
    pub min: u8,
    /// Largest accepted score.
    pub max: u8,
}

/// An integer rating a user gives a store, between 1 and 5 stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Score(u8);

impl Score {
    /// Lowest score.
    pub const MIN: u8 = 1;
    /// Highest score.
    pub const MAX: u8 = 5;

    /// Create a score.
    ///
    /// # Errors
    ///
    /// Returns `ScoreError` if `value` is outside 1..=5.
    pub const fn new(value: u8) -> Result<Self, ScoreError> {
        if value < Self::MIN || value > Self::MAX {
            return Err(ScoreError {
                value,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Self(value))
    }

    /// The numeric value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Five flags, `true` for each filled star.
    #[must_use]
    pub fn stars(self) -> [bool; 5] {
        std::array::from_fn(|i| i < usize::from(self.0))
    }

    /// Every valid score, lowest first.
    pub fn all() -> impl DoubleEndedIterator<Item = Self> {
        (Self::MIN..=Self::MAX).map(Self)
    }
}

impl TryFrom<u8> for Score {
    type Error = ScoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a single star renders for a fractional average.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarFill {
    Full,
    Partial,
    Empty,
}

impl StarFill {
    /// Five star fills for an average rating such as 4.2.
    ///
    /// Stars below the integer part are full, the star holding the fraction
    /// is partial, the rest are empty.
    #[must_use]
    pub fn for_average(average: f64) -> [Self; 5] {
        std::array::from_fn(|i| {
            #[allow(clippy::cast_precision_loss)] // i < 5
            let position = i as f64;
            if position < average.floor() {
                Self::Full
            } else if position < average {
                Self::Partial
            } else {
                Self::Empty
            }
        })
    }

    /// CSS class for the star.
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match self {
            Self::Full => "star star-full",
            Self::Partial => "star star-partial",
            Self::Empty => "star star-empty",
        }
    }
}

/// Format an aggregate rating with one decimal place (e.g. `4.5`).
#[must_use]
pub fn format_rating(rating: f64) -> String {
    format!("{rating:.1}")
}

/// Number of ratings received per score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RatingDistribution {
    counts: [u32; 5],
}

impl RatingDistribution {
    /// Count the given scores.
    pub fn from_scores(scores: impl IntoIterator<Item = Score>) -> Self {
        let mut counts = [0_u32; 5];
        for score in scores {
            if let Some(slot) = counts.get_mut(usize::from(score.value() - 1)) {
                *slot += 1;
            }
        }
        Self { counts }
    }

    /// Number of ratings with exactly this score.
    #[must_use]
    pub fn count(&self, score: Score) -> u32 {
        self.counts
            .get(usize::from(score.value() - 1))
            .copied()
            .unwrap_or(0)
    }

    /// Total number of ratings counted.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Share of ratings with this score, as a whole percentage.
    #[must_use]
    pub fn percent(&self, score: Score) -> u32 {
        let total = self.total();
        if total == 0 {
            return 0;
        }
        self.count(score) * 100 / total
    }

    /// Mean score, or `None` when nothing was counted.
    #[must_use]
    pub fn average(&self) -> Option<f64> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        let weighted: u32 = Score::all()
            .map(|score| u32::from(score.value()) * self.count(score))
            .sum();
        Some(f64::from(weighted) / f64::from(total))
    }
}
