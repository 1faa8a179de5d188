//! Inclusive year filter applied to artwork searches

use std::fmt;

use serde::{Deserialize, Serialize};

/// Inclusive range of years; either end may be open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub struct YearRange {
    pub start: Option<i32>,
    pub end: Option<i32>,
}

impl YearRange {
    /// Build a range, swapping the ends if they were given backwards
    pub fn new(start: Option<i32>, end: Option<i32>) -> Self {
        match (start, end) {
            (Some(s), Some(e)) if s > e => Self {
                start: Some(e),
                end: Some(s),
            },
            _ => Self { start, end },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Whether a (possibly unknown) year falls in the range
    ///
    /// An unknown year only matches the empty range.
    pub fn contains(&self, year: Option<i32>) -> bool {
        let Some(year) = year else {
            return self.is_empty();
        };
        if self.start.is_some_and(|start| year < start) {
            return false;
        }
        if self.end.is_some_and(|end| year > end) {
            return false;
        }
        true
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.start, self.end) {
            (None, None) => write!(f, "All years"),
            (Some(start), Some(end)) => write!(f, "{start} – {end}"),
            (Some(start), None) => write!(f, "{start}+"),
            (None, Some(end)) => write!(f, "≤ {end}"),
        }
    }
}
