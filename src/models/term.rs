//! Academic seasons and term identifiers.
//!
//! # Rotation
//! Terms follow the calendar order `Spring → Summer → Fall → Spring`.
//! The year increments exactly when wrapping from Fall to Spring, so
//! `Fall 2024` is followed by `Spring 2025`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PlanError;

/// Academic season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    Fall,
}

impl Season {
    /// The following season, and whether the year rolls over.
    pub fn next(self) -> (Season, bool) {
        match self {
            Season::Spring => (Season::Summer, false),
            Season::Summer => (Season::Fall, false),
            Season::Fall => (Season::Spring, true),
        }
    }

    /// Season name.
    pub fn as_str(self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Season {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "spring" => Ok(Season::Spring),
            "summer" => Ok(Season::Summer),
            "fall" => Ok(Season::Fall),
            other => Err(PlanError::InvalidRequest(format!(
                "unknown season '{other}'"
            ))),
        }
    }
}

/// A (season, year) pair identifying one academic term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TermId {
    pub season: Season,
    pub year: i32,
}

impl TermId {
    /// Creates a term identifier.
    pub fn new(season: Season, year: i32) -> Self {
        Self { season, year }
    }

    /// The term that follows this one in the rotation.
    ///
    /// The year saturates at `i32::MAX`.
    pub fn next(self) -> Self {
        let (season, rollover) = self.season.next();
        Self {
            season,
            year: if rollover {
                self.year.saturating_add(1)
            } else {
                self.year
            },
        }
    }

    /// Whether this is a Summer term.
    #[inline]
    pub fn is_summer(self) -> bool {
        self.season == Season::Summer
    }

    /// Display label, e.g. "Fall 2024".
    pub fn label(self) -> String {
        format!("{} {}", self.season, self.year)
    }
}

impl fmt::Display for TermId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.season, self.year)
    }
}
