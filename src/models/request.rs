//! Planning request model.
//!
//! The request carries every tunable the scheduler honors. It arrives as
//! camelCase JSON from the request-validation layer; optional fields
//! take their defaults (`allowOverload = false`, `prefersSummer = false`,
//! no taken courses).
//!
//! The overload tolerance itself is a fixed policy value
//! ([`OVERLOAD_CREDITS`]), not a request field.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{Season, TermId};
use crate::error::{PlanError, Result};

/// Extra credits permitted above the cap when overload is allowed.
pub const OVERLOAD_CREDITS: u32 = 2;

/// Constraints for one plan generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanningRequest {
    /// Courses already completed. Never placed; satisfy prerequisites.
    #[serde(default)]
    pub taken_course_ids: BTreeSet<String>,
    /// Upper bound on the number of (non-skipped) terms attempted.
    pub semesters_remaining: u32,
    /// Nominal per-term credit cap.
    pub max_credits_per_semester: u32,
    /// Permit [`OVERLOAD_CREDITS`] above the cap.
    #[serde(default)]
    pub allow_overload: bool,
    /// Schedule Summer terms. When false, Summer terms are skipped.
    #[serde(default)]
    pub prefers_summer: bool,
    /// Season of the first term.
    pub start_season: Season,
    /// Year of the first term.
    pub start_year: i32,
}

impl PlanningRequest {
    /// Creates a request with no taken courses, no overload and no summers.
    pub fn new(start: TermId, semesters_remaining: u32, max_credits_per_semester: u32) -> Self {
        Self {
            taken_course_ids: BTreeSet::new(),
            semesters_remaining,
            max_credits_per_semester,
            allow_overload: false,
            prefers_summer: false,
            start_season: start.season,
            start_year: start.year,
        }
    }

    /// Parses a request from its JSON wire form.
    pub fn from_json(json: &str) -> Result<Self> {
        let request: Self = serde_json::from_str(json)?;
        if request.semesters_remaining == 0 {
            return Err(PlanError::InvalidRequest(
                "semestersRemaining must be positive".into(),
            ));
        }
        if request.max_credits_per_semester == 0 {
            return Err(PlanError::InvalidRequest(
                "maxCreditsPerSemester must be positive".into(),
            ));
        }
        Ok(request)
    }

    /// Marks a course as already taken.
    pub fn with_taken(mut self, course_id: impl Into<String>) -> Self {
        self.taken_course_ids.insert(course_id.into());
        self
    }

    /// Sets the overload allowance.
    pub fn with_overload(mut self, allow: bool) -> Self {
        self.allow_overload = allow;
        self
    }

    /// Sets the summer preference.
    pub fn with_summer(mut self, prefers: bool) -> Self {
        self.prefers_summer = prefers;
        self
    }

    /// First term of the plan.
    pub fn start_term(&self) -> TermId {
        TermId::new(self.start_season, self.start_year)
    }

    /// Per-term credit cap including any overload tolerance.
    pub fn effective_credit_cap(&self) -> u32 {
        if self.allow_overload {
            self.max_credits_per_semester.saturating_add(OVERLOAD_CREDITS)
        } else {
            self.max_credits_per_semester
        }
    }

    /// Whether a course id is in the taken set.
    #[inline]
    pub fn is_taken(&self, course_id: &str) -> bool {
        self.taken_course_ids.contains(course_id)
    }
}
