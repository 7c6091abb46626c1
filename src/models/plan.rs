//! Plan (solution) model.
//!
//! A [`Term`] is one filled scheduling slot produced by the scheduler.
//! A [`Plan`] is the externally visible record built by plan assembly:
//! terms plus identity, preference echo and timestamps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{CourseNode, CourseType, Season, TermId};

/// A course as placed in a term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedCourse {
    pub id: String,
    pub code: String,
    /// Catalog title; equals `code` when no title was supplied.
    pub title: String,
    pub credits: u32,
    #[serde(rename = "type")]
    pub course_type: CourseType,
}

impl From<&CourseNode> for PlannedCourse {
    fn from(node: &CourseNode) -> Self {
        Self {
            id: node.id.clone(),
            code: node.code.clone(),
            title: node.display_title().to_string(),
            credits: node.credits,
            course_type: node.course_type,
        }
    }
}

/// One filled academic term.
///
/// `position` is the zero-based index in the overall term sequence,
/// counting skipped and empty terms as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Term {
    pub season: Season,
    pub year: i32,
    pub position: u32,
    pub total_credits: u32,
    pub courses: Vec<PlannedCourse>,
}

impl Term {
    /// Builds a term from its placed courses; the credit total is derived.
    pub fn new(term: TermId, position: u32, courses: Vec<PlannedCourse>) -> Self {
        let total_credits = courses
            .iter()
            .fold(0u32, |acc, c| acc.saturating_add(c.credits));
        Self {
            season: term.season,
            year: term.year,
            position,
            total_credits,
            courses,
        }
    }

    /// The (season, year) of this term.
    pub fn term_id(&self) -> TermId {
        TermId::new(self.season, self.year)
    }

    /// Whether a course is placed in this term.
    pub fn contains(&self, course_id: &str) -> bool {
        self.courses.iter().any(|c| c.id == course_id)
    }
}

/// A term as presented in the assembled plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedSemester {
    pub id: Uuid,
    /// Display name, e.g. "Fall 2024".
    pub name: String,
    #[serde(flatten)]
    pub term: Term,
}

/// Preferences echoed back on the plan for the storage layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanPreferences {
    pub max_credits_per_semester: u32,
    pub allow_overload: bool,
    pub summer_courses: bool,
}

/// The assembled academic plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: Uuid,
    pub name: String,
    pub semesters: Vec<PlannedSemester>,
    pub start_semester: TermId,
    pub end_semester: TermId,
    pub preferences: PlanPreferences,
    pub generator_version: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Plan {
    /// Iterates over the filled terms in order.
    pub fn terms(&self) -> impl Iterator<Item = &Term> {
        self.semesters.iter().map(|s| &s.term)
    }

    /// Finds the term containing a course.
    pub fn term_for_course(&self, course_id: &str) -> Option<&Term> {
        self.terms().find(|t| t.contains(course_id))
    }

    /// Ids of all placed courses, in plan order.
    pub fn placed_course_ids(&self) -> Vec<&str> {
        self.terms()
            .flat_map(|t| t.courses.iter().map(|c| c.id.as_str()))
            .collect()
    }

    /// Number of placed courses.
    pub fn course_count(&self) -> usize {
        self.terms().map(|t| t.courses.len()).sum()
    }

    /// Sum of credits across all terms, saturating at `u32::MAX`.
    pub fn total_credits(&self) -> u32 {
        self.terms()
            .fold(0u32, |acc, t| acc.saturating_add(t.total_credits))
    }

    /// Number of filled terms.
    pub fn semester_count(&self) -> usize {
        self.semesters.len()
    }
}
