//! Course node model.
//!
//! A course node is the schedulable unit handed to the planner after
//! requirement resolution upstream: a stable id, a display code, a
//! credit weight, and the ids of the courses that must come first.

use serde::{Deserialize, Serialize};

/// Catalog classification of a course.
///
/// Carried through to the plan for presentation; it has no effect on
/// placement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CourseType {
    #[default]
    Core,
    #[serde(rename = "LP")]
    Lp,
    Elective,
    #[serde(rename = "Gen Ed")]
    GenEd,
    Major,
    Minor,
}

/// A course to be placed in the plan.
///
/// Prerequisite ids may reference courses outside the provided set;
/// those references are ignored by the resolver and the scheduler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseNode {
    /// Stable course identifier.
    pub id: String,
    /// Display code (e.g. "CS101").
    pub code: String,
    /// Credit weight (> 0).
    pub credits: u32,
    /// Ids of courses that must be completed first (all required).
    #[serde(default)]
    pub prereq_ids: Vec<String>,
    /// Catalog title, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Catalog classification.
    #[serde(default, rename = "type")]
    pub course_type: CourseType,
}

impl CourseNode {
    /// Creates a course whose code equals its id.
    pub fn new(id: impl Into<String>, credits: u32) -> Self {
        let id = id.into();
        Self {
            code: id.clone(),
            id,
            credits,
            prereq_ids: Vec::new(),
            title: None,
            course_type: CourseType::Core,
        }
    }

    /// Sets the display code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Adds a prerequisite.
    pub fn with_prereq(mut self, prereq_id: impl Into<String>) -> Self {
        self.prereq_ids.push(prereq_id.into());
        self
    }

    /// Adds several prerequisites.
    pub fn with_prereqs<I, S>(mut self, prereq_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prereq_ids
            .extend(prereq_ids.into_iter().map(Into::into));
        self
    }

    /// Sets the catalog title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the catalog classification.
    pub fn with_type(mut self, course_type: CourseType) -> Self {
        self.course_type = course_type;
        self
    }

    /// Title for display; falls back to the code.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.code)
    }
}
