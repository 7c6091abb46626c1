//! Fatal error type for plan generation.
//!
//! Only conditions that make scheduling meaningless are errors. Everything
//! the scheduler can degrade around is reported as a
//! [`Diagnostic`](crate::models::Diagnostic) instead.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, PlanError>;

/// Errors that abort plan generation.
#[derive(Error, Debug)]
pub enum PlanError {
    /// The prerequisite graph is not a DAG.
    ///
    /// `course_ids` lists the courses that could not be ordered, in input order.
    #[error("Prerequisite cycle detected among courses: {}", .course_ids.join(", "))]
    CycleDetected { course_ids: Vec<String> },

    /// A planning request could not be interpreted.
    #[error("Invalid planning request: {0}")]
    InvalidRequest(String),

    /// Request JSON could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PlanError {
    /// Machine-readable error code for the presentation layer.
    pub fn code(&self) -> &'static str {
        match self {
            Self::CycleDetected { .. } => "cycle_detected",
            Self::InvalidRequest(_) => "invalid_request",
            Self::Json(_) => "invalid_json",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_message_lists_courses() {
        let err = PlanError::CycleDetected {
            course_ids: vec!["A".into(), "B".into()],
        };
        assert_eq!(err.code(), "cycle_detected");
        assert_eq!(
            err.to_string(),
            "Prerequisite cycle detected among courses: A, B"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: PlanError = parse.unwrap_err().into();
        assert_eq!(err.code(), "invalid_json");
    }
}
