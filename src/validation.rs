//! Input validation and plan verification.
//!
//! Two independent checks:
//!
//! - [`validate_input`] inspects courses and request before planning.
//!   Detects duplicate ids, zero-credit courses, non-positive budgets or
//!   caps, implausible start years and prerequisite cycles. Collects all
//!   problems instead of stopping at the first.
//! - [`verify_plan`] inspects produced terms after planning and reports
//!   every broken plan invariant as a [`Violation`].
//!
//! Neither is run implicitly by [`generate_plan`](crate::generate_plan);
//! request validation belongs to the caller.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4 (Topological Sort)

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::error::PlanError;
use crate::models::{CourseNode, PlanningRequest, Term};
use crate::resolver::CourseGraph;

/// Earliest start year accepted by [`validate_input`].
pub const MIN_START_YEAR: i32 = 1900;

/// Latest start year accepted by [`validate_input`].
pub const MAX_START_YEAR: i32 = 9999;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two courses share the same ID.
    DuplicateId,
    /// A course carries zero credits.
    InvalidCredits,
    /// Prerequisite graph contains a cycle.
    CyclicDependency,
    /// A request field is out of range.
    InvalidRequest,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates courses and request before planning.
///
/// Checks:
/// 1. No duplicate course IDs
/// 2. Every course has positive credits
/// 3. `semesters_remaining` and `max_credits_per_semester` are positive
/// 4. Start year lies in [`MIN_START_YEAR`]..=[`MAX_START_YEAR`]
/// 5. No circular prerequisites (self-prerequisites included)
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(courses: &[CourseNode], request: &PlanningRequest) -> ValidationResult {
    let mut errors = Vec::new();

    let mut ids = HashSet::new();
    for course in courses {
        if !ids.insert(course.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate course ID: {}", course.id),
            ));
        }
        if course.credits == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCredits,
                format!("Course '{}' has zero credits", course.id),
            ));
        }
    }

    if request.semesters_remaining == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidRequest,
            "semestersRemaining must be positive",
        ));
    }
    if request.max_credits_per_semester == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidRequest,
            "maxCreditsPerSemester must be positive",
        ));
    }
    if request.start_year < MIN_START_YEAR {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidRequest,
            format!("startYear {} is before {MIN_START_YEAR}", request.start_year),
        ));
    }
    if request.start_year > MAX_START_YEAR {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidRequest,
            format!("startYear {} is after {MAX_START_YEAR}", request.start_year),
        ));
    }

    if let Err(PlanError::CycleDetected { course_ids }) =
        CourseGraph::build(courses).topological_order()
    {
        errors.push(ValidationError::new(
            ValidationErrorKind::CyclicDependency,
            format!(
                "Circular prerequisite dependency involving: {}",
                course_ids.join(", ")
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// A prerequisite reference that names neither a provided course nor a
/// taken one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingPrerequisite {
    pub course_id: String,
    pub prereq_id: String,
}

/// Lists prerequisite ids the planner will treat as satisfied only
/// because they are absent from the input.
///
/// Planning ignores such ids; this lets a caller tell an omitted
/// prerequisite from a completed one.
pub fn missing_prerequisites(
    courses: &[CourseNode],
    request: &PlanningRequest,
) -> Vec<MissingPrerequisite> {
    let graph = CourseGraph::build(courses);
    let mut missing = Vec::new();
    for course in courses {
        for prereq in &course.prereq_ids {
            if !graph.contains(prereq) && !request.is_taken(prereq) {
                missing.push(MissingPrerequisite {
                    course_id: course.id.clone(),
                    prereq_id: prereq.clone(),
                });
            }
        }
    }
    missing
}

/// A broken plan invariant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    /// Type of violation.
    pub violation_type: ViolationType,
    /// Related course id, or the term label for term-level violations.
    pub entity_id: String,
    /// Human-readable description.
    pub message: String,
    /// Severity (0-100, higher = worse).
    pub severity: i32,
}

/// Classification of plan violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationType {
    /// A course appears in more than one term.
    DuplicatePlacement,
    /// A course is placed in or before the term of one of its prerequisites.
    PrerequisiteOrder,
    /// A term exceeds the effective credit cap.
    CreditCapExceeded,
    /// More terms than the request allows.
    TermBudgetExceeded,
    /// A term's season/year does not match its position in the rotation.
    SeasonRotation,
    /// A taken course was placed.
    TakenCoursePlaced,
}

impl Violation {
    fn new(
        violation_type: ViolationType,
        entity_id: impl Into<String>,
        message: impl Into<String>,
        severity: i32,
    ) -> Self {
        Self {
            violation_type,
            entity_id: entity_id.into(),
            message: message.into(),
            severity,
        }
    }
}

/// Checks produced terms against the plan invariants.
///
/// Returns every violation found; an empty vector means the plan is valid.
pub fn verify_plan<'a>(
    terms: impl IntoIterator<Item = &'a Term>,
    courses: &[CourseNode],
    request: &PlanningRequest,
) -> Vec<Violation> {
    let mut violations = Vec::new();
    let terms: Vec<&Term> = terms.into_iter().collect();
    let cap = request.effective_credit_cap();

    if terms.len() > request.semesters_remaining as usize {
        violations.push(Violation::new(
            ViolationType::TermBudgetExceeded,
            "plan",
            format!(
                "{} terms produced, budget is {}",
                terms.len(),
                request.semesters_remaining
            ),
            70,
        ));
    }

    // Expected (season, year) by position, walking the rotation forward.
    let mut expected = request.start_term();
    let mut expected_position = 0;
    let mut last_position: Option<u32> = None;
    let mut placed: HashMap<&str, u32> = HashMap::new();

    for term in &terms {
        let label = term.term_id().label();

        if last_position.is_some_and(|p| term.position <= p) {
            violations.push(Violation::new(
                ViolationType::SeasonRotation,
                &label,
                format!("Term position {} is not increasing", term.position),
                60,
            ));
        } else {
            while expected_position < term.position {
                expected = expected.next();
                expected_position += 1;
            }
            if term.term_id() != expected {
                violations.push(Violation::new(
                    ViolationType::SeasonRotation,
                    &label,
                    format!("Position {} should be {expected}", term.position),
                    60,
                ));
            }
        }
        if term.term_id().is_summer() && !request.prefers_summer {
            violations.push(Violation::new(
                ViolationType::SeasonRotation,
                &label,
                "Summer term scheduled without summer preference",
                50,
            ));
        }
        last_position = Some(term.position);

        if term.total_credits > cap {
            violations.push(Violation::new(
                ViolationType::CreditCapExceeded,
                &label,
                format!("{} credits exceeds cap of {cap}", term.total_credits),
                90,
            ));
        }

        for course in &term.courses {
            if request.is_taken(&course.id) {
                violations.push(Violation::new(
                    ViolationType::TakenCoursePlaced,
                    &course.id,
                    format!("Taken course placed in {label}"),
                    80,
                ));
            }
            if placed.insert(course.id.as_str(), term.position).is_some() {
                violations.push(Violation::new(
                    ViolationType::DuplicatePlacement,
                    &course.id,
                    format!("Course placed again in {label}"),
                    95,
                ));
            }
        }
    }

    let in_set: HashSet<&str> = courses.iter().map(|c| c.id.as_str()).collect();
    for course in courses {
        let Some(&position) = placed.get(course.id.as_str()) else {
            continue;
        };
        for prereq in &course.prereq_ids {
            if !in_set.contains(prereq.as_str()) || request.is_taken(prereq) {
                continue;
            }
            match placed.get(prereq.as_str()) {
                Some(&p) if p < position => {}
                Some(&p) => violations.push(Violation::new(
                    ViolationType::PrerequisiteOrder,
                    &course.id,
                    format!("Prerequisite '{prereq}' at position {p}, course at {position}"),
                    95,
                )),
                None => violations.push(Violation::new(
                    ViolationType::PrerequisiteOrder,
                    &course.id,
                    format!("Prerequisite '{prereq}' is never placed"),
                    95,
                )),
            }
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PlannedCourse, Season, TermId};

    fn request() -> PlanningRequest {
        PlanningRequest::new(TermId::new(Season::Fall, 2024), 3, 6)
    }

    fn planned(id: &str, credits: u32) -> PlannedCourse {
        PlannedCourse::from(&CourseNode::new(id, credits))
    }

    fn chain() -> Vec<CourseNode> {
        vec![
            CourseNode::new("A", 3),
            CourseNode::new("B", 3).with_prereq("A"),
        ]
    }

    fn kinds(violations: &[Violation]) -> Vec<ViolationType> {
        violations.iter().map(|v| v.violation_type).collect()
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_input(&chain(), &request()).is_ok());
    }

    #[test]
    fn test_duplicate_course_id() {
        let courses = vec![CourseNode::new("A", 3), CourseNode::new("A", 4)];
        let errors = validate_input(&courses, &request()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_zero_credits() {
        let courses = vec![CourseNode::new("A", 0)];
        let errors = validate_input(&courses, &request()).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidCredits);
    }

    #[test]
    fn test_invalid_request_fields() {
        let req = PlanningRequest::new(TermId::new(Season::Fall, 1800), 0, 0);
        let errors = validate_input(&[], &req).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::InvalidRequest)
                .count(),
            3
        );
    }

    #[test]
    fn test_start_year_upper_bound() {
        let req = PlanningRequest::new(TermId::new(Season::Fall, i32::MAX), 2, 15);
        let errors = validate_input(&[], &req).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidRequest);
        let latest = PlanningRequest::new(TermId::new(Season::Fall, MAX_START_YEAR), 2, 15);
        assert!(validate_input(&[], &latest).is_ok());
    }

    #[test]
    fn test_cyclic_dependency() {
        let courses = vec![
            CourseNode::new("A", 3).with_prereq("C"),
            CourseNode::new("B", 3).with_prereq("A"),
            CourseNode::new("C", 3).with_prereq("B"),
        ];
        let errors = validate_input(&courses, &request()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::CyclicDependency));
    }

    #[test]
    fn test_self_prerequisite() {
        let courses = vec![CourseNode::new("A", 3).with_prereq("A")];
        let errors = validate_input(&courses, &request()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains('A'));
    }

    #[test]
    fn test_multiple_errors() {
        let courses = vec![CourseNode::new("A", 0), CourseNode::new("A", 3)];
        let errors = validate_input(&courses, &request()).unwrap_err();
        assert!(errors.len() >= 2);
    }

    #[test]
    fn test_missing_prerequisites() {
        let courses = vec![
            CourseNode::new("B", 3).with_prereqs(["A", "X", "T"]),
            CourseNode::new("A", 3),
        ];
        let req = request().with_taken("T");
        let missing = missing_prerequisites(&courses, &req);
        assert_eq!(
            missing,
            vec![MissingPrerequisite {
                course_id: "B".into(),
                prereq_id: "X".into(),
            }]
        );
    }

    #[test]
    fn test_verify_valid_terms() {
        let terms = vec![
            Term::new(TermId::new(Season::Fall, 2024), 0, vec![planned("A", 3)]),
            Term::new(TermId::new(Season::Spring, 2025), 1, vec![planned("B", 3)]),
        ];
        assert!(verify_plan(&terms, &chain(), &request()).is_empty());
    }

    #[test]
    fn test_verify_same_term_prerequisite() {
        let terms = vec![Term::new(
            TermId::new(Season::Fall, 2024),
            0,
            vec![planned("A", 3), planned("B", 3)],
        )];
        let violations = verify_plan(&terms, &chain(), &request());
        assert_eq!(kinds(&violations), vec![ViolationType::PrerequisiteOrder]);
        assert_eq!(violations[0].entity_id, "B");
    }

    #[test]
    fn test_verify_credit_cap_and_duplicates() {
        let terms = vec![
            Term::new(
                TermId::new(Season::Fall, 2024),
                0,
                vec![planned("A", 3), planned("X", 4)],
            ),
            Term::new(TermId::new(Season::Spring, 2025), 1, vec![planned("A", 3)]),
        ];
        let violations = verify_plan(&terms, &chain(), &request());
        let found = kinds(&violations);
        assert!(found.contains(&ViolationType::CreditCapExceeded));
        assert!(found.contains(&ViolationType::DuplicatePlacement));
    }

    #[test]
    fn test_verify_rotation_and_summer() {
        let terms = vec![
            Term::new(TermId::new(Season::Fall, 2024), 0, vec![planned("A", 3)]),
            // Position 2 is Summer 2025; Fall 2025 here is out of rotation.
            Term::new(TermId::new(Season::Fall, 2025), 2, vec![planned("B", 3)]),
        ];
        let violations = verify_plan(&terms, &chain(), &request());
        assert_eq!(kinds(&violations), vec![ViolationType::SeasonRotation]);

        let terms = vec![Term::new(
            TermId::new(Season::Summer, 2025),
            2,
            vec![planned("A", 3)],
        )];
        let violations = verify_plan(&terms, &chain(), &request());
        assert_eq!(kinds(&violations), vec![ViolationType::SeasonRotation]);
    }

    #[test]
    fn test_verify_budget_and_taken() {
        let req = PlanningRequest::new(TermId::new(Season::Fall, 2024), 1, 6).with_taken("A");
        let terms = vec![
            Term::new(TermId::new(Season::Fall, 2024), 0, vec![planned("A", 3)]),
            Term::new(TermId::new(Season::Spring, 2025), 1, vec![planned("B", 3)]),
        ];
        let found = kinds(&verify_plan(&terms, &chain(), &req));
        assert!(found.contains(&ViolationType::TermBudgetExceeded));
        assert!(found.contains(&ViolationType::TakenCoursePlaced));
        assert!(!found.contains(&ViolationType::PrerequisiteOrder));
    }
}
