//! Greedy term-by-term course placement.
//!
//! # Algorithm
//!
//! 1. Walk terms from the request's start term in rotation order.
//! 2. Skip Summer terms unless the request prefers summer. A skipped term
//!    advances the position but does not consume the term budget.
//! 3. Otherwise scan unplaced courses in resolver order. A course is
//!    eligible when every in-set prerequisite is taken or was placed in
//!    an earlier term. Accept eligible courses first-fit while the running
//!    credit total stays within the effective cap.
//! 4. An empty term records `no_placement`. After
//!    [`MAX_CONSECUTIVE_EMPTY_TERMS`] empty terms in a row, record
//!    `placement_impossible` and stop.
//! 5. Stop when everything is placed or the budget is spent. Record
//!    `incomplete_schedule` if anything is left.
//!
//! Placement is first-fit, never reordered for a tighter fit.
//!
//! # Complexity
//! O(T * n * p) where T=terms attempted, n=courses, p=prerequisites/course.

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::models::{
    CourseNode, Diagnostic, DiagnosticCode, Diagnostics, PlannedCourse, PlanningRequest, Term,
    TermId,
};

/// Consecutive empty terms tolerated before placement is abandoned.
pub const MAX_CONSECUTIVE_EMPTY_TERMS: u32 = 3;

/// Result of one scheduling run.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleOutcome {
    /// Filled terms in order.
    pub terms: Vec<Term>,
    /// Diagnostics in the order they were raised.
    pub diagnostics: Diagnostics,
    /// First term of the plan (from the request).
    pub start_term: TermId,
    /// Last filled term, or the start term when nothing was placed.
    pub end_term: TermId,
    /// Courses placed.
    pub courses_placed: usize,
    /// Courses that needed placement (taken courses excluded).
    pub total_courses: usize,
    /// Non-skipped terms consumed from the budget.
    pub terms_attempted: u32,
}

impl ScheduleOutcome {
    /// Whether every course that needed placement was placed.
    pub fn is_complete(&self) -> bool {
        self.courses_placed == self.total_courses
    }

    /// Position of the term holding a course.
    pub fn position_of(&self, course_id: &str) -> Option<u32> {
        self.terms
            .iter()
            .find(|t| t.contains(course_id))
            .map(|t| t.position)
    }
}

/// Greedy first-fit term scheduler.
///
/// # Example
///
/// ```
/// use u_courseplan::models::{CourseNode, PlanningRequest, Season, TermId};
/// use u_courseplan::resolver::resolve;
/// use u_courseplan::scheduler::TermScheduler;
///
/// let courses = vec![
///     CourseNode::new("A", 3),
///     CourseNode::new("B", 3).with_prereq("A"),
/// ];
/// let request = PlanningRequest::new(TermId::new(Season::Fall, 2024), 4, 15);
///
/// let ordered = resolve(&courses).unwrap();
/// let outcome = TermScheduler::new().schedule(&ordered, &request);
/// assert!(outcome.is_complete());
/// assert_eq!(outcome.position_of("B"), Some(1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TermScheduler;

impl TermScheduler {
    /// Creates a scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Places topologically ordered courses into terms.
    ///
    /// Never fails; unsatisfiable situations are reported as diagnostics
    /// alongside a partial plan.
    pub fn schedule(&self, ordered: &[&CourseNode], request: &PlanningRequest) -> ScheduleOutcome {
        let cap = request.effective_credit_cap();
        let start = request.start_term();
        let in_set: HashSet<&str> = ordered.iter().map(|c| c.id.as_str()).collect();

        // Courses needing placement, resolver order, one entry per id.
        let mut seen = HashSet::new();
        let remaining: Vec<&CourseNode> = ordered
            .iter()
            .copied()
            .filter(|&c| !request.is_taken(&c.id) && seen.insert(c.id.as_str()))
            .collect();
        let total_courses = remaining.len();

        let mut placed: HashMap<&str, u32> = HashMap::with_capacity(total_courses);
        let mut terms: Vec<Term> = Vec::new();
        let mut diagnostics = Diagnostics::new();
        let mut cursor = start;
        let mut position: u32 = 0;
        let mut attempted: u32 = 0;
        let mut empty_streak: u32 = 0;

        while placed.len() < total_courses && attempted < request.semesters_remaining {
            if cursor.is_summer() && !request.prefers_summer {
                debug!(term = %cursor, position, "skipping summer term");
                cursor = cursor.next();
                position += 1;
                continue;
            }
            attempted += 1;

            let mut credits: u32 = 0;
            let mut selected: Vec<&CourseNode> = Vec::new();
            for &course in &remaining {
                if placed.contains_key(course.id.as_str()) {
                    continue;
                }
                if !Self::is_eligible(course, &in_set, &placed, request) {
                    continue;
                }
                if let Some(total) = credits.checked_add(course.credits).filter(|&t| t <= cap) {
                    credits = total;
                    selected.push(course);
                }
            }

            if selected.is_empty() {
                empty_streak += 1;
                warn!(term = %cursor, position, empty_streak, "no course could be placed");
                diagnostics.push(
                    Diagnostic::new(
                        DiagnosticCode::NoPlacement,
                        format!("Could not place any course in {cursor} due to constraints"),
                    )
                    .with_detail("season", cursor.season.as_str())
                    .with_detail("year", cursor.year)
                    .with_detail("position", position),
                );

                if empty_streak >= MAX_CONSECUTIVE_EMPTY_TERMS {
                    let unplaced: Vec<&str> = remaining
                        .iter()
                        .map(|c| c.id.as_str())
                        .filter(|id| !placed.contains_key(id))
                        .collect();
                    warn!(
                        unplaced = unplaced.len(),
                        "placement abandoned after consecutive empty terms"
                    );
                    diagnostics.push(
                        Diagnostic::new(
                            DiagnosticCode::PlacementImpossible,
                            format!(
                                "No course could be placed for {empty_streak} consecutive terms; \
                                 remaining courses cannot become eligible"
                            ),
                        )
                        .with_detail("consecutiveEmptyTerms", empty_streak)
                        .with_detail("remainingCourseIds", unplaced),
                    );
                    break;
                }
            } else {
                empty_streak = 0;
                for &course in &selected {
                    placed.insert(course.id.as_str(), position);
                }
                debug!(
                    term = %cursor,
                    position,
                    courses = selected.len(),
                    credits,
                    "filled term"
                );
                let courses = selected.into_iter().map(PlannedCourse::from).collect();
                terms.push(Term::new(cursor, position, courses));
            }

            cursor = cursor.next();
            position += 1;
        }

        let courses_placed = placed.len();
        if courses_placed < total_courses {
            warn!(
                placed = courses_placed,
                total = total_courses,
                terms = terms.len(),
                "schedule is incomplete"
            );
            diagnostics.push(
                Diagnostic::new(
                    DiagnosticCode::IncompleteSchedule,
                    format!(
                        "Placed {courses_placed} of {total_courses} courses in {} terms",
                        terms.len()
                    ),
                )
                .with_detail("coursesPlaced", courses_placed)
                .with_detail("totalCourses", total_courses)
                .with_detail("termsUsed", terms.len()),
            );
        }

        let end_term = terms.last().map(Term::term_id).unwrap_or(start);

        ScheduleOutcome {
            terms,
            diagnostics,
            start_term: start,
            end_term,
            courses_placed,
            total_courses,
            terms_attempted: attempted,
        }
    }

    /// Every in-set prerequisite is taken or placed in an earlier term.
    fn is_eligible(
        course: &CourseNode,
        in_set: &HashSet<&str>,
        placed: &HashMap<&str, u32>,
        request: &PlanningRequest,
    ) -> bool {
        course.prereq_ids.iter().all(|p| {
            !in_set.contains(p.as_str()) || request.is_taken(p) || placed.contains_key(p.as_str())
        })
    }
}
