//! Plan generation entry point and plan assembly.
//!
//! `generate_plan` runs the full pipeline:
//!
//! 1. Resolve a topological course order (fails on a prerequisite cycle).
//! 2. Schedule terms greedily.
//! 3. Assemble the external [`Plan`] record: ids, term names,
//!    preference echo and timestamps.
//!
//! Ids and timestamps are the only non-deterministic parts of the output.

use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{
    CourseNode, Diagnostics, Plan, PlanPreferences, PlannedSemester, PlanningRequest,
};
use crate::resolver::CourseGraph;
use crate::scheduler::{ScheduleOutcome, TermScheduler};

/// Version stamped on every generated plan.
pub const GENERATOR_VERSION: &str = "1.0.0";

/// Name given to generated plans unless overridden.
pub const DEFAULT_PLAN_NAME: &str = "Generated Plan";

/// A generated plan and the diagnostics raised while building it.
#[derive(Debug, Clone)]
pub struct GeneratedPlan {
    pub plan: Plan,
    pub diagnostics: Diagnostics,
}

impl GeneratedPlan {
    /// Whether generation finished without any diagnostics.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Wraps scheduler output into the external plan format.
#[derive(Debug, Clone)]
pub struct PlanAssembler {
    name: String,
}

impl PlanAssembler {
    /// Creates an assembler using [`DEFAULT_PLAN_NAME`].
    pub fn new() -> Self {
        Self {
            name: DEFAULT_PLAN_NAME.to_string(),
        }
    }

    /// Sets the plan name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Assembles a plan stamped with the current time.
    pub fn assemble(&self, outcome: ScheduleOutcome, request: &PlanningRequest) -> GeneratedPlan {
        self.assemble_at(outcome, request, Utc::now())
    }

    /// Assembles a plan stamped with the given time.
    pub fn assemble_at(
        &self,
        outcome: ScheduleOutcome,
        request: &PlanningRequest,
        now: DateTime<Utc>,
    ) -> GeneratedPlan {
        let semesters = outcome
            .terms
            .into_iter()
            .map(|term| PlannedSemester {
                id: Uuid::new_v4(),
                name: term.term_id().label(),
                term,
            })
            .collect();

        let plan = Plan {
            id: Uuid::new_v4(),
            name: self.name.clone(),
            semesters,
            start_semester: outcome.start_term,
            end_semester: outcome.end_term,
            preferences: PlanPreferences {
                max_credits_per_semester: request.max_credits_per_semester,
                allow_overload: request.allow_overload,
                summer_courses: request.prefers_summer,
            },
            generator_version: GENERATOR_VERSION.to_string(),
            created_at: now,
            updated_at: now,
        };

        GeneratedPlan {
            plan,
            diagnostics: outcome.diagnostics,
        }
    }
}

impl Default for PlanAssembler {
    fn default() -> Self {
        Self::new()
    }
}

/// Generates a term-by-term plan for the given courses.
///
/// # Errors
/// [`PlanError::CycleDetected`](crate::PlanError::CycleDetected) when the
/// prerequisites do not form a DAG. Every other problem degrades to
/// diagnostics on a possibly incomplete plan.
///
/// # Example
///
/// ```
/// use u_courseplan::generate_plan;
/// use u_courseplan::models::{CourseNode, PlanningRequest, Season, TermId};
///
/// let courses = vec![
///     CourseNode::new("cs101", 3).with_code("CS101"),
///     CourseNode::new("cs102", 3).with_code("CS102").with_prereq("cs101"),
/// ];
/// let request = PlanningRequest::new(TermId::new(Season::Fall, 2024), 4, 15);
///
/// let generated = generate_plan(&request, &courses).unwrap();
/// assert_eq!(generated.plan.semesters.len(), 2);
/// assert_eq!(generated.plan.semesters[1].name, "Spring 2025");
/// assert!(generated.is_clean());
/// ```
pub fn generate_plan(request: &PlanningRequest, courses: &[CourseNode]) -> Result<GeneratedPlan> {
    let graph = CourseGraph::build(courses);
    let ordered = graph.ordered_courses()?;
    let outcome = TermScheduler::new().schedule(&ordered, request);
    let generated = PlanAssembler::new().assemble(outcome, request);

    info!(
        plan_id = %generated.plan.id,
        semesters = generated.plan.semesters.len(),
        courses = generated.plan.course_count(),
        prerequisite_edges = graph.edge_count(),
        diagnostics = generated.diagnostics.len(),
        "plan generated"
    );

    Ok(generated)
}
