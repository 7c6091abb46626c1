//! Course-plan scheduling for the U-Engine ecosystem.
//!
//! Turns a resolved list of required courses and a student's planning
//! constraints into a term-by-term academic plan.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `CourseNode`, `PlanningRequest`, `Term`,
//!   `Plan`, `Diagnostic`, `Season`/`TermId`
//! - **`resolver`**: Prerequisite graph and topological ordering (cycle detection)
//! - **`scheduler`**: Greedy term placement and plan KPIs
//! - **`planner`**: End-to-end `generate_plan` and plan assembly
//! - **`validation`**: Input checks and post-hoc plan invariant verification
//!
//! # Failure Model
//!
//! A prerequisite cycle is the only fatal error ([`PlanError::CycleDetected`]).
//! Everything else (empty terms, exhausted budgets, unplaceable courses)
//! degrades to [`models::Diagnostic`]s returned next to a partial plan.
//!
//! # References
//!
//! - Kahn (1962), "Topological sorting of large networks"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod error;
pub mod models;
pub mod planner;
pub mod resolver;
pub mod scheduler;
pub mod validation;

pub use error::{PlanError, Result};
pub use planner::{generate_plan, GeneratedPlan, PlanAssembler};
